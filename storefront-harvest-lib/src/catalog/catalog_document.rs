use crate::Result;
use chrono::{DateTime, Utc};
use ohno::{IntoAppError, bail};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use strum::{Display, IntoStaticStr};

/// Which loading strategy produced a catalog document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, IntoStaticStr, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    /// A catalog file found on the local disk.
    #[default]
    LocalCache,

    /// A catalog file downloaded from the raw-file host.
    RemoteCatalog,

    /// Built from the public app list alone; per-game details are placeholders.
    Degraded,
}

/// The alternate game catalog.
///
/// Cached and remote catalog files are expected to share this shape. Every section except
/// `metadata` may be omitted from such files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogDocument {
    pub metadata: CatalogMetadata,

    #[serde(default)]
    pub statistics: CatalogStatistics,

    #[serde(default)]
    pub top_games: Vec<CatalogGame>,

    #[serde(default)]
    pub all_apps: Vec<SteamApp>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogMetadata {
    /// Stamped by the loader with the strategy that succeeded.
    #[serde(default)]
    pub source: CatalogSource,

    #[serde(default)]
    pub total_applications: usize,

    #[serde(default)]
    pub last_updated: Option<DateTime<Utc>>,

    /// Human-readable description of where the data came from.
    #[serde(default)]
    pub origin: String,

    #[serde(default)]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CatalogStatistics {
    pub total_games: usize,
    pub total_reviews: u64,
    pub average_price: f64,
    pub free_games: usize,
    pub average_rating: f64,
    pub total_developers: usize,
    pub total_publishers: usize,
    pub platform_support: PlatformCounts,
}

/// Number of games supporting each platform.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformCounts {
    pub windows: usize,
    pub mac: usize,
    pub linux: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogGame {
    pub app_id: u64,
    pub title: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub is_free: bool,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub reviews: u64,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub platforms: PlatformSupport,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformSupport {
    pub windows: bool,
    pub mac: bool,
    pub linux: bool,
}

/// One entry of the public app list, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SteamApp {
    pub appid: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> core::result::Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

const UNKNOWN: &str = "Unknown";

impl CatalogDocument {
    /// Interpret a decoded JSON file as a catalog document.
    ///
    /// Only an object whose `metadata` member is itself an object qualifies. Arrays and
    /// foreign layouts are rejected instead of being coerced into an empty catalog.
    ///
    /// # Errors
    ///
    /// Returns an error when the value does not have the catalog document layout.
    pub fn from_json(value: Value) -> Result<Self> {
        let Value::Object(members) = &value else {
            bail!("expected a JSON object at the top level");
        };

        if !matches!(members.get("metadata"), Some(Value::Object(_))) {
            bail!("missing 'metadata' object");
        }

        serde_json::from_value(value).into_app_err("unexpected catalog document layout")
    }

    /// Build a placeholder catalog from the bare app list.
    ///
    /// The first `top_n` apps become `top_games` with zero ratings, prices and review
    /// counts, no genres, and Windows as the only platform. Every app is kept in `all_apps`.
    #[must_use]
    pub fn degraded(apps: Vec<SteamApp>, now: DateTime<Utc>, top_n: usize) -> Self {
        let total = apps.len();

        let top_games = apps
            .iter()
            .take(top_n)
            .map(|app| CatalogGame {
                app_id: app.appid,
                title: app.name.clone(),
                developer: UNKNOWN.to_string(),
                publisher: UNKNOWN.to_string(),
                release_date: UNKNOWN.to_string(),
                price: 0.0,
                is_free: false,
                rating: 0.0,
                reviews: 0,
                genres: Vec::new(),
                platforms: PlatformSupport {
                    windows: true,
                    mac: false,
                    linux: false,
                },
            })
            .collect();

        Self {
            metadata: CatalogMetadata {
                source: CatalogSource::Degraded,
                total_applications: total,
                last_updated: Some(now),
                origin: "public app list".to_string(),
                note: Some("Only identifiers and names are known; per-game details require individual lookups.".to_string()),
            },
            statistics: CatalogStatistics {
                total_games: total,
                platform_support: PlatformCounts {
                    windows: total,
                    mac: 0,
                    linux: 0,
                },
                ..CatalogStatistics::default()
            },
            top_games,
            all_apps: apps,
        }
    }

    #[must_use]
    pub const fn is_degraded(&self) -> bool {
        matches!(self.metadata.source, CatalogSource::Degraded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn apps(count: u64) -> Vec<SteamApp> {
        (1..=count)
            .map(|appid| SteamApp {
                appid,
                name: format!("Game {appid}"),
            })
            .collect()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 5, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn test_degraded_uses_placeholders() {
        let doc = CatalogDocument::degraded(apps(3), now(), 100);

        assert!(doc.is_degraded());
        assert_eq!(doc.top_games.len(), 3);
        for game in &doc.top_games {
            assert!(game.rating.abs() < f64::EPSILON);
            assert!(game.price.abs() < f64::EPSILON);
            assert_eq!(game.reviews, 0);
            assert!(game.genres.is_empty());
            assert_eq!(game.developer, "Unknown");
            assert!(!game.is_free);
            assert!(game.platforms.windows && !game.platforms.mac && !game.platforms.linux);
        }
    }

    #[test]
    fn test_degraded_caps_top_games_and_keeps_all_apps() {
        let doc = CatalogDocument::degraded(apps(150), now(), 100);

        assert_eq!(doc.top_games.len(), 100);
        assert_eq!(doc.all_apps.len(), 150);
        assert_eq!(doc.metadata.total_applications, 150);
        assert_eq!(doc.statistics.total_games, 150);
        assert_eq!(doc.statistics.platform_support.windows, 150);
        assert_eq!(doc.statistics.free_games, 0);
        assert_eq!(doc.top_games[99].app_id, 100);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(CatalogDocument::degraded(apps(1), now(), 100)).unwrap();

        assert_eq!(value["metadata"]["source"], "degraded");
        assert_eq!(value["metadata"]["lastUpdated"], "2026-05-01T00:00:00Z");
        assert_eq!(value["topGames"][0]["isFree"], false);
        assert_eq!(value["topGames"][0]["platforms"], json!({ "windows": true, "mac": false, "linux": false }));
        assert_eq!(value["allApps"][0], json!({ "appid": 1, "name": "Game 1" }));
    }

    #[test]
    fn test_minimal_document_parses() {
        let doc: CatalogDocument = serde_json::from_value(json!({
            "metadata": { "totalApplications": 2 },
            "topGames": [{ "appId": 10, "title": "Ten" }]
        }))
        .unwrap();

        assert_eq!(doc.metadata.source, CatalogSource::LocalCache);
        assert_eq!(doc.top_games[0].title, "Ten");
        assert!(doc.all_apps.is_empty());
    }

    #[test]
    fn test_from_json_rejects_arrays() {
        let games = json!([{ "appid": 730, "name": "Counter-Strike 2" }, { "appid": 570, "name": "Dota 2" }]);
        let _ = CatalogDocument::from_json(games).unwrap_err();
    }

    #[test]
    fn test_from_json_requires_metadata_object() {
        let _ = CatalogDocument::from_json(json!({ "games": [{ "appid": 730 }] })).unwrap_err();
        let _ = CatalogDocument::from_json(json!({ "metadata": [1, 2] })).unwrap_err();

        let doc = CatalogDocument::from_json(json!({ "metadata": { "totalApplications": 3 } })).unwrap();
        assert_eq!(doc.metadata.total_applications, 3);
    }

    #[test]
    fn test_null_app_name_is_kept_as_empty() {
        let apps: Vec<SteamApp> =
            serde_json::from_value(json!([{ "appid": 1, "name": null }, { "appid": 2 }, { "appid": 3, "name": "Three" }])).unwrap();

        assert_eq!(apps.len(), 3);
        assert_eq!(apps[0].name, "");
        assert_eq!(apps[1].name, "");
        assert_eq!(apps[2].name, "Three");
    }

    #[test]
    fn test_source_names() {
        assert_eq!(CatalogSource::RemoteCatalog.to_string(), "remote_catalog");
        let name: &'static str = CatalogSource::Degraded.into();
        assert_eq!(name, "degraded");
    }
}
