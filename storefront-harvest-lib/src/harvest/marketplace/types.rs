use crate::harvest::ItemId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One entry of a search result, category listing, or similar/developer listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSummary {
    pub app_id: ItemId,
    pub title: String,
    #[serde(default)]
    pub developer: Option<String>,
    #[serde(default)]
    pub developer_id: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub icon: Option<String>,
}

/// Full detail of one marketplace entry.
///
/// Only `title` is required; everything else degrades to a default when the
/// marketplace omits it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDetail {
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub developer_id: Option<String>,
    #[serde(default)]
    pub developer_email: Option<String>,
    #[serde(default)]
    pub developer_website: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub ratings: Option<u64>,

    /// Number of written reviews; the gateway calls this `reviews`.
    #[serde(default, rename = "reviewCount", alias = "reviews")]
    pub review_count: Option<u64>,

    /// Star rating ("1".."5") to number of ratings.
    #[serde(default)]
    pub histogram: BTreeMap<String, u64>,
    #[serde(default)]
    pub installs: Option<String>,
    #[serde(default)]
    pub min_installs: Option<u64>,
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub free: bool,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub genre_id: Option<String>,
    #[serde(default)]
    pub content_rating: Option<String>,
    #[serde(default)]
    pub released: Option<String>,

    /// Last update as milliseconds since the Unix epoch.
    #[serde(default)]
    pub updated: Option<i64>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub ad_supported: Option<bool>,
    #[serde(default, rename = "offersIAP")]
    pub offers_iap: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub score: u8,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub thumbs_up: u64,
    #[serde(default)]
    pub reply_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub permission: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataSafety {
    #[serde(default)]
    pub shared_data: Vec<DataEntry>,
    #[serde(default)]
    pub collected_data: Vec<DataEntry>,
    #[serde(default)]
    pub security_practices: Vec<SecurityPractice>,
    #[serde(default)]
    pub privacy_policy_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataEntry {
    pub data: String,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub purpose: String,
    #[serde(default, rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityPractice {
    pub practice: String,
    #[serde(default)]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_detail_deserialize_gateway_shape() {
        let json = r#"{
            "appId": "com.example.chat",
            "title": "Chat",
            "developer": "Example Inc.",
            "developerId": "Example+Inc.",
            "score": 4.3,
            "reviews": 1200,
            "histogram": { "1": 10, "5": 900 },
            "price": 0,
            "free": true,
            "genre": "Communication",
            "offersIAP": true
        }"#;

        let detail: AppDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.title, "Chat");
        assert_eq!(detail.developer_id.as_deref(), Some("Example+Inc."));
        assert_eq!(detail.review_count, Some(1200));
        assert_eq!(detail.histogram.get("5"), Some(&900));
        assert_eq!(detail.offers_iap, Some(true));
        assert!(detail.free);
    }

    #[test]
    fn test_app_detail_optional_fields() {
        let detail: AppDetail = serde_json::from_str(r#"{ "title": "Bare" }"#).unwrap();
        assert_eq!(detail.developer, "");
        assert_eq!(detail.score, None);
        assert!(detail.histogram.is_empty());
        assert!(!detail.free);
    }

    #[test]
    fn test_app_detail_requires_title() {
        assert!(serde_json::from_str::<AppDetail>(r#"{ "developer": "x" }"#).is_err());
    }

    #[test]
    fn test_permission_type_field() {
        let permission: Permission = serde_json::from_str(r#"{ "permission": "camera", "type": "Camera" }"#).unwrap();
        assert_eq!(permission.kind, "Camera");
    }

    #[test]
    fn test_data_safety_defaults() {
        let safety: DataSafety = serde_json::from_str(r#"{ "privacyPolicyUrl": "https://example.com/p" }"#).unwrap();
        assert!(safety.shared_data.is_empty());
        assert_eq!(safety.privacy_policy_url.as_deref(), Some("https://example.com/p"));
    }
}
