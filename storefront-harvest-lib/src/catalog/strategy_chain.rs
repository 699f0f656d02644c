use futures::future::{BoxFuture, FutureExt};

const LOG_TARGET: &str = "  strategy";

type Strategy<'a, T> = Box<dyn FnOnce() -> BoxFuture<'a, Option<T>> + Send + 'a>;

/// An ordered list of ways to obtain a value.
///
/// Strategies run left to right and the first one to produce `Some` wins; later strategies
/// are never started. Each strategy carries a label that is returned with the value.
pub struct StrategyChain<'a, L, T> {
    strategies: Vec<(L, Strategy<'a, T>)>,
}

impl<L, T> core::fmt::Debug for StrategyChain<'_, L, T>
where
    L: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.strategies.iter().map(|(label, _)| label)).finish()
    }
}

impl<'a, L, T> StrategyChain<'a, L, T>
where
    L: Copy + core::fmt::Display,
{
    #[must_use]
    pub const fn new() -> Self {
        Self { strategies: Vec::new() }
    }

    /// Append a strategy to the end of the chain.
    #[must_use]
    pub fn then<F, Fut>(mut self, label: L, strategy: F) -> Self
    where
        F: FnOnce() -> Fut + Send + 'a,
        Fut: Future<Output = Option<T>> + Send + 'a,
    {
        self.strategies.push((label, Box::new(move || strategy().boxed())));
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Run the strategies in order until one succeeds.
    pub async fn run(self) -> Option<(L, T)> {
        for (label, strategy) in self.strategies {
            log::debug!(target: LOG_TARGET, "Trying {label}");
            if let Some(value) = strategy().await {
                return Some((label, value));
            }
        }
        None
    }
}

impl<L, T> Default for StrategyChain<'_, L, T>
where
    L: Copy + core::fmt::Display,
{
    fn default() -> Self {
        Self::new()
    }
}
