//! Traversal limits: timeout and cooperative cancellation.

use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Limits applied to a single traversal. The default has none.
#[derive(Clone, Debug, Default)]
pub struct TraversalConfig {
    pub(crate) timeout: Option<Duration>,
    pub(crate) cancellation: Option<CancellationToken>,
}

impl TraversalConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn cancellation(&self) -> Option<&CancellationToken> {
        self.cancellation.as_ref()
    }
}

/// Builder for [`TraversalConfig`].
///
/// # Example
///
/// ```rust
/// use statechart::collect::{CancellationToken, Traversal, TraversalBuilder};
/// use std::time::Duration;
///
/// let token = CancellationToken::new();
/// let config = TraversalBuilder::new()
///     .timeout(Duration::from_secs(5))
///     .cancellation(token.clone())
///     .build();
/// let traversal = Traversal::new(config);
/// assert_eq!(traversal.config().timeout(), Some(Duration::from_secs(5)));
/// ```
#[derive(Debug, Default)]
pub struct TraversalBuilder {
    timeout: Option<Duration>,
    cancellation: Option<CancellationToken>,
}

impl TraversalBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the traversal once it has run longer than `duration`.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Fail the traversal once `token` is cancelled.
    pub fn cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn build(self) -> TraversalConfig {
        TraversalConfig {
            timeout: self.timeout,
            cancellation: self.cancellation,
        }
    }
}
