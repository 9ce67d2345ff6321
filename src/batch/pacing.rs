//! Pacing rules for sequential batch downloads.
//!
//! A [`PacingPolicy`] decides which pauses follow a completed request; a [`Sleeper`]
//! carries them out. Splitting the two lets tests swap in a recording clock.

use std::future::Future;
use std::time::Duration;

/// Decides the pauses to observe after a request.
pub trait PacingPolicy {
    /// Pauses to take, in order, once `completed` requests (1-based) have finished.
    fn pauses_after(&self, completed: usize) -> Vec<Duration>;
}

/// Fixed pause after every request plus a long pause after every `batch_size` requests.
///
/// The default is 10 seconds per request and one hour after every 50 requests.
///
/// # Examples
///
/// ```
/// use renewables_ninja::{FixedPacing, PacingPolicy};
/// use std::time::Duration;
///
/// let pacing = FixedPacing::default();
/// assert_eq!(pacing.pauses_after(1), vec![Duration::from_secs(10)]);
/// assert_eq!(
///     pacing.pauses_after(50),
///     vec![Duration::from_secs(10), Duration::from_secs(3600)]
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPacing {
    pub per_request: Duration,
    pub batch_size: usize,
    pub batch_pause: Duration,
}

impl FixedPacing {
    pub fn new(per_request: Duration, batch_size: usize, batch_pause: Duration) -> Self {
        Self {
            per_request,
            batch_size,
            batch_pause,
        }
    }
}

impl Default for FixedPacing {
    fn default() -> Self {
        Self::new(Duration::from_secs(10), 50, Duration::from_secs(3600))
    }
}

impl PacingPolicy for FixedPacing {
    fn pauses_after(&self, completed: usize) -> Vec<Duration> {
        let mut pauses = vec![self.per_request];
        // batch_size 0 disables the long pause
        if self.batch_size > 0 && completed > 0 && completed % self.batch_size == 0 {
            pauses.push(self.batch_pause);
        }
        pauses
    }
}

/// Never pauses.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPacing;

impl PacingPolicy for NoPacing {
    fn pauses_after(&self, _completed: usize) -> Vec<Duration> {
        Vec::new()
    }
}

/// Waits for a duration.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
