use crate::batch::pacing::{FixedPacing, PacingPolicy, Sleeper, TokioSleeper};
use crate::error::NinjaError;
use crate::ninja::NinjaClient;
use crate::types::location::Location;
use crate::types::parameters::Query;
use log::info;
use std::path::{Path, PathBuf};

/// Downloads one simulation per location, strictly in input order.
///
/// Obtained from [`NinjaClient::batch()`]. Progress is not checkpointed: if the run
/// fails or the process is killed, the caller decides where to resume (the error
/// names the failing index).
pub struct BatchDownloader<'a, P, S> {
    client: &'a NinjaClient,
    pacing: P,
    sleeper: S,
}

/// Files written by a completed batch, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub files: Vec<PathBuf>,
}

impl<'a> BatchDownloader<'a, FixedPacing, TokioSleeper> {
    pub(crate) fn new(client: &'a NinjaClient) -> Self {
        Self {
            client,
            pacing: FixedPacing::default(),
            sleeper: TokioSleeper,
        }
    }
}

impl<'a, P: PacingPolicy, S: Sleeper> BatchDownloader<'a, P, S> {
    /// Replaces the pacing policy.
    pub fn with_pacing<Q: PacingPolicy>(self, pacing: Q) -> BatchDownloader<'a, Q, S> {
        BatchDownloader {
            client: self.client,
            pacing,
            sleeper: self.sleeper,
        }
    }

    /// Replaces the sleeper, e.g. with a fake clock.
    pub fn with_sleeper<T: Sleeper>(self, sleeper: T) -> BatchDownloader<'a, P, T> {
        BatchDownloader {
            client: self.client,
            pacing: self.pacing,
            sleeper,
        }
    }

    /// Fetches and persists every location with the same `query`.
    ///
    /// After each download, including the last, the pacing policy's pauses are slept
    /// through, so back-to-back batches stay within the rate limit.
    ///
    /// # Errors
    ///
    /// Stops at the first failure and returns [`NinjaError::BatchItem`] wrapping it;
    /// no further requests are made.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use renewables_ninja::{LatLon, Location, NinjaClient, NinjaError, Query, WindParameters};
    /// use std::path::Path;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), NinjaError> {
    /// let client = NinjaClient::from_env()?;
    /// let locations = vec![
    ///     Location::new(LatLon(-37.23, 143.05), "location1"),
    ///     Location::new(LatLon(-37.50, 143.80), "location2"),
    /// ];
    ///
    /// let summary = client
    ///     .batch()
    ///     .run(&locations, &Query::Wind(WindParameters::default()), Path::new("ninja_wind"))
    ///     .await?;
    /// println!("Wrote {} files", summary.files.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run(
        &self,
        locations: &[Location],
        query: &Query,
        output_dir: &Path,
    ) -> Result<BatchSummary, NinjaError> {
        let endpoint = query.endpoint();
        let mut summary = BatchSummary::default();

        for (index, location) in locations.iter().enumerate() {
            self.client
                .fetch_and_persist(location.coordinate, query, output_dir, &location.label)
                .await
                .map_err(|e| NinjaError::BatchItem {
                    index,
                    label: location.label.clone(),
                    source: Box::new(e),
                })?;
            summary
                .files
                .push(output_dir.join(endpoint.file_name(&location.label)));

            let completed = index + 1;
            info!(
                "Batch progress: {}/{} {} downloads",
                completed,
                locations.len(),
                endpoint
            );
            for pause in self.pacing.pauses_after(completed) {
                info!("Pausing for {:?}", pause);
                self.sleeper.sleep(pause).await;
            }
        }

        Ok(summary)
    }
}
