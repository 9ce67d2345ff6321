//! Provides the `SolarClient` for requesting solar (PV) power simulations.
//!
//! This client acts as an intermediate builder, obtained via [`NinjaClient::solar()`],
//! collecting the location, output file and optional simulation settings before
//! executing a single download.

use crate::{DateRange, LatLon, NinjaClient, NinjaError, Query, ResultTable, SolarParameters};
use bon::bon;
use std::path::Path;

/// A client builder specifically for solar simulations.
///
/// Instances are created by calling [`NinjaClient::solar()`]. Calling
/// `.location(..)...call()` performs the request and returns a
/// [`Result<ResultTable, NinjaError>`].
pub struct SolarClient<'a> {
    /// A reference to the main client instance.
    client: &'a NinjaClient,
}

#[bon]
impl<'a> SolarClient<'a> {
    pub(crate) fn new(client: &'a NinjaClient) -> Self {
        Self { client }
    }

    /// Downloads the solar simulation for a coordinate and saves it as
    /// `<output_dir>/ninja_solar_<label>.csv`.
    ///
    /// Builder arguments:
    /// *   `.label(impl Into<String>)`: **Required.** Names the output file.
    /// *   `.output_dir(&Path)`: **Required.** Existing directory to write into.
    /// *   `.date_range(DateRange)`: Optional. Overrides the date range of `parameters`.
    /// *   `.parameters(SolarParameters)`: Optional. Tilt, azimuth, tracking, system loss, capacity and dataset, defaulting to [`SolarParameters::default()`].
    ///
    /// # Errors
    ///
    /// Any error of [`NinjaClient::fetch_and_persist`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use renewables_ninja::{DateRange, LatLon, NinjaClient, NinjaError, SolarParameters, Tracking};
    /// use std::path::Path;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), NinjaError> {
    /// let client = NinjaClient::from_env()?;
    ///
    /// let tracked = SolarParameters::builder()
    ///     .tracking(Tracking::SingleAxis)
    ///     .tilt(20.0)
    ///     .build();
    /// let table = client
    ///     .solar()
    ///     .location(LatLon(45.0, 22.0))
    ///     .label("timisoara")
    ///     .output_dir(Path::new("ninja_solar"))
    ///     .maybe_date_range(DateRange::year(2020))
    ///     .parameters(tracked)
    ///     .call()
    ///     .await?;
    ///
    /// println!("{} hourly rows", table.height());
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = location)]
    #[doc(hidden)]
    pub async fn build_location(
        &self,
        #[builder(start_fn)] coordinate: LatLon,
        #[builder(into)] label: String,
        output_dir: &Path,
        date_range: Option<DateRange>,
        parameters: Option<SolarParameters>,
    ) -> Result<ResultTable, NinjaError> {
        let mut parameters = parameters.unwrap_or_default();
        if let Some(date_range) = date_range {
            parameters.date_range = date_range;
        }
        self.client
            .fetch_and_persist(coordinate, &Query::Solar(parameters), output_dir, &label)
            .await
    }
}
