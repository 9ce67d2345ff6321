//! Provides the `WindClient` for requesting wind power simulations.
//!
//! This client acts as an intermediate builder, obtained via [`NinjaClient::wind()`],
//! collecting the location, output file and optional simulation settings before
//! executing a single download.

use crate::{DateRange, LatLon, NinjaClient, NinjaError, Query, ResultTable, WindParameters};
use bon::bon;
use std::path::Path;

/// A client builder specifically for wind simulations.
///
/// Instances are created by calling [`NinjaClient::wind()`]. Calling
/// `.location(..)...call()` performs the request and returns a
/// [`Result<ResultTable, NinjaError>`].
pub struct WindClient<'a> {
    /// A reference to the main client instance.
    client: &'a NinjaClient,
}

#[bon]
impl<'a> WindClient<'a> {
    pub(crate) fn new(client: &'a NinjaClient) -> Self {
        Self { client }
    }

    /// Downloads the wind simulation for a coordinate and saves it as
    /// `<output_dir>/ninja_wind_<label>.csv`.
    ///
    /// Builder arguments:
    /// *   `.label(impl Into<String>)`: **Required.** Names the output file.
    /// *   `.output_dir(&Path)`: **Required.** Existing directory to write into.
    /// *   `.date_range(DateRange)`: Optional. Overrides the date range of `parameters`.
    /// *   `.parameters(WindParameters)`: Optional. Turbine, height, capacity and dataset, defaulting to [`WindParameters::default()`].
    ///
    /// # Errors
    ///
    /// Any error of [`NinjaClient::fetch_and_persist`].
    ///
    /// # Example
    ///
    /// ```no_run
    /// use renewables_ninja::{LatLon, NinjaClient, NinjaError, WindParameters};
    /// use std::path::Path;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), NinjaError> {
    /// let client = NinjaClient::from_env()?;
    ///
    /// let table = client
    ///     .wind()
    ///     .location(LatLon(-37.23, 143.05))
    ///     .label("ararat")
    ///     .output_dir(Path::new("ninja_wind"))
    ///     .parameters(WindParameters::builder().height(83.0).build())
    ///     .call()
    ///     .await?;
    ///
    /// println!("{}", table.frame.head(Some(5)));
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
        parameters: Option<WindParameters>,
    ) -> Result<ResultTable, NinjaError> {
        let mut parameters = parameters.unwrap_or_default();
        if let Some(date_range) = date_range {
            parameters.date_range = date_range;
        }
        self.client
            .fetch_and_persist(coordinate, &Query::Wind(parameters), output_dir, &label)
            .await
    }
}
