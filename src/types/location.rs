//! Coordinates and labelled locations, plus loading location lists from CSV.

use crate::error::NinjaError;
use log::info;
use serde::Deserialize;
use std::path::Path;

/// Represents a geographical coordinate using latitude and longitude.
///
/// Latitude is the first element (index 0), and longitude is the second (index 1).
/// Values are passed to the API as-is, no range check is performed.
///
/// # Examples
///
/// ```
/// use renewables_ninja::LatLon;
///
/// let ararat = LatLon(-37.23, 143.05);
/// assert_eq!(ararat.0, -37.23); // Latitude
/// assert_eq!(ararat.1, 143.05); // Longitude
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon(pub f64, pub f64);

impl LatLon {
    pub fn lat(self) -> f64 {
        self.0
    }

    pub fn lon(self) -> f64 {
        self.1
    }
}

/// A coordinate together with the label used to name its output file.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub coordinate: LatLon,
    pub label: String,
}

#[derive(Debug, Deserialize)]
struct LocationRow {
    lat: f64,
    lon: f64,
    #[serde(alias = "label")]
    name: String,
}

impl Location {
    pub fn new(coordinate: LatLon, label: impl Into<String>) -> Self {
        Self {
            coordinate,
            label: label.into(),
        }
    }

    /// Reads locations from a CSV file with a `lat,lon,name` header, in file order.
    ///
    /// A `label` column is accepted in place of `name`.
    ///
    /// # Errors
    ///
    /// Returns [`NinjaError::LocationsRead`] if the file cannot be opened and
    /// [`NinjaError::LocationsParse`] if any row does not match the expected columns.
    pub fn read_csv(path: &Path) -> Result<Vec<Location>, NinjaError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(path)
            .map_err(|e| NinjaError::LocationsRead(path.to_path_buf(), e))?;

        let locations = reader
            .deserialize::<LocationRow>()
            .map(|row| {
                row.map(|r| Location::new(LatLon(r.lat, r.lon), r.name))
                    .map_err(|e| NinjaError::LocationsParse(path.to_path_buf(), e))
            })
            .collect::<Result<Vec<_>, _>>()?;

        info!("Loaded {} locations from {:?}", locations.len(), path);
        Ok(locations)
    }
}
