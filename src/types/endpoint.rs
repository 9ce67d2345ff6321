//! Defines the simulation endpoints offered by the Renewables.ninja API.

use std::fmt;

/// The kind of power simulation requested from the API.
///
/// Decides the URL path segment and the prefix of the persisted CSV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    /// Wind turbine power output.
    Wind,
    /// Photovoltaic power output.
    Solar,
}

impl Endpoint {
    pub(crate) fn path_segment(&self) -> &'static str {
        match self {
            Endpoint::Wind => "wind",
            Endpoint::Solar => "pv",
        }
    }

    pub(crate) fn file_prefix(&self) -> &'static str {
        match self {
            Endpoint::Wind => "ninja_wind_",
            Endpoint::Solar => "ninja_solar_",
        }
    }

    /// Output file name for a label, e.g. `ninja_wind_site1.csv`.
    pub fn file_name(&self, label: &str) -> String {
        format!("{}{}.csv", self.file_prefix(), label)
    }
}

/// Formats an `Endpoint` by its short name.
///
/// # Examples
///
/// ```
/// use renewables_ninja::Endpoint;
///
/// assert_eq!(Endpoint::Wind.to_string(), "wind");
/// assert_eq!(format!("{}", Endpoint::Solar), "solar");
/// ```
impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Wind => write!(f, "wind"),
            Endpoint::Solar => write!(f, "solar"),
        }
    }
}
