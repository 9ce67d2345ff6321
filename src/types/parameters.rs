//! Query parameters for the wind and solar simulation endpoints.
//!
//! Every field has a default matching the API's documented example request, and
//! nothing is validated: whatever is set here ends up in the query string.

use crate::types::endpoint::Endpoint;
use bon::Builder;
use chrono::NaiveDate;
use std::fmt;

/// Inclusive range of calendar days to simulate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// January 1st to December 31st of `year`, or `None` if chrono cannot represent it.
    pub fn year(year: i32) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(year, 1, 1)?,
            end: NaiveDate::from_ymd_opt(year, 12, 31)?,
        })
    }
}

const DEFAULT_START: NaiveDate = match NaiveDate::from_ymd_opt(2019, 1, 1) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};

const DEFAULT_END: NaiveDate = match NaiveDate::from_ymd_opt(2019, 12, 31) {
    Some(date) => date,
    None => panic!("invalid default end date"),
};

impl Default for DateRange {
    /// The full year 2019.
    fn default() -> Self {
        Self::new(DEFAULT_START, DEFAULT_END)
    }
}

/// Tracking mode of a PV system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tracking {
    /// Fixed mounting.
    #[default]
    Fixed,
    /// Single-axis azimuth tracking.
    SingleAxis,
    /// Dual-axis tracking.
    DualAxis,
}

/// Renders the numeric code the API expects.
impl fmt::Display for Tracking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Tracking::Fixed => 0,
            Tracking::SingleAxis => 1,
            Tracking::DualAxis => 2,
        };
        write!(f, "{}", code)
    }
}

/// Parameters of a wind simulation.
///
/// # Examples
///
/// ```
/// use renewables_ninja::WindParameters;
///
/// let params = WindParameters::builder().height(83.0).capacity(240.0).build();
/// assert_eq!(params.dataset, "merra2");
/// assert_eq!(params.turbine, "Vestas+V80+2000");
/// ```
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct WindParameters {
    #[builder(default)]
    pub date_range: DateRange,
    #[builder(into, default = "merra2".to_string())]
    pub dataset: String,
    #[builder(default = 1.0)]
    pub capacity: f64,
    /// Hub height in metres.
    #[builder(default = 60.0)]
    pub height: f64,
    /// Turbine model, spaces written as `+`.
    #[builder(into, default = "Vestas+V80+2000".to_string())]
    pub turbine: String,
    #[builder(default)]
    pub raw: bool,
}

impl Default for WindParameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Parameters of a solar (PV) simulation.
#[derive(Debug, Clone, PartialEq, Builder)]
pub struct SolarParameters {
    #[builder(default)]
    pub date_range: DateRange,
    #[builder(into, default = "merra2".to_string())]
    pub dataset: String,
    #[builder(default = 1.0)]
    pub capacity: f64,
    /// Fraction of output lost to the system, 0.1 is 10%.
    #[builder(default = 0.1)]
    pub system_loss: f64,
    #[builder(default)]
    pub tracking: Tracking,
    #[builder(default = 35.0)]
    pub tilt: f64,
    #[builder(default = 180.0)]
    pub azimuth: f64,
    #[builder(default)]
    pub raw: bool,
}

impl Default for SolarParameters {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A complete request description for one of the two endpoints.
#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Wind(WindParameters),
    Solar(SolarParameters),
}

impl Query {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            Query::Wind(_) => Endpoint::Wind,
            Query::Solar(_) => Endpoint::Solar,
        }
    }

    pub fn date_range(&self) -> DateRange {
        match self {
            Query::Wind(params) => params.date_range,
            Query::Solar(params) => params.date_range,
        }
    }
}

impl From<WindParameters> for Query {
    fn from(params: WindParameters) -> Self {
        Query::Wind(params)
    }
}

impl From<SolarParameters> for Query {
    fn from(params: SolarParameters) -> Self {
        Query::Solar(params)
    }
}
