//! Builds query URLs for the Renewables.ninja data endpoints.
//!
//! Values are inserted verbatim, only whitespace is removed. Anything that would need
//! percent-encoding must be supplied pre-encoded (turbine names use `+` for spaces).

use crate::types::endpoint::Endpoint;
use crate::types::location::LatLon;
use crate::types::parameters::{DateRange, Query, SolarParameters, WindParameters};

pub const DEFAULT_BASE_URL: &str = "https://www.renewables.ninja/api";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Wind simulation URL.
///
/// # Examples
///
/// ```
/// use renewables_ninja::{wind_url, LatLon, WindParameters, DEFAULT_BASE_URL};
///
/// let url = wind_url(DEFAULT_BASE_URL, LatLon(-37.23, 143.05), &WindParameters::default());
/// assert_eq!(
///     url,
///     "https://www.renewables.ninja/api/data/wind?&lat=-37.23&lon=143.05\
///      &date_from=2019-01-01&date_to=2019-12-31&capacity=1&dataset=merra2\
///      &height=60&turbine=Vestas+V80+2000&raw=false&format=csv"
/// );
/// ```
pub fn wind_url(base_url: &str, coordinate: LatLon, params: &WindParameters) -> String {
    let url = format!(
        "{}/data/{}?&lat={}&lon={}&{}&capacity={}&dataset={}&height={}&turbine={}&raw={}&format=csv",
        base_url.trim().trim_end_matches('/'),
        Endpoint::Wind.path_segment(),
        coordinate.lat(),
        coordinate.lon(),
        date_query(&params.date_range),
        params.capacity,
        params.dataset,
        params.height,
        params.turbine,
        params.raw,
    );
    strip_whitespace(&url)
}

/// Solar (PV) simulation URL.
pub fn solar_url(base_url: &str, coordinate: LatLon, params: &SolarParameters) -> String {
    let url = format!(
        "{}/data/{}?&lat={}&lon={}&{}&capacity={}&dataset={}&system_loss={}&tracking={}&raw={}&tilt={}&azim={}&format=csv",
        base_url.trim().trim_end_matches('/'),
        Endpoint::Solar.path_segment(),
        coordinate.lat(),
        coordinate.lon(),
        date_query(&params.date_range),
        params.capacity,
        params.dataset,
        params.system_loss,
        params.tracking,
        params.raw,
        params.tilt,
        params.azimuth,
    );
    strip_whitespace(&url)
}

/// Dispatches to [`wind_url`] or [`solar_url`].
pub fn query_url(base_url: &str, coordinate: LatLon, query: &Query) -> String {
    match query {
        Query::Wind(params) => wind_url(base_url, coordinate, params),
        Query::Solar(params) => solar_url(base_url, coordinate, params),
    }
}

fn date_query(range: &DateRange) -> String {
    format!(
        "date_from={}&date_to={}",
        range.start.format(DATE_FORMAT),
        range.end.format(DATE_FORMAT)
    )
}

fn strip_whitespace(url: &str) -> String {
    url.chars().filter(|c| !c.is_whitespace()).collect()
}
