//! URL construction helpers for the Uber API.
//!
//! Pure functions so every call builds URLs the same way. A base URL with a
//! path prefix (e.g. a gateway at `https://gw.example/uber`) keeps its prefix.

use lastmile_core::TripEstimateRequest;
use url::Url;

use crate::models::UberConfig;

/// Path of the guest trip estimate endpoint.
const TRIP_ESTIMATES_PATH: &str = "v1/guests/trips/estimates";

/// Path of the price estimate endpoint.
const PRICE_ESTIMATES_PATH: &str = "v1.2/estimates/price";

/// Append `path` to the base URL's path.
fn join_path(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    url.set_path(&format!("{base_path}/{path}"));
    url
}

/// Build the URL for `POST /v1/guests/trips/estimates`.
pub fn build_trip_estimates_url(config: &UberConfig) -> Url {
    join_path(&config.base_url, TRIP_ESTIMATES_PATH)
}

/// Build the URL for `GET /v1.2/estimates/price` with the trip as query parameters.
pub fn build_price_estimates_url(config: &UberConfig, request: &TripEstimateRequest) -> Url {
    let mut url = join_path(&config.base_url, PRICE_ESTIMATES_PATH);

    url.query_pairs_mut()
        .append_pair("start_latitude", &request.pickup.latitude.to_string())
        .append_pair("start_longitude", &request.pickup.longitude.to_string())
        .append_pair("end_latitude", &request.dropoff.latitude.to_string())
        .append_pair("end_longitude", &request.dropoff.longitude.to_string());

    url
}
