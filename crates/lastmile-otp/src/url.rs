//! URL construction for the planner API.

use lastmile_core::Coordinate;
use url::Url;

use crate::models::OtpConfig;

/// Modes requested from the planner; rides are substituted afterwards.
const PLAN_MODES: &str = "TRANSIT,WALK";

/// `lat,lon` as the planner expects a place.
fn place_param(point: &Coordinate) -> String {
    format!("{},{}", point.latitude, point.longitude)
}

/// Build the URL for `GET {base}/plan`.
pub fn build_plan_url(config: &OtpConfig, from: &Coordinate, to: &Coordinate) -> Url {
    let mut url = config.base_url.clone();
    let base_path = url.path().trim_end_matches('/').to_string();
    url.set_path(&format!("{base_path}/plan"));

    url.query_pairs_mut()
        .append_pair("fromPlace", &place_param(from))
        .append_pair("toPlace", &place_param(to))
        .append_pair("mode", PLAN_MODES);

    url
}
