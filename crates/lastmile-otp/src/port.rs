//! `TransitPlanPort` implementation for `OtpClient`.

use async_trait::async_trait;
use lastmile_core::{Coordinate, TransitPlanPort, TransitPortError, TransitPortResult, TripPlan};

use crate::client::OtpClient;
use crate::error::OtpError;
use crate::http::HttpBackend;

/// Convert internal `OtpError` to core `TransitPortError`.
fn map_error(err: OtpError) -> TransitPortError {
    match err {
        OtpError::ApiRequestFailed { status, .. } => TransitPortError::Api { status },
        OtpError::Planner { message } => TransitPortError::NoRoute { message },
        OtpError::InvalidResponse { message } => TransitPortError::InvalidResponse { message },
        OtpError::Network(e) if e.is_decode() => TransitPortError::InvalidResponse {
            message: e.to_string(),
        },
        OtpError::Network(e) if e.is_builder() => TransitPortError::Configuration {
            message: e.to_string(),
        },
        OtpError::Network(e) => TransitPortError::Network {
            message: e.to_string(),
        },
        OtpError::InvalidUrl(e) => TransitPortError::Configuration {
            message: e.to_string(),
        },
        OtpError::JsonParse(e) => TransitPortError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

#[async_trait]
impl<B: HttpBackend + Send + Sync> TransitPlanPort for OtpClient<B> {
    async fn plan_trip(&self, from: &Coordinate, to: &Coordinate) -> TransitPortResult<TripPlan> {
        self.fetch_plan(from, to).await.map_err(map_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OtpClientConfig;
    use crate::http::testing::FakeBackend;
    use crate::models::OtpConfig;
    use serde_json::json;

    fn client(backend: FakeBackend) -> OtpClient<FakeBackend> {
        OtpClient::with_backend(
            OtpConfig::from_public(&OtpClientConfig::new()).unwrap(),
            backend,
        )
    }

    #[test]
    fn test_map_error_variants() {
        assert!(matches!(
            map_error(OtpError::ApiRequestFailed {
                status: 503,
                url: "http://otp.local/plan".to_string()
            }),
            TransitPortError::Api { status: 503 }
        ));
        assert!(matches!(
            map_error(OtpError::Planner {
                message: "No trip found.".to_string()
            }),
            TransitPortError::NoRoute { .. }
        ));
        let unbuildable = reqwest::Client::new()
            .get("http://otp.local/plan")
            .header("X-Trace", "bad\nvalue")
            .build()
            .unwrap_err();
        assert!(matches!(
            map_error(OtpError::Network(unbuildable)),
            TransitPortError::Configuration { .. }
        ));
        let parse = url::Url::parse("::").unwrap_err();
        assert!(matches!(
            map_error(OtpError::InvalidUrl(parse)),
            TransitPortError::Configuration { .. }
        ));
    }

    #[tokio::test]
    async fn test_plan_trip_no_route() {
        let backend = FakeBackend::ok(&json!({"error": {"msg": "No trip found."}}));
        let point = Coordinate::new(19.0, 72.9).unwrap();

        let result = client(backend).plan_trip(&point, &point).await;
        assert!(matches!(result, Err(TransitPortError::NoRoute { .. })));
    }

    #[tokio::test]
    async fn test_plan_trip_server_error() {
        let point = Coordinate::new(19.0, 72.9).unwrap();
        let result = client(FakeBackend::with_status(500, ""))
            .plan_trip(&point, &point)
            .await;
        assert!(matches!(result, Err(TransitPortError::Api { status: 500 })));
    }
}
