//! Estimate command handler.
//!
//! Sends one trip estimate request and prints the response body as-is.

use anyhow::Result;
use lastmile_core::Coordinate;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::resolve_trip;

/// Execute the estimate command.
///
/// The body is printed whatever the HTTP status. Only a transport or
/// configuration failure is an error.
pub async fn execute(
    ctx: &CliContext,
    pickup: Option<Coordinate>,
    dropoff: Option<Coordinate>,
) -> Result<()> {
    let body = fetch_body(ctx, pickup, dropoff).await?;
    println!("{body}");
    Ok(())
}

/// Send the request and return the response body untouched.
pub(crate) async fn fetch_body(
    ctx: &CliContext,
    pickup: Option<Coordinate>,
    dropoff: Option<Coordinate>,
) -> Result<String> {
    let request = resolve_trip(pickup, dropoff)?;
    let response = ctx
        .service()
        .trip_estimate(&request)
        .await
        .map_err(CliError::from)?;

    Ok(response.body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bootstrap::testing::{StubRides, ctx_with_rides};
    use lastmile_core::{RawResponse, RidePortError};

    fn replying(status: u16, body: &str) -> CliContext {
        ctx_with_rides(StubRides {
            trip: Ok(RawResponse {
                status,
                body: body.to_string(),
            }),
            ..StubRides::new()
        })
    }

    #[tokio::test]
    async fn test_body_is_passed_through_unchanged() {
        // Whitespace, key order and non-ASCII must survive
        let body = "{\"fare\": {\"display\": \"₹120\"},\n  \"a\":1 }";
        let ctx = replying(200, body);

        assert_eq!(fetch_body(&ctx, None, None).await.unwrap(), body);
    }

    #[tokio::test]
    async fn test_error_status_body_is_returned() {
        let body = r#"{"message":"No authentication provided.","code":"unauthorized"}"#;
        let ctx = replying(401, body);

        assert_eq!(fetch_body(&ctx, None, None).await.unwrap(), body);
        assert!(execute(&ctx, None, None).await.is_ok());
    }

    #[tokio::test]
    async fn test_non_json_body_is_returned() {
        let ctx = replying(502, "<html>Bad Gateway</html>");
        assert_eq!(
            fetch_body(&ctx, None, None).await.unwrap(),
            "<html>Bad Gateway</html>"
        );
    }

    #[tokio::test]
    async fn test_network_failure_exits_unavailable() {
        let ctx = ctx_with_rides(StubRides {
            trip: Err(RidePortError::Network {
                message: "connection refused".to_string(),
            }),
            ..StubRides::new()
        });

        let err = execute(&ctx, None, None).await.unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 69);
    }

    #[tokio::test]
    async fn test_missing_token_exits_config() {
        let ctx = ctx_with_rides(StubRides {
            trip: Err(RidePortError::Configuration {
                message: "No access token configured".to_string(),
            }),
            ..StubRides::new()
        });

        let err = execute(&ctx, None, None).await.unwrap_err();
        assert_eq!(err.downcast_ref::<CliError>().unwrap().exit_code(), 78);
    }
}
