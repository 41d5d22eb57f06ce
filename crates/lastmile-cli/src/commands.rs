//! Main commands enum.
//!
//! This module defines the available commands for the CLI tool.

use clap::Subcommand;
use lastmile_core::Coordinate;

/// Available commands for last-mile estimates.
///
/// Every command takes optional trip endpoints as `LAT,LON`. Missing points
/// fall back to the built-in test trip.
#[derive(Subcommand)]
pub enum Commands {
    /// Request a trip estimate and print the raw response body
    Estimate {
        /// Pickup point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        pickup: Option<Coordinate>,
        /// Dropoff point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        dropoff: Option<Coordinate>,
        /// OAuth access token sent as a Bearer credential
        #[arg(long, env = "UBER_ACCESS_TOKEN", hide_env_values = true)]
        token: Option<String>,
    },

    /// Quote ride products for the trip, with canned estimates as fallback
    Quote {
        /// Pickup point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        pickup: Option<Coordinate>,
        /// Dropoff point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        dropoff: Option<Coordinate>,
        /// Server token for the price estimates endpoint
        #[arg(long, env = "UBER_SERVER_TOKEN", hide_env_values = true)]
        server_token: Option<String>,
        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Compare ride, bus and train fares from the straight-line distance
    Fare {
        /// Pickup point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        pickup: Option<Coordinate>,
        /// Dropoff point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        dropoff: Option<Coordinate>,
        /// Select the air-conditioned bus fare
        #[arg(long)]
        ac: bool,
        /// Print the fares as JSON
        #[arg(long)]
        json: bool,
    },

    /// Plan a transit journey, replacing long walks with rides
    Route {
        /// Start point as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        from: Option<Coordinate>,
        /// Destination as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        to: Option<Coordinate>,
        /// Router base URL of the OpenTripPlanner instance
        #[arg(
            long = "otp-url",
            env = "OTP_BASE_URL",
            default_value = lastmile_otp::DEFAULT_BASE_URL
        )]
        otp_url: String,
        /// Price bus legs at the air-conditioned fare
        #[arg(long)]
        ac: bool,
        /// Print the plan as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::Cli;
    use clap::Parser;

    #[test]
    fn test_estimate_with_coordinates_and_token() {
        let cli = Cli::parse_from([
            "lastmile",
            "estimate",
            "--pickup",
            "19.1677053,72.960964",
            "--dropoff",
            "19.1720999, 72.956671",
            "--token",
            "abc",
        ]);

        let Some(Commands::Estimate {
            pickup,
            dropoff,
            token,
        }) = cli.command
        else {
            panic!("expected estimate command");
        };
        assert_eq!(pickup, Some(Coordinate::new(19.1677053, 72.960964).unwrap()));
        assert_eq!(dropoff, Some(Coordinate::new(19.1720999, 72.956671).unwrap()));
        assert_eq!(token.as_deref(), Some("abc"));
    }

    #[test]
    fn test_negative_coordinates_parse() {
        let cli = Cli::parse_from([
            "lastmile",
            "fare",
            "--pickup",
            "-33.8688,151.2093",
            "--dropoff=-33.8568,151.2153",
        ]);

        let Some(Commands::Fare {
            pickup, dropoff, ..
        }) = cli.command
        else {
            panic!("expected fare command");
        };
        assert_eq!(pickup, Some(Coordinate::new(-33.8688, 151.2093).unwrap()));
        assert_eq!(dropoff, Some(Coordinate::new(-33.8568, 151.2153).unwrap()));
    }

    #[test]
    fn test_quote_json_flag() {
        let cli = Cli::parse_from(["lastmile", "quote", "--server-token", "srv", "--json"]);

        let Some(Commands::Quote {
            server_token, json, ..
        }) = cli.command
        else {
            panic!("expected quote command");
        };
        assert_eq!(server_token.as_deref(), Some("srv"));
        assert!(json);
    }

    #[test]
    fn test_fare_ac_flag() {
        let cli = Cli::parse_from(["lastmile", "fare", "--ac"]);
        assert!(matches!(cli.command, Some(Commands::Fare { ac: true, .. })));
    }

    #[test]
    fn test_route_arguments() {
        let cli = Cli::parse_from([
            "lastmile",
            "route",
            "--from",
            "19.1677053,72.960964",
            "--to=19.2183,72.9781",
            "--otp-url",
            "http://otp.local/otp/routers/mumbai",
            "--ac",
        ]);

        let Some(Commands::Route {
            from,
            to,
            otp_url,
            ac,
            json,
        }) = cli.command
        else {
            panic!("expected route command");
        };
        assert_eq!(from, Some(Coordinate::new(19.1677053, 72.960964).unwrap()));
        assert_eq!(to, Some(Coordinate::new(19.2183, 72.9781).unwrap()));
        assert_eq!(otp_url, "http://otp.local/otp/routers/mumbai");
        assert!(ac);
        assert!(!json);
    }

    #[test]
    fn test_out_of_range_coordinate_is_rejected() {
        let result = Cli::try_parse_from(["lastmile", "fare", "--pickup", "91.0,72.0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_coordinate_is_rejected() {
        let result = Cli::try_parse_from(["lastmile", "fare", "--dropoff", "thane"]);
        assert!(result.is_err());
    }
}
