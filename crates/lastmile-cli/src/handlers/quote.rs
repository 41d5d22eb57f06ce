//! Quote command handler.
//!
//! Displays per-product price estimates for the trip. The service falls
//! back to canned estimates when the provider is unavailable, so this
//! command only fails on bad input.

use anyhow::Result;
use lastmile_core::{Coordinate, LastMileQuote, QuoteStatus};

use crate::bootstrap::CliContext;
use crate::handlers::resolve_trip;
use crate::presentation::{format_minutes, separator, truncate_string};

/// Execute the quote command.
pub async fn execute(
    ctx: &CliContext,
    pickup: Option<Coordinate>,
    dropoff: Option<Coordinate>,
    json: bool,
) -> Result<()> {
    let request = resolve_trip(pickup, dropoff)?;
    let quote = ctx.service().quote(&request).await;

    if json {
        println!("{}", serde_json::to_string_pretty(&quote)?);
    } else {
        println!("{}", render_quote(&quote));
    }
    Ok(())
}

/// Render a quote as a product table.
pub fn render_quote(quote: &LastMileQuote) -> String {
    let mut lines = vec![
        format!("Pickup:  {}", quote.pickup),
        format!("Dropoff: {}", quote.dropoff),
    ];
    if quote.status == QuoteStatus::Mock {
        lines.push("Provider unavailable, showing sample estimates.".to_string());
    }
    lines.push(String::new());

    if quote.uber_estimates.is_empty() {
        lines.push("No ride products available for this trip.".to_string());
        return lines.join("\n");
    }

    lines.push(format!(
        "{:<20} {:<14} {:<10} Distance",
        "Product", "Estimate", "Duration"
    ));
    lines.push(separator(54));

    for estimate in &quote.uber_estimates {
        lines.push(format!(
            "{:<20} {:<14} {:<10} {}",
            truncate_string(&estimate.localized_display_name, 19),
            truncate_string(&estimate.estimate, 13),
            format_minutes(f64::from(estimate.duration)),
            estimate.distance
        ));
    }

    lines.join("\n")
}
