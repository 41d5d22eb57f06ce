//! Fare command handler.

use anyhow::Result;
use lastmile_core::{Coordinate, FareComparison};

use crate::bootstrap::CliContext;
use crate::handlers::resolve_trip;
use crate::presentation::{format_distance_km, format_minutes, separator};

/// Execute the fare command. Makes no network calls.
///
/// `ac_bus` picks which bus fare is marked as selected.
pub fn execute(
    ctx: &CliContext,
    pickup: Option<Coordinate>,
    dropoff: Option<Coordinate>,
    ac_bus: bool,
    json: bool,
) -> Result<()> {
    let request = resolve_trip(pickup, dropoff)?;
    let fares = ctx.service().local_fare(&request, ac_bus);

    if json {
        println!("{}", serde_json::to_string_pretty(&fares)?);
    } else {
        println!("{}", render_fares(&fares));
    }
    Ok(())
}

/// Render ride, bus and train fares as one table.
pub fn render_fares(fares: &FareComparison) -> String {
    let ride = &fares.ride;
    let bus = &fares.bus;
    // AC fares sit above non-AC fares in every band
    let ac_selected = bus.selected == bus.ac;
    let selected = |yes: bool| if yes { " (selected)" } else { "" };

    let rows = [
        ("Auto", ride.auto, ""),
        ("Car", ride.car, ""),
        ("Moto", ride.moto, ""),
        ("Bus", bus.non_ac, selected(!ac_selected)),
        ("AC bus", bus.ac, selected(ac_selected)),
        ("Train 2nd", fares.train.second_class, ""),
        ("Train 1st", fares.train.first_class, ""),
    ];

    let mut lines = vec![
        format!(
            "Distance: {} (about {})",
            format_distance_km(ride.distance),
            format_minutes(ride.duration)
        ),
        String::new(),
        format!("{:<10} Fare", "Mode"),
        separator(24),
    ];
    lines.extend(
        rows.iter()
            .map(|(mode, fare, note)| format!("{mode:<10} ₹{fare}{note}")),
    );
    lines.join("\n")
}
