//! Route command handler.
//!
//! Plans a transit journey and shows each itinerary leg by leg. Walks
//! longer than the walking limit come back as ride legs with local fares.

use anyhow::Result;
use lastmile_core::{Coordinate, Leg, Place, TripPlan};
use serde_json::json;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::handlers::resolve_trip;
use crate::presentation::{format_distance_km, format_minutes, truncate_string};

/// Execute the route command.
pub async fn execute(
    ctx: &CliContext,
    from: Option<Coordinate>,
    to: Option<Coordinate>,
    ac_bus: bool,
    json: bool,
) -> Result<()> {
    let trip = resolve_trip(from, to)?;
    let plan = ctx
        .routes()
        .plan_route(&trip.pickup, &trip.dropoff, ac_bus)
        .await
        .map_err(CliError::from)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&json!({ "plan": plan }))?);
    } else {
        println!("{}", render_plan(&plan));
    }
    Ok(())
}

/// Render every itinerary, one line per leg.
pub fn render_plan(plan: &TripPlan) -> String {
    if plan.itineraries.is_empty() {
        return "No itineraries found.".to_string();
    }

    let mut lines = Vec::new();
    for (index, itinerary) in plan.itineraries.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        match itinerary.duration {
            Some(duration) => lines.push(format!(
                "Itinerary {} ({})",
                index + 1,
                format_minutes(duration)
            )),
            None => lines.push(format!("Itinerary {}", index + 1)),
        }
        lines.extend(itinerary.legs.iter().map(render_leg));
    }
    lines.join("\n")
}

fn place_label(place: Option<&Place>) -> String {
    place.map_or_else(
        || "?".to_string(),
        |place| match &place.name {
            Some(name) => truncate_string(name, 20),
            None => format!("{:.4},{:.4}", place.lat, place.lon),
        },
    )
}

fn render_leg(leg: &Leg) -> String {
    let mut line = format!(
        "  {:<6} {:>9} {:>7}  {} -> {}",
        leg.mode,
        format_distance_km(leg.distance),
        format_minutes(leg.duration),
        place_label(leg.from.as_ref()),
        place_label(leg.to.as_ref()),
    );

    if let Some(route) = &leg.route {
        line.push_str(&format!("  [{route}]"));
    }
    if let Some(fares) = &leg.fares {
        line.push_str(&format!(
            "  auto ₹{} car ₹{} moto ₹{}",
            fares.auto, fares.car, fares.moto
        ));
    }
    if let Some(bus) = &leg.bus_fare {
        line.push_str(&format!("  ₹{}", bus.selected));
    }
    if let Some(train) = &leg.train_fare {
        line.push_str(&format!(
            "  2nd ₹{} 1st ₹{}",
            train.second_class, train.first_class
        ));
    }
    if let Some(train_type) = &leg.train_type {
        line.push_str(&format!("  {train_type}"));
    }
    line
}
