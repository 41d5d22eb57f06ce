//! Route planner service - transit plans with the last mile filled in.

use std::sync::Arc;

use crate::domain::{Coordinate, MODE_UBER, TripPlan, apply_last_mile};
use crate::ports::{TransitPlanPort, TransitPortResult};

/// Service that plans journeys and replaces long walks with rides.
pub struct RoutePlannerService {
    transit: Arc<dyn TransitPlanPort>,
}

impl RoutePlannerService {
    /// Create a new service over a transit planner port.
    pub fn new(transit: Arc<dyn TransitPlanPort>) -> Self {
        Self { transit }
    }

    /// Plan a journey and apply the last-mile rewrite.
    ///
    /// `ac_bus` selects the AC fare on bus legs.
    pub async fn plan_route(
        &self,
        from: &Coordinate,
        to: &Coordinate,
        ac_bus: bool,
    ) -> TransitPortResult<TripPlan> {
        tracing::debug!(%from, %to, "Planning route");

        let plan = apply_last_mile(self.transit.plan_trip(from, to).await?, ac_bus);

        let rides = plan
            .itineraries
            .iter()
            .flat_map(|itinerary| &itinerary.legs)
            .filter(|leg| leg.mode == MODE_UBER)
            .count();
        tracing::debug!(
            itineraries = plan.itineraries.len(),
            rides,
            "Route planned"
        );

        Ok(plan)
    }
}
