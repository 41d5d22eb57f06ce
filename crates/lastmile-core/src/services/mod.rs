//! Application services composed over ports.

mod last_mile;
mod route_planner;

pub use last_mile::LastMileService;
pub use route_planner::RoutePlannerService;
