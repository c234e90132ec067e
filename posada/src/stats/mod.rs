//! Pure aggregation over in-memory domain collections.
//!
//! The two calculators here are total, deterministic functions with no
//! I/O: [`compute_occupancy`] summarizes the fill state of a room type's
//! units, and [`compute_metrics`] summarizes a set of reservations. Both
//! operate on already-materialized slices; callers are responsible for
//! fetching a consistent snapshot.

mod metrics;
mod occupancy;

#[cfg(test)]
mod proptests;

pub use metrics::{compute_metrics, ReservationMetrics};
pub use occupancy::{compute_occupancy, OccupancyStats};
