//! Aggregate metrics over a set of reservations.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::reservation::Reservation;

/// A computed summary of a reservation set.
///
/// The status buckets cover only the codes this library names; records
/// carrying an unknown status code count toward the totals but appear in
/// none of the three buckets, so the buckets may sum to less than
/// `total_count`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReservationMetrics {
    /// Number of reservations.
    pub total_count: u32,
    /// Sum of booking totals.
    pub total_revenue: f64,
    /// Reservations with confirmed status.
    pub confirmed_count: u32,
    /// Reservations with pending status.
    pub pending_count: u32,
    /// Reservations with cancelled status.
    pub cancelled_count: u32,
    /// Group bookings.
    pub group_count: u32,
    /// `total_count - group_count`.
    pub individual_count: u32,
    /// Sum of per-booking headcounts.
    pub total_headcount: u32,
    /// Bookings with nothing left to pay.
    pub liquidated_count: u32,
    /// Bookings on a payment plan that has not been settled.
    pub outstanding_count: u32,
    /// Distinct customer email addresses, compared case-sensitively.
    pub unique_customers: u32,
}

/// Computes aggregate metrics over a reservation slice.
///
/// # Examples
///
/// ```
/// use posada::stats::compute_metrics;
/// use posada::{Reservation, ReservationStatus};
///
/// let reservations = vec![
///     Reservation::builder("Ana", "ana@example.com", 1)
///         .status(ReservationStatus::Confirmed)
///         .total(100.0)
///         .build()
///         .unwrap(),
///     Reservation::builder("Ben", "ben@example.com", 1)
///         .status(ReservationStatus::Pending)
///         .total(200.0)
///         .group(4)
///         .build()
///         .unwrap(),
/// ];
///
/// let metrics = compute_metrics(&reservations);
/// assert_eq!(metrics.total_revenue, 300.0);
/// assert_eq!(metrics.confirmed_count, 1);
/// assert_eq!(metrics.pending_count, 1);
/// assert_eq!(metrics.total_headcount, 5);
/// assert_eq!(metrics.group_count, 1);
/// assert_eq!(metrics.individual_count, 1);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn compute_metrics(reservations: &[Reservation]) -> ReservationMetrics {
    let total_count = reservations.len() as u32;
    let total_revenue: f64 = reservations.iter().map(|r| r.total).sum();

    let mut confirmed_count = 0;
    let mut pending_count = 0;
    let mut cancelled_count = 0;
    let mut group_count = 0;
    let mut total_headcount = 0;
    let mut liquidated_count = 0;
    let mut emails: HashSet<&str> = HashSet::new();

    for reservation in reservations {
        match reservation.status() {
            Some(crate::ReservationStatus::Confirmed) => confirmed_count += 1,
            Some(crate::ReservationStatus::Pending) => pending_count += 1,
            Some(crate::ReservationStatus::Cancelled) => cancelled_count += 1,
            // Unknown codes fall outside every bucket.
            None => {}
        }

        if reservation.group {
            group_count += 1;
        }
        total_headcount += reservation.headcount();
        if reservation.is_liquidated() {
            liquidated_count += 1;
        }
        emails.insert(reservation.customer_email.as_str());
    }

    ReservationMetrics {
        total_count,
        total_revenue,
        confirmed_count,
        pending_count,
        cancelled_count,
        group_count,
        individual_count: total_count - group_count,
        total_headcount,
        liquidated_count,
        outstanding_count: total_count - liquidated_count,
        unique_customers: emails.len() as u32,
    }
}
