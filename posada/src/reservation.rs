//! Reservation types for tracking experience bookings.
//!
//! This module provides the [`Reservation`] record, a builder for
//! constructing validated reservations, and the derived per-booking
//! quantities (headcount, liquidation state) the metrics calculator
//! aggregates over.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::status::ReservationStatus;

/// A customer booking against an experience.
///
/// The status is stored as the raw integer code so that records carrying
/// codes this library does not know about survive a read/write cycle
/// unchanged; [`Reservation::status`] resolves it to a named variant
/// when possible.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use posada::{Reservation, ReservationStatus};
///
/// let reservation = Reservation::builder("Ana Torres", "ana@example.com", 1)
///     .total(150.0)
///     .reserved_on(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap())
///     .build()
///     .unwrap();
/// assert_eq!(reservation.status(), Some(ReservationStatus::Pending));
/// assert_eq!(reservation.headcount(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reservation {
    /// Row identifier; `None` until the reservation is persisted.
    pub id: Option<i64>,
    /// External customer identifier, if the booking came from an
    /// authenticated account.
    pub customer_id: Option<String>,
    /// Customer display name.
    pub customer_name: String,
    /// Customer email address.
    pub customer_email: String,
    /// The booked experience.
    pub experience_id: i64,
    /// Raw status code as persisted; see [`Reservation::status`].
    pub status_code: i32,
    /// Date the booking was made.
    pub reserved_on: NaiveDate,
    /// Total booking amount.
    pub total: f64,
    /// Whether the customer pays in installments.
    pub payment_plan: bool,
    /// Date the installment plan was settled in full, if it has been.
    pub liquidation_date: Option<NaiveDate>,
    /// Whether this is a group booking.
    pub group: bool,
    /// Declared size of the group, for group bookings.
    pub group_size: Option<u32>,
    /// Number of guests on an individual booking.
    pub guest_count: Option<u32>,
    /// Per-person price snapshot taken at booking time.
    pub price_per_person: Option<f64>,
}

impl Reservation {
    /// Starts building a reservation for the given customer and
    /// experience.
    ///
    /// New reservations default to pending status, today's date, a zero
    /// total, and no payment plan.
    #[must_use]
    pub fn builder(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        experience_id: i64,
    ) -> ReservationBuilder {
        ReservationBuilder {
            customer_id: None,
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            experience_id,
            status: ReservationStatus::Pending,
            reserved_on: None,
            total: 0.0,
            payment_plan: false,
            liquidation_date: None,
            group: false,
            group_size: None,
            guest_count: None,
            price_per_person: None,
        }
    }

    /// Returns the named status, or `None` for an unknown stored code.
    #[must_use]
    pub const fn status(&self) -> Option<ReservationStatus> {
        ReservationStatus::from_code(self.status_code)
    }

    /// Sets the status from a named variant.
    pub fn set_status(&mut self, status: ReservationStatus) {
        self.status_code = status.code();
    }

    /// Number of people this booking accounts for.
    ///
    /// Group bookings with a declared size count that size; otherwise the
    /// guest count applies, defaulting to one person.
    ///
    /// # Examples
    ///
    /// ```
    /// use posada::Reservation;
    ///
    /// let mut r = Reservation::builder("Ana", "ana@example.com", 1)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(r.headcount(), 1);
    ///
    /// r.guest_count = Some(3);
    /// assert_eq!(r.headcount(), 3);
    ///
    /// r.group = true;
    /// r.group_size = Some(8);
    /// assert_eq!(r.headcount(), 8);
    /// ```
    #[must_use]
    pub fn headcount(&self) -> u32 {
        if self.group {
            if let Some(size) = self.group_size {
                return size;
            }
        }
        self.guest_count.unwrap_or(1)
    }

    /// True if nothing remains to be paid.
    ///
    /// Bookings without a payment plan are settled up front; a booking on
    /// a plan is settled once its liquidation date is recorded.
    #[must_use]
    pub const fn is_liquidated(&self) -> bool {
        !self.payment_plan || self.liquidation_date.is_some()
    }
}

/// Builder for [`Reservation`].
#[derive(Debug, Clone)]
pub struct ReservationBuilder {
    customer_id: Option<String>,
    customer_name: String,
    customer_email: String,
    experience_id: i64,
    status: ReservationStatus,
    reserved_on: Option<NaiveDate>,
    total: f64,
    payment_plan: bool,
    liquidation_date: Option<NaiveDate>,
    group: bool,
    group_size: Option<u32>,
    guest_count: Option<u32>,
    price_per_person: Option<f64>,
}

impl ReservationBuilder {
    /// Sets the external customer identifier.
    ///
    /// The identifier is trimmed of leading/trailing whitespace.
    #[must_use]
    pub fn customer_id(mut self, customer_id: Option<String>) -> Self {
        self.customer_id = customer_id.map(|c| c.trim().to_string());
        self
    }

    /// Sets the reservation status.
    #[must_use]
    pub const fn status(mut self, status: ReservationStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the booking date.
    #[must_use]
    pub const fn reserved_on(mut self, reserved_on: NaiveDate) -> Self {
        self.reserved_on = Some(reserved_on);
        self
    }

    /// Sets the total booking amount.
    #[must_use]
    pub const fn total(mut self, total: f64) -> Self {
        self.total = total;
        self
    }

    /// Sets whether the customer pays in installments.
    #[must_use]
    pub const fn payment_plan(mut self, payment_plan: bool) -> Self {
        self.payment_plan = payment_plan;
        self
    }

    /// Sets the date the installment plan was settled.
    #[must_use]
    pub const fn liquidation_date(mut self, date: NaiveDate) -> Self {
        self.liquidation_date = Some(date);
        self
    }

    /// Marks the booking as a group booking of the given size.
    #[must_use]
    pub const fn group(mut self, group_size: u32) -> Self {
        self.group = true;
        self.group_size = Some(group_size);
        self
    }

    /// Sets the guest count for an individual booking.
    #[must_use]
    pub const fn guest_count(mut self, guest_count: u32) -> Self {
        self.guest_count = Some(guest_count);
        self
    }

    /// Sets the per-person price snapshot.
    #[must_use]
    pub const fn price_per_person(mut self, price: f64) -> Self {
        self.price_per_person = Some(price);
        self
    }

    /// Builds the reservation, validating its fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the customer name or email is empty after
    /// trimming whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use posada::Reservation;
    ///
    /// // Valid reservation
    /// let reservation = Reservation::builder("Ana", "ana@example.com", 1).build();
    /// assert!(reservation.is_ok());
    ///
    /// // Invalid: empty name
    /// let reservation = Reservation::builder("  ", "ana@example.com", 1).build();
    /// assert!(reservation.is_err());
    /// ```
    pub fn build(self) -> Result<Reservation, ValidationError> {
        let customer_name = self.customer_name.trim().to_string();
        if customer_name.is_empty() {
            return Err(ValidationError {
                field: "customer_name".into(),
                message: "customer name must be non-empty after trimming whitespace".into(),
            });
        }

        let customer_email = self.customer_email.trim().to_string();
        if customer_email.is_empty() {
            return Err(ValidationError {
                field: "customer_email".into(),
                message: "customer email must be non-empty after trimming whitespace".into(),
            });
        }

        if let Some(ref customer_id) = self.customer_id {
            if customer_id.is_empty() {
                return Err(ValidationError {
                    field: "customer_id".into(),
                    message: "customer id must be non-empty after trimming whitespace".into(),
                });
            }
        }

        let reserved_on = self
            .reserved_on
            .unwrap_or_else(|| chrono::Local::now().date_naive());

        Ok(Reservation {
            id: None,
            customer_id: self.customer_id,
            customer_name,
            customer_email,
            experience_id: self.experience_id,
            status_code: self.status.code(),
            reserved_on,
            total: self.total,
            payment_plan: self.payment_plan,
            liquidation_date: self.liquidation_date,
            group: self.group,
            group_size: self.group_size,
            guest_count: self.guest_count,
            price_per_person: self.price_per_person,
        })
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}
