//! Booking submission workflow
//!
//! Validates a booking request against the current catalog state and
//! performs the state transition: mark the car unavailable and append a
//! booking record carrying a snapshot of the car's name.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::db::{BookingRepository, CarRepository, DbPool};
use crate::models::{Booking, NewBooking};

/// Failure modes of a booking submission
#[derive(Debug, Error)]
pub enum BookingError {
    /// The requested start date is strictly after the end date
    #[error("Start date must be before or equal to end date")]
    InvalidDateRange,

    /// The requested car id does not exist in the catalog
    #[error("Car not found")]
    CarNotFound,

    /// Underlying storage failure
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

/// A validated, well-typed booking request
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub customer_name: String,
    pub car_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Outcome of a successful booking submission
#[derive(Debug, Clone)]
pub struct BookingConfirmation {
    pub booking: Booking,
    pub car_name: String,
}

/// Submit a booking request
///
/// Validation order: the date range is checked before the car is looked up,
/// so an inverted range never touches the catalog. There is no check that
/// the car is currently available and no overlap check against existing
/// bookings; a car can be booked repeatedly for any date range.
///
/// The availability update and the ledger insert are two independent
/// statements with no enclosing transaction. Two concurrent submissions for
/// the same car can therefore both succeed, each appending a booking. This
/// is a known property of the system, not an invariant violation the
/// storage layer guards against.
pub async fn submit_booking(
    pool: &DbPool,
    request: BookingRequest,
) -> Result<BookingConfirmation, BookingError> {
    if request.start_date > request.end_date {
        return Err(BookingError::InvalidDateRange);
    }

    let cars = CarRepository::new(pool);
    let mut car = cars
        .find_by_id(request.car_id)
        .await?
        .ok_or(BookingError::CarNotFound)?;

    car.available = false;
    cars.save(&car).await?;

    let bookings = BookingRepository::new(pool);
    let booking = bookings
        .save(&NewBooking {
            customer_name: request.customer_name,
            car_id: request.car_id,
            car_name: car.name.clone(),
            start_date: request.start_date,
            end_date: request.end_date,
        })
        .await?;

    info!(
        booking_id = booking.id,
        car_id = booking.car_id,
        car_name = %booking.car_name,
        "Booking created"
    );

    Ok(BookingConfirmation {
        car_name: car.name,
        booking,
    })
}
