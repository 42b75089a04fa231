//! Booking ledger models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A persisted booking record
///
/// `car_name` is a snapshot of the car's name taken at booking time, so the
/// record stays meaningful even if the catalog entry is later renamed.
/// Bookings are never mutated or deleted after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    pub customer_name: String,
    pub car_id: i64,
    pub car_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// A booking that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub customer_name: String,
    pub car_id: i64,
    pub car_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Raw form payload from `POST /book`
///
/// Dates and the car id arrive as strings and are parsed by the handler so
/// that malformed input re-renders the form instead of rejecting the
/// request outright.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BookingForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[serde(rename = "carId")]
    pub car_id: String,
    #[serde(rename = "startDate")]
    pub start_date: String,
    #[serde(rename = "endDate")]
    pub end_date: String,
}
