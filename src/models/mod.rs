//! Data models
//!
//! Domain types for the car catalog and the booking ledger, plus the
//! request payload submitted by the booking form.

mod booking;
mod car;

pub use booking::{Booking, BookingForm, NewBooking};
pub use car::Car;
