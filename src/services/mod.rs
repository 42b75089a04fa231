//! Business logic services

pub mod booking;

pub use booking::{submit_booking, BookingConfirmation, BookingError, BookingRequest};
