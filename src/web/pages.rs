//! Page handlers
//!
//! The home page, the booking form submission, and the admin booking list.
//! Each handler builds an explicit view model and hands it to `views`.

use axum::{
    extract::{Form, State},
    response::Html,
};
use chrono::NaiveDate;
use validator::Validate;

use crate::db::{BookingRepository, CarRepository};
use crate::models::BookingForm;
use crate::services::{self, BookingError, BookingRequest};
use crate::utils::AppError;
use crate::web::views::{self, AdminPage, Banner, HomePage};
use crate::AppState;

/// `GET /` - available-car list plus booking form
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_home_with_banner(&state, None).await
}

/// `POST /book` - submit a booking, then re-render the home view
///
/// Always answers with the home page: a success banner naming the booked
/// car, or an error banner, in both cases alongside the current
/// available-car list.
pub async fn book(
    State(state): State<AppState>,
    Form(form): Form<BookingForm>,
) -> Result<Html<String>, AppError> {
    let banner = match parse_form(&form) {
        Ok(request) => match services::submit_booking(&state.db, request).await {
            Ok(confirmation) => {
                Banner::Success(format!("Booking successful for {}", confirmation.car_name))
            }
            Err(err @ (BookingError::InvalidDateRange | BookingError::CarNotFound)) => {
                Banner::Error(err.to_string())
            }
            Err(BookingError::Storage(err)) => return Err(err.into()),
        },
        Err(message) => Banner::Error(message),
    };

    render_home_with_banner(&state, Some(banner)).await
}

/// `GET /admin/bookings` - all bookings, newest first
pub async fn admin_bookings(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let bookings = BookingRepository::new(&state.db)
        .list_all_newest_first()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list bookings: {}", e);
            AppError::Internal("Failed to list bookings".to_string())
        })?;

    Ok(Html(views::render_admin(&AdminPage { bookings })))
}

async fn render_home_with_banner(
    state: &AppState,
    banner: Option<Banner>,
) -> Result<Html<String>, AppError> {
    let cars = CarRepository::new(&state.db)
        .list_available()
        .await
        .map_err(|e| {
            tracing::error!("Failed to list available cars: {}", e);
            AppError::Internal("Failed to list available cars".to_string())
        })?;

    Ok(Html(views::render_home(&HomePage { cars, banner })))
}

/// Turn the raw form payload into a typed booking request
///
/// Malformed input (blank name, non-numeric car id, unparseable date) never
/// reaches the booking service; the returned message becomes the error
/// banner on the re-rendered form.
fn parse_form(form: &BookingForm) -> Result<BookingRequest, String> {
    if form.validate().is_err() {
        return Err("Name is required".to_string());
    }

    let car_id: i64 = form
        .car_id
        .trim()
        .parse()
        .map_err(|_| "Car ID must be a number".to_string())?;

    let start_date = parse_date(&form.start_date)?;
    let end_date = parse_date(&form.end_date)?;

    Ok(BookingRequest {
        customer_name: form.name.clone(),
        car_id,
        start_date,
        end_date,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: {}", value))
}
