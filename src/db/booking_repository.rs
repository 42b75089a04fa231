//! Booking ledger repository

use anyhow::{Context, Result};
use chrono::NaiveDate;
use sqlx::SqlitePool;

use crate::models::{Booking, NewBooking};

#[derive(Debug, sqlx::FromRow)]
struct BookingRow {
    id: i64,
    customer_name: String,
    car_id: i64,
    car_name: String,
    start_date: String,
    end_date: String,
}

pub struct BookingRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> BookingRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Persist a new booking and return it with its generated id
    pub async fn save(&self, booking: &NewBooking) -> Result<Booking> {
        let result = sqlx::query(
            r#"
            INSERT INTO bookings (customer_name, car_id, car_name, start_date, end_date)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&booking.customer_name)
        .bind(booking.car_id)
        .bind(&booking.car_name)
        .bind(booking.start_date.to_string())
        .bind(booking.end_date.to_string())
        .execute(self.pool)
        .await
        .context("Failed to insert booking")?;

        let id = result.last_insert_rowid();
        self.get_by_id(id)
            .await?
            .context("Failed to retrieve inserted booking")
    }

    /// Get a booking by ID
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Booking>> {
        let row = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, customer_name, car_id, car_name, start_date, end_date
            FROM bookings
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .context("Failed to get booking")?;

        row.map(row_to_booking).transpose()
    }

    /// Get all bookings, newest first (id descending)
    pub async fn list_all_newest_first(&self) -> Result<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT id, customer_name, car_id, car_name, start_date, end_date
            FROM bookings
            ORDER BY id DESC
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list bookings")?;

        rows.into_iter().map(row_to_booking).collect()
    }
}

fn row_to_booking(row: BookingRow) -> Result<Booking> {
    Ok(Booking {
        id: row.id,
        customer_name: row.customer_name,
        car_id: row.car_id,
        car_name: row.car_name,
        start_date: parse_db_date(&row.start_date)?,
        end_date: parse_db_date(&row.end_date)?,
    })
}

fn parse_db_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .with_context(|| format!("Invalid date in database: {}", value))
}
