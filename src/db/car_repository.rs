//! Car catalog repository

use anyhow::{Context, Result};
use sqlx::SqlitePool;

use crate::models::Car;

#[derive(Debug, sqlx::FromRow)]
struct CarRow {
    id: i64,
    name: String,
    available: i64,
}

pub struct CarRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> CarRepository<'a> {
    pub fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Get all cars that are currently available for booking
    pub async fn list_available(&self) -> Result<Vec<Car>> {
        let rows = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, name, available
            FROM cars
            WHERE available = 1
            "#,
        )
        .fetch_all(self.pool)
        .await
        .context("Failed to list available cars")?;

        Ok(rows.into_iter().map(row_to_car).collect())
    }

    /// Get a car by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Car>> {
        let row = sqlx::query_as::<_, CarRow>(
            r#"
            SELECT id, name, available
            FROM cars
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .context("Failed to get car")?;

        Ok(row.map(row_to_car))
    }

    /// Persist a car: insert when it has no id yet, update otherwise
    pub async fn save(&self, car: &Car) -> Result<Car> {
        match car.id {
            None => {
                let result = sqlx::query(
                    r#"
                    INSERT INTO cars (name, available)
                    VALUES (?, ?)
                    "#,
                )
                .bind(&car.name)
                .bind(car.available as i64)
                .execute(self.pool)
                .await
                .context("Failed to insert car")?;

                let id = result.last_insert_rowid();
                self.find_by_id(id)
                    .await?
                    .context("Failed to retrieve inserted car")
            }
            Some(id) => {
                sqlx::query(
                    r#"
                    UPDATE cars
                    SET name = ?, available = ?
                    WHERE id = ?
                    "#,
                )
                .bind(&car.name)
                .bind(car.available as i64)
                .bind(id)
                .execute(self.pool)
                .await
                .context("Failed to update car")?;

                self.find_by_id(id)
                    .await?
                    .context("Failed to retrieve updated car")
            }
        }
    }

    /// Count all cars in the catalog
    pub async fn count(&self) -> Result<i64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM cars")
            .fetch_one(self.pool)
            .await
            .context("Failed to count cars")?;

        Ok(count)
    }
}

fn row_to_car(row: CarRow) -> Car {
    Car {
        id: Some(row.id),
        name: row.name,
        available: row.available != 0,
    }
}
