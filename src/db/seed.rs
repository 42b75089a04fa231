//! Startup seed data for the car catalog

use anyhow::Result;
use tracing::info;

use crate::db::{CarRepository, DbPool};
use crate::models::Car;

/// Names of the cars seeded into an empty catalog
const SEED_CARS: [&str; 3] = ["Honda City", "Maruti Swift", "Mahindra Scorpio"];

/// Seed the car catalog if it is empty
///
/// Runs at startup. The emptiness check makes repeated startups against the
/// same database a no-op.
pub async fn seed_cars(pool: &DbPool) -> Result<()> {
    let repo = CarRepository::new(pool);

    if repo.count().await? > 0 {
        info!("Car catalog already populated, skipping seed");
        return Ok(());
    }

    for name in SEED_CARS {
        repo.save(&Car::new(name)).await?;
    }

    info!("Seeded car catalog with {} cars", SEED_CARS.len());
    Ok(())
}
