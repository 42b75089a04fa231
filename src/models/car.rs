//! Car catalog model

use serde::{Deserialize, Serialize};

/// A rentable car
///
/// `id` is `None` until the car has been persisted; the database assigns it
/// on first insert. `available` starts out `true` and is flipped to `false`
/// when the car is booked. There is no return path, so the flag only ever
/// moves from `true` to `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Car {
    pub id: Option<i64>,
    pub name: String,
    pub available: bool,
}

impl Car {
    /// Create a new, not-yet-persisted car with default availability
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            available: true,
        }
    }
}
