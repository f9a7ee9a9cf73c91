//! Hosted record-store access
//!
//! The store is a hosted relational data service reached over a
//! PostgREST-style HTTP interface. [`RecordStoreClient`] owns the wire
//! shape (filtered select, insert, update on JSON rows); the repository
//! modules translate the core ports onto it.

pub mod activity_repository;
pub mod client;
pub mod leaderboard_repository;
pub mod user_profile_repository;

pub use activity_repository::StoreActivityRepository;
pub use client::{Filter, Order, RecordStoreClient};
pub use leaderboard_repository::StoreLeaderboardRepository;
pub use user_profile_repository::StoreUserProfileRepository;

use loantrail_domain::{LoanTrailError, Result};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Deserialize one store row into a domain type.
pub(crate) fn row_into<T: DeserializeOwned>(row: Value) -> Result<T> {
    serde_json::from_value(row)
        .map_err(|err| LoanTrailError::Store(format!("malformed store row: {err}")))
}

/// Drop the columns the store assigns itself before an insert.
pub(crate) fn without_server_fields(mut row: Value, fields: &[&str]) -> Value {
    if let Some(map) = row.as_object_mut() {
        for field in fields {
            map.remove(*field);
        }
    }
    row
}
