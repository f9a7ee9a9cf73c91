//! Route modules and the combined API router

pub mod activities;
pub mod health;
pub mod leaderboard;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// All resource routes, merged
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(activities::router())
        .merge(users::router())
        .merge(leaderboard::router())
}
