//! Activity recording and derived gamification state

pub mod ports;
pub mod service;

pub use service::ActivityService;
