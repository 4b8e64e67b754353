//! Shared UI crate for Quizdash. Payload handling and the dashboard views live here.

pub mod core;
pub mod dashboard;
pub mod views;
