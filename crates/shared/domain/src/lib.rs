//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, networking, or heavy logic, just data and simple helpers.
//! `OpenAPI` schema derives are only compiled with the `server` feature.

pub mod brand;
pub mod config;
pub mod constants;
pub mod registry;
pub mod role;
pub mod tenant;
