//! # Domain Models
//!
//! This crate contains pure domain types with minimal dependencies (`serde`, `bitflags`, `strum`).
//! Keep it lean: no I/O, rendering, or validation logic. Just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod contact;
