//! Core types and trait definitions for the HRMS attendance service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::RecordStore`]; the derived views
//! (dashboard counts, per-employee history, present-day totals) live in
//! [`aggregate`] as pure functions over what a store returns.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod aggregate;
pub mod attendance;
pub mod employee;
pub mod error;
pub mod input;
pub mod store;

pub use error::{Error, Result};
