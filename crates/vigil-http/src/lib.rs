//! # vigil-http
//!
//! HTTP surface over the aggregation engine: four views that differ only in
//! which tiers they select, what deadline they grant, and how the aggregate
//! status maps to a transport status code.

pub mod process;
pub mod router;

pub use router::{router, serve, AppState};
