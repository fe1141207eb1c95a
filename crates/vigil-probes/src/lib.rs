//! # vigil-probes
//!
//! Concrete probes wrapping external collaborators. Every probe pushes the
//! budget from [`vigil_core::ProbeContext`] into its own I/O client, so
//! cooperative cancellation is sufficient and the aggregator never has to
//! forcibly interrupt anything.

pub mod disk;
pub mod function;
pub mod http;
pub mod tcp;

pub use disk::{DiskSpaceProbe, SpaceSource};
pub use function::FnProbe;
pub use http::HttpProbe;
pub use tcp::TcpProbe;
