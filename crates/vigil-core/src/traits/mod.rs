//! Capability traits implemented by concrete dependency probes.

mod probe;

pub use probe::{IProbe, ProbeContext};
