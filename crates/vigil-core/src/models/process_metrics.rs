use serde::{Deserialize, Serialize};

/// Host/process metrics attached to the detailed view.
///
/// Fields that cannot be measured on the current platform are zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Resident set size of this process in megabytes.
    pub memory_rss_mb: u64,
    /// Total physical memory of the host in megabytes.
    pub memory_total_mb: u64,
    /// OS threads owned by this process.
    pub thread_count: u64,
    /// Logical CPUs available to this process.
    pub cpu_count: u64,
}
