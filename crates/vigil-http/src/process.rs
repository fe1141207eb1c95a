//! Host/process metrics for the detailed view.
//!
//! Linux reads `/proc`; other platforms report zeros for fields they
//! cannot measure.

use vigil_core::models::ProcessMetrics;

/// Collect a best-effort snapshot of process and host metrics.
pub fn collect() -> ProcessMetrics {
    let (memory_rss_mb, thread_count) = self_status();
    ProcessMetrics {
        memory_rss_mb,
        memory_total_mb: total_memory_mb(),
        thread_count,
        cpu_count: std::thread::available_parallelism()
            .map(|n| n.get() as u64)
            .unwrap_or(0),
    }
}

#[cfg(target_os = "linux")]
fn self_status() -> (u64, u64) {
    let content = match std::fs::read_to_string("/proc/self/status") {
        Ok(content) => content,
        Err(_) => return (0, 0),
    };

    let mut rss_kb = 0;
    let mut threads = 0;
    for line in content.lines() {
        if let Some(rest) = line.strip_prefix("VmRSS:") {
            rss_kb = parse_kb(rest);
        } else if let Some(rest) = line.strip_prefix("Threads:") {
            threads = rest.trim().parse().unwrap_or(0);
        }
    }
    (rss_kb / 1024, threads)
}

#[cfg(target_os = "linux")]
fn total_memory_mb() -> u64 {
    let content = match std::fs::read_to_string("/proc/meminfo") {
        Ok(content) => content,
        Err(_) => return 0,
    };
    content
        .lines()
        .find_map(|line| line.strip_prefix("MemTotal:"))
        .map(parse_kb)
        .unwrap_or(0)
        / 1024
}

#[cfg(target_os = "linux")]
fn parse_kb(rest: &str) -> u64 {
    rest.trim()
        .trim_end_matches("kB")
        .trim()
        .parse()
        .unwrap_or(0)
}

#[cfg(not(target_os = "linux"))]
fn self_status() -> (u64, u64) {
    (0, 0)
}

#[cfg(not(target_os = "linux"))]
fn total_memory_mb() -> u64 {
    0
}
