// src/benchmark/system_info.rs

use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Host the benchmark ran on, plus the size of the pool that did the work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    pub hostname: String,
    pub os: String,
    pub cpu_model: String,
    pub logical_cpus: usize,
    /// Threads in the pool the range products were split across
    pub worker_threads: usize,
    pub total_memory_mb: u64,
}

impl SystemInfo {
    pub fn collect(worker_threads: usize) -> Self {
        let mut sys = System::new();
        sys.refresh_cpu_all();
        sys.refresh_memory();

        let unknown = || "Unknown".to_string();
        SystemInfo {
            hostname: System::host_name().unwrap_or_else(unknown),
            os: System::long_os_version().unwrap_or_else(unknown),
            cpu_model: sys.cpus().first().map(|cpu| cpu.brand().to_string()).unwrap_or_else(unknown),
            logical_cpus: sys.cpus().len(),
            worker_threads,
            total_memory_mb: sys.total_memory() / (1024 * 1024),
        }
    }

    pub fn to_string_pretty(&self) -> String {
        format!(
            "Host: {} ({})\nCPU:  {} x{}\nPool: {} worker threads, {} MB RAM\n",
            self.hostname,
            self.os,
            self.cpu_model,
            self.logical_cpus,
            self.worker_threads,
            self.total_memory_mb,
        )
    }
}
