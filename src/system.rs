//! Host and process introspection behind a swappable probe trait.
//!
//! Handlers read a fresh [`SystemSnapshot`] per request; tests substitute a
//! deterministic probe.

use std::sync::Mutex;

use async_trait::async_trait;
use sysinfo::{Pid, RefreshKind, System};

use crate::errors::AppError;

#[derive(Debug, Clone)]
pub struct SystemSnapshot {
    pub hostname: String,
    pub platform: &'static str,
    pub architecture: &'static str,
    pub cpus: usize,
    pub memory_total: u64,
    pub memory_free: u64,
    pub process_rss: u64,
}

#[async_trait]
pub trait SystemProbe: Send + Sync {
    async fn snapshot(&self) -> Result<SystemSnapshot, AppError>;
}

pub struct SysinfoProbe {
    system: Mutex<System>,
    pid: Pid,
}

impl SysinfoProbe {
    pub fn new() -> Result<Self, AppError> {
        let mut system = System::new_with_specifics(RefreshKind::everything());
        system.refresh_all();
        let pid = sysinfo::get_current_pid().map_err(AppError::internal)?;

        Ok(Self {
            system: Mutex::new(system),
            pid,
        })
    }
}

#[async_trait]
impl SystemProbe for SysinfoProbe {
    async fn snapshot(&self) -> Result<SystemSnapshot, AppError> {
        let mut system = self
            .system
            .lock()
            .map_err(|_| AppError::internal("system handle poisoned"))?;
        system.refresh_all();

        let hostname = System::host_name().unwrap_or_else(|| "unknown".to_string());
        let process_rss = system
            .process(self.pid)
            .map(|process| process.memory())
            .unwrap_or(0);
        let memory_total = system.total_memory();
        // cpus() is empty on platforms sysinfo cannot enumerate
        let cpus = system.cpus().len().max(1);

        Ok(SystemSnapshot {
            hostname,
            platform: std::env::consts::OS,
            architecture: std::env::consts::ARCH,
            cpus,
            memory_free: system.free_memory().min(memory_total),
            memory_total,
            process_rss,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn sysinfo_snapshot_is_consistent() {
        let probe = SysinfoProbe::new().expect("probe should initialize");
        let snapshot = probe.snapshot().await.expect("snapshot should succeed");

        assert!(snapshot.cpus >= 1);
        assert!(snapshot.memory_total > 0);
        assert!(snapshot.memory_free <= snapshot.memory_total);
        assert!(!snapshot.hostname.is_empty());
        assert_eq!(snapshot.platform, std::env::consts::OS);
    }
}
