//src/analysis/monitors.rs

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::resolve_errors::{ResolveError, ResolveResult};

/// Suivi de progression et annulation coopérative d'une tâche
pub trait TaskMonitor {
    /// Fixe la quantité totale de travail
    fn initialize(&mut self, total: u64);

    fn increment_progress(&mut self, n: u64);

    fn is_cancelled(&self) -> bool;

    /// Retourne `ResolveError::Cancelled` si l'annulation a été demandée
    fn check_cancelled(&self) -> ResolveResult<()> {
        if self.is_cancelled() {
            Err(ResolveError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Moniteur qui ne suit rien et n'annule jamais
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyMonitor;

impl TaskMonitor for DummyMonitor {
    fn initialize(&mut self, _total: u64) {}

    fn increment_progress(&mut self, _n: u64) {}

    fn is_cancelled(&self) -> bool {
        false
    }
}

/// Drapeau d'annulation partageable entre threads
#[derive(Debug, Default, Clone)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Moniteur qui compte la progression et observe un `CancelToken`
#[derive(Debug, Default, Clone)]
pub struct TaskProgress {
    total: u64,
    progress: u64,
    token: CancelToken,
}

impl TaskProgress {
    pub fn new(token: CancelToken) -> Self {
        Self {
            total: 0,
            progress: 0,
            token,
        }
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn progress(&self) -> u64 {
        self.progress
    }

    pub fn token(&self) -> &CancelToken {
        &self.token
    }
}

impl TaskMonitor for TaskProgress {
    fn initialize(&mut self, total: u64) {
        self.total = total;
        self.progress = 0;
    }

    fn increment_progress(&mut self, n: u64) {
        self.progress = self.progress.saturating_add(n);
    }

    fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}
