//src/analysis/mod.rs

pub mod resolve_errors;
pub mod stacks;
pub mod monitors;
pub mod resolver;
pub mod analyzer_configs;
pub mod analyzer;

// Re-export
pub use analyzer::{BranchDestAnalyzer, MessageLog};
pub use analyzer_configs::AnalyzerConfig;
pub use monitors::{CancelToken, DummyMonitor, TaskMonitor, TaskProgress};
pub use resolve_errors::{ResolveError, ResolveResult};
pub use resolver::{resolve_branch_dests, BranchResolver, ResolveStats};
