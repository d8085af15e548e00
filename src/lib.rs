
pub mod analysis;
pub mod bytecode;
pub mod memory;

//
// Re-export des modules principaux
pub use analysis::{BranchDestAnalyzer, BranchResolver, ResolveError, ResolveResult};
pub use memory::Program;

#[cfg(test)]
mod tests;
