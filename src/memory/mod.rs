//src/memory/mod.rs

pub mod blocks;
pub mod programs;

// Re-export
pub use blocks::{MemoryBlock, ReadRegion, WriteRegion};
pub use programs::{Memory, Program, BDEST_BLOCK, ROM_BLOCK};
