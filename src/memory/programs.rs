//src/memory/programs.rs

use std::io;

use super::blocks::MemoryBlock;
use crate::analysis::resolve_errors::{ResolveError, ResolveResult};
use crate::bytecode::BDEST_WORD_SIZE;

/// Nom du bloc contenant les instructions
pub const ROM_BLOCK: &str = "rom";
/// Nom du bloc contenant la table des destinations
pub const BDEST_BLOCK: &str = "bdest";

/// Ensemble des blocs mémoire d'un programme
#[derive(Debug, Clone, Default)]
pub struct Memory {
    blocks: Vec<MemoryBlock>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un bloc. Les noms de blocs sont uniques.
    pub fn add_block(&mut self, block: MemoryBlock) -> io::Result<()> {
        if self.get_block(block.name()).is_some() {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("Bloc mémoire déjà défini: {}", block.name()),
            ));
        }
        self.blocks.push(block);
        Ok(())
    }

    pub fn get_block(&self, name: &str) -> Option<&MemoryBlock> {
        self.blocks.iter().find(|b| b.name() == name)
    }

    pub fn get_block_mut(&mut self, name: &str) -> Option<&mut MemoryBlock> {
        self.blocks.iter_mut().find(|b| b.name() == name)
    }

    pub fn blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    /// Emprunte deux blocs distincts: `read` en lecture, `write` en écriture.
    pub fn split_blocks(
        &mut self,
        read: &str,
        write: &str,
    ) -> ResolveResult<(&MemoryBlock, &mut MemoryBlock)> {
        if read == write {
            return Err(ResolveError::SharedBlock(write.to_string()));
        }

        let mut source = None;
        let mut dest = None;
        for block in self.blocks.iter_mut() {
            if block.name() == read {
                source = Some(&*block);
            } else if block.name() == write {
                dest = Some(block);
            }
        }

        match (source, dest) {
            (Some(source), Some(dest)) => Ok((source, dest)),
            (None, _) => Err(ResolveError::MissingBlock(read.to_string())),
            (_, None) => Err(ResolveError::MissingBlock(write.to_string())),
        }
    }
}

/// Programme analysable: un processeur et sa mémoire
#[derive(Debug, Clone)]
pub struct Program {
    pub processor: String,
    pub memory: Memory,
}

impl Program {
    pub fn new(processor: &str) -> Self {
        Self {
            processor: processor.to_string(),
            memory: Memory::new(),
        }
    }

    /// Construit la disposition standard: un bloc `rom` avec les instructions
    /// et un bloc `bdest` de `bdest_slots` mots, rempli de zéros.
    pub fn from_rom(processor: &str, rom: Vec<u8>, bdest_slots: usize) -> Self {
        Self::with_blocks(processor, ROM_BLOCK, rom, BDEST_BLOCK, bdest_slots)
    }

    /// Comme [`Program::from_rom`] avec des noms de blocs choisis
    pub fn with_blocks(
        processor: &str,
        rom_block: &str,
        rom: Vec<u8>,
        bdest_block: &str,
        bdest_slots: usize,
    ) -> Self {
        let bdest_start = rom.len() as u64;
        let blocks = vec![
            MemoryBlock::new(rom_block, 0, rom),
            MemoryBlock::zeroed(bdest_block, bdest_start, bdest_slots * BDEST_WORD_SIZE),
        ];
        Self {
            processor: processor.to_string(),
            memory: Memory { blocks },
        }
    }
}
