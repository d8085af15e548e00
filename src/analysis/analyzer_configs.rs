//src/analysis/analyzer_configs.rs

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::memory::{BDEST_BLOCK, ROM_BLOCK};

/// Nom du processeur reconnu par l'analyseur
pub const PROCESSOR_NAME: &str = "brainfuck";

/// Configuration de l'analyseur des destinations de branchement
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    pub processor: String,   // Processeur accepté par can_analyze
    pub rom_block: String,   // Bloc contenant les instructions
    pub bdest_block: String, // Bloc recevant la table des destinations
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            processor: PROCESSOR_NAME.to_string(),
            rom_block: ROM_BLOCK.to_string(),
            bdest_block: BDEST_BLOCK.to_string(),
        }
    }
}

impl AnalyzerConfig {
    /// Lit la configuration depuis du TOML. Les clés absentes gardent leur valeur par défaut.
    pub fn from_toml(text: &str) -> io::Result<Self> {
        toml::from_str(text).map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Configuration invalide: {}", e),
            )
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}
