//src/analysis/resolve_errors.rs

use std::io;

use thiserror::Error;

/// Erreurs de la résolution des destinations de branchement
#[derive(Debug, Error)]
pub enum ResolveError {
    /// La table bdest ne peut pas contenir un mot par instruction
    #[error("La mémoire bdest ({bdest_size} bytes) est trop petite pour la mémoire rom ({rom_size} instructions)")]
    Precondition { rom_size: u64, bdest_size: u64 },

    /// `]` sans `[` correspondant (adresse connue), ou `[` jamais fermé
    #[error("{}", unmatched_message(.0))]
    UnmatchedBranch(Option<u64>),

    /// Adresse de destination non représentable sur un mot bdest
    #[error("Destination 0x{value:x} non encodable sur 16 bits (instruction 0x{address:x})")]
    EncodingRange { address: u64, value: u64 },

    #[error("Erreur d'accès mémoire: {0}")]
    Memory(#[from] io::Error),

    #[error("Bloc mémoire introuvable: {0}")]
    MissingBlock(String),

    /// Le même bloc est demandé en lecture et en écriture
    #[error("Le bloc mémoire {0} ne peut pas être à la fois rom et bdest")]
    SharedBlock(String),

    /// Annulation demandée par l'appelant, ce n'est pas un échec
    #[error("Analyse annulée")]
    Cancelled,
}

fn unmatched_message(address: &Option<u64>) -> String {
    match address {
        Some(addr) => format!("Unmatched branch at address 0x{:x}", addr),
        None => "Unmatched branch".to_string(),
    }
}

impl ResolveError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Adresse fautive, si connue
    pub fn address(&self) -> Option<u64> {
        match self {
            Self::UnmatchedBranch(addr) => *addr,
            Self::EncodingRange { address, .. } => Some(*address),
            _ => None,
        }
    }
}

/// Resultat type pour les operations de résolution
pub type ResolveResult<T> = Result<T, ResolveError>;
