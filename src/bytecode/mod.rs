//src/

pub mod opcodes;
pub mod assembler;
pub mod files;


/// Taille d'un mot de la table bdest en bytes
pub const BDEST_WORD_SIZE: usize = 2;

/// Plus grande adresse encodable dans un mot bdest
pub const BDEST_MAX_ADDRESS: u64 = u16::MAX as u64;

/// Encode une adresse de destination en mot little-endian
pub fn encode_bdest_word(dest: u16) -> [u8; BDEST_WORD_SIZE] {
    dest.to_le_bytes()
}
