//src/bytecode/files.rs

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use super::BDEST_WORD_SIZE;

/// Lit une image d'instructions brute depuis le disque
pub fn read_rom<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let mut file = File::open(path)?;
    let mut buffer = Vec::new();
    file.read_to_end(&mut buffer)?;
    Ok(buffer)
}

/// Écrit la table des destinations de branchement sur disque
pub fn write_bdest<P: AsRef<Path>>(path: P, table: &[u8]) -> io::Result<()> {
    if table.len() % BDEST_WORD_SIZE != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("Taille de table bdest non alignée: {} bytes", table.len()),
        ));
    }

    let mut file = File::create(path)?;
    file.write_all(table)?;
    file.flush()
}

/// Lit une table des destinations depuis le disque
pub fn read_bdest<P: AsRef<Path>>(path: P) -> io::Result<Vec<u8>> {
    let buffer = read_rom(path)?;
    if buffer.len() % BDEST_WORD_SIZE != 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "Table bdest tronquée",
        ));
    }
    Ok(buffer)
}

/// Décode le mot (little-endian) associé à l'adresse d'instruction
pub fn decode_bdest_word(table: &[u8], address: usize) -> Option<u16> {
    let offset = address.checked_mul(BDEST_WORD_SIZE)?;
    let bytes = table.get(offset..offset.checked_add(BDEST_WORD_SIZE)?)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}
