//src/memory/blocks.rs

use std::io;

/// Région d'octets lisible par adresse (relative au début de la région)
pub trait ReadRegion {
    /// Taille de la région en bytes
    fn size(&self) -> u64;

    fn read_byte(&self, offset: u64) -> io::Result<u8>;
}

/// Région d'octets modifiable par adresse (relative au début de la région)
pub trait WriteRegion {
    /// Taille de la région en bytes
    fn size(&self) -> u64;

    /// Écrit `bytes` à partir de `offset`. Aucune écriture partielle en cas d'erreur.
    fn put_bytes(&mut self, offset: u64, bytes: &[u8]) -> io::Result<()>;
}

fn out_of_bounds(offset: u64, len: usize, size: u64) -> io::Error {
    io::Error::new(
        io::ErrorKind::InvalidInput,
        format!(
            "Accès mémoire invalide: 0x{:08X} (+{} bytes) hors de la région de {} bytes",
            offset, len, size
        ),
    )
}

/// Retourne la plage `offset..offset + len` si elle tient dans `size`
fn checked_range(offset: u64, len: usize, size: u64) -> io::Result<std::ops::Range<usize>> {
    let end = offset
        .checked_add(len as u64)
        .filter(|end| *end <= size)
        .ok_or_else(|| out_of_bounds(offset, len, size))?;
    Ok(offset as usize..end as usize)
}

impl ReadRegion for [u8] {
    fn size(&self) -> u64 {
        self.len() as u64
    }

    fn read_byte(&self, offset: u64) -> io::Result<u8> {
        let range = checked_range(offset, 1, ReadRegion::size(self))?;
        Ok(self[range.start])
    }
}

impl WriteRegion for [u8] {
    fn size(&self) -> u64 {
        self.len() as u64
    }

    fn put_bytes(&mut self, offset: u64, bytes: &[u8]) -> io::Result<()> {
        let range = checked_range(offset, bytes.len(), WriteRegion::size(self))?;
        self[range].copy_from_slice(bytes);
        Ok(())
    }
}

/// Bloc mémoire nommé, chargé à une adresse de départ
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryBlock {
    name: String,
    start: u64,
    bytes: Vec<u8>,
}

impl MemoryBlock {
    pub fn new(name: &str, start: u64, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            start,
            bytes,
        }
    }

    /// Crée un bloc rempli de zéros
    pub fn zeroed(name: &str, start: u64, size: usize) -> Self {
        Self::new(name, start, vec![0; size])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn start(&self) -> u64 {
        self.start
    }

    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Lit un byte à l'offset spécifié
    pub fn read_byte(&self, offset: u64) -> io::Result<u8> {
        self.bytes.as_slice().read_byte(offset)
    }

    /// Écrit des bytes à l'offset spécifié
    pub fn put_bytes(&mut self, offset: u64, bytes: &[u8]) -> io::Result<()> {
        self.bytes.as_mut_slice().put_bytes(offset, bytes)
    }
}

impl ReadRegion for MemoryBlock {
    fn size(&self) -> u64 {
        MemoryBlock::size(self)
    }

    fn read_byte(&self, offset: u64) -> io::Result<u8> {
        MemoryBlock::read_byte(self, offset)
    }
}

impl WriteRegion for MemoryBlock {
    fn size(&self) -> u64 {
        MemoryBlock::size(self)
    }

    fn put_bytes(&mut self, offset: u64, bytes: &[u8]) -> io::Result<()> {
        MemoryBlock::put_bytes(self, offset, bytes)
    }
}
