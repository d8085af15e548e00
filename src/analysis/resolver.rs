//src/analysis/resolver.rs

use crate::bytecode::opcodes::{CLOSE_LOOP, OPEN_LOOP};
use crate::bytecode::{encode_bdest_word, BDEST_MAX_ADDRESS, BDEST_WORD_SIZE};
use crate::memory::{ReadRegion, WriteRegion};

use super::monitors::{DummyMonitor, TaskMonitor};
use super::resolve_errors::{ResolveError, ResolveResult};
use super::stacks::PendingStack;

/// Statistiques d'un passage de résolution réussi
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Nombre d'instructions parcourues
    pub instructions: u64,
    /// Nombre de paires `[` / `]` résolues
    pub pairs: u64,
    /// Profondeur d'imbrication maximale
    pub max_depth: usize,
}

/// Calcule les destinations des instructions `[` et `]` d'un flux
/// d'instructions et les écrit dans la table bdest.
///
/// Pour chaque paire (ouverture en `o`, fermeture en `c`):
/// - `bdest[c] = o` (la fermeture revient à l'ouverture)
/// - `bdest[o] = c + 1` (l'ouverture saute après la fermeture)
///
/// Chaque entrée est un mot de 16 bits little-endian, à l'offset `2 * adresse`.
/// Les entrées des autres instructions ne sont jamais touchées.
#[derive(Debug, Default, Clone, Copy)]
pub struct BranchResolver;

impl BranchResolver {
    pub fn new() -> Self {
        Self
    }

    /// Parcourt `rom` une seule fois, de gauche à droite.
    ///
    /// En cas d'erreur (ou d'annulation) le contenu de `bdest` doit être ignoré.
    pub fn resolve<R, W, M>(
        &self,
        rom: &R,
        bdest: &mut W,
        monitor: &mut M,
    ) -> ResolveResult<ResolveStats>
    where
        R: ReadRegion + ?Sized,
        W: WriteRegion + ?Sized,
        M: TaskMonitor + ?Sized,
    {
        let rom_size = rom.size();
        let bdest_size = bdest.size();
        if bdest_size / (BDEST_WORD_SIZE as u64) < rom_size {
            return Err(ResolveError::Precondition {
                rom_size,
                bdest_size,
            });
        }

        monitor.initialize(rom_size);
        log::debug!("Résolution des branchements sur {} instructions", rom_size);

        let mut stack = PendingStack::new();
        let mut pairs = 0u64;

        for addr in 0..rom_size {
            monitor.check_cancelled()?;
            monitor.increment_progress(1);

            match rom.read_byte(addr)? {
                OPEN_LOOP => stack.push(addr),
                CLOSE_LOOP => {
                    let open = stack.pop().ok_or_else(|| {
                        log::warn!("']' sans '[' correspondant à 0x{:x}", addr);
                        ResolveError::UnmatchedBranch(Some(addr))
                    })?;

                    write_branch_dest(bdest, addr, open)?;
                    write_branch_dest(bdest, open, addr + 1)?;
                    pairs += 1;

                    log::trace!("Paire [0x{:x}, 0x{:x}]", open, addr);
                }
                _ => {}
            }
        }

        if let Some(oldest) = stack.oldest() {
            log::warn!(
                "{} '[' non fermé(s), le plus ancien à 0x{:x}",
                stack.depth(),
                oldest
            );
            return Err(ResolveError::UnmatchedBranch(Some(oldest)));
        }

        let stats = ResolveStats {
            instructions: rom_size,
            pairs,
            max_depth: stack.max_depth(),
        };
        log::debug!(
            "{} paires résolues (profondeur max {})",
            stats.pairs,
            stats.max_depth
        );
        Ok(stats)
    }
}

/// Écrit `dest` dans le mot bdest de l'instruction `addr`
fn write_branch_dest<W>(bdest: &mut W, addr: u64, dest: u64) -> ResolveResult<()>
where
    W: WriteRegion + ?Sized,
{
    if dest > BDEST_MAX_ADDRESS {
        return Err(ResolveError::EncodingRange {
            address: addr,
            value: dest,
        });
    }

    let word = encode_bdest_word(dest as u16);
    bdest.put_bytes(addr * BDEST_WORD_SIZE as u64, &word)?;
    Ok(())
}

/// Résout un flux en mémoire et retourne une table bdest de `2 * rom.len()` bytes.
/// Les mots des instructions autres que `[` et `]` valent zéro.
pub fn resolve_branch_dests(rom: &[u8]) -> ResolveResult<Vec<u8>> {
    let mut bdest = vec![0u8; rom.len() * BDEST_WORD_SIZE];
    BranchResolver::new().resolve(rom, bdest.as_mut_slice(), &mut DummyMonitor)?;
    Ok(bdest)
}
