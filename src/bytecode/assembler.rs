//src/bytecode/assembler.rs

use std::fs;
use std::io;
use std::path::Path;

use super::opcodes::Opcode;

/// Assemble le code source en flux d'instructions.
/// Les caractères qui ne sont pas des instructions sont ignorés (commentaires).
pub fn assemble(source: &str) -> Vec<u8> {
    source
        .chars()
        .filter_map(Opcode::from_char)
        .map(|op| op.encode())
        .collect()
}

/// Assemble un fichier source et écrit l'image brute.
/// Retourne le nombre d'instructions écrites.
pub fn assemble_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> io::Result<usize> {
    let source = fs::read_to_string(input.as_ref())?;
    let rom = assemble(&source);
    fs::write(output.as_ref(), &rom)?;

    log::info!(
        "{} instructions assemblées depuis {}",
        rom.len(),
        input.as_ref().display()
    );
    Ok(rom.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::opcodes::{CLOSE_LOOP, OPEN_LOOP};
    use tempfile::tempdir;

    #[test]
    fn test_assemble_all_instructions() {
        let rom = assemble("><+-.,[]");
        assert_eq!(rom, vec![0x0, 0x1, 0x2, 0x3, 0x4, 0x5, 0x6, 0x7]);
    }

    #[test]
    fn test_assemble_skips_comments() {
        let rom = assemble("boucle: [ - ] fin\n");
        assert_eq!(rom, vec![OPEN_LOOP, 0x3, CLOSE_LOOP]);

        assert!(assemble("").is_empty());
        assert!(assemble("aucune instruction ici").is_empty());
    }

    #[test]
    fn test_assemble_file() {
        let dir = tempdir().expect("Impossible de créer un répertoire temporaire");
        let src = dir.path().join("hello.bf");
        let out = dir.path().join("hello.bin");

        fs::write(&src, "++[>+<-] commentaire").unwrap();
        let count = assemble_file(&src, &out).expect("Assemblage échoué");

        assert_eq!(count, 8);
        let rom = fs::read(&out).unwrap();
        assert_eq!(rom, vec![0x2, 0x2, OPEN_LOOP, 0x0, 0x2, 0x1, 0x3, CLOSE_LOOP]);
    }

    #[test]
    fn test_assemble_file_missing_input() {
        let dir = tempdir().unwrap();
        let result = assemble_file(dir.path().join("absent.bf"), dir.path().join("out.bin"));
        assert!(result.is_err());
    }
}
