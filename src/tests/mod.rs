// src/tests/mod.rs
// Tests de bout en bout: source -> rom -> analyse -> table bdest sur disque

use std::fs;

use tempfile::tempdir;

use crate::analysis::{BranchDestAnalyzer, CancelToken, MessageLog, ResolveError, TaskProgress};
use crate::bytecode::assembler::assemble_file;
use crate::bytecode::files::{decode_bdest_word, read_bdest, read_rom, write_bdest};
use crate::memory::BDEST_BLOCK;
use crate::Program;

const HELLO: &str = "++++++++[>++++[>++>+++<<-]>+<<-]>>.>+.";

#[test]
fn test_pipeline_from_source_file() {
    let dir = tempdir().expect("Impossible de créer un répertoire temporaire");
    let src = dir.path().join("hello.bf");
    let rom_path = dir.path().join("hello.bin");
    let bdest_path = dir.path().join("hello.bdest");

    fs::write(&src, HELLO).unwrap();
    let count = assemble_file(&src, &rom_path).unwrap();
    assert_eq!(count, HELLO.len());

    let rom = read_rom(&rom_path).unwrap();
    let len = rom.len();
    let mut program = Program::from_rom("brainfuck", rom, len);
    let mut monitor = TaskProgress::new(CancelToken::new());
    let mut log = MessageLog::new();

    let analyzer = BranchDestAnalyzer::default();
    assert!(analyzer.can_analyze(&program));
    assert!(analyzer.added(&mut program, &mut monitor, &mut log).unwrap());
    assert_eq!(monitor.progress(), len as u64);

    let bdest = program.memory.get_block(BDEST_BLOCK).unwrap();
    write_bdest(&bdest_path, bdest.bytes()).unwrap();
    let table = read_bdest(&bdest_path).unwrap();
    assert_eq!(table.len(), len * 2);

    // Boucle externe: '[' en 8, ']' en 31
    assert_eq!(decode_bdest_word(&table, 8), Some(32));
    assert_eq!(decode_bdest_word(&table, 31), Some(8));
    // Boucle interne: '[' en 14, ']' en 25
    assert_eq!(decode_bdest_word(&table, 14), Some(26));
    assert_eq!(decode_bdest_word(&table, 25), Some(14));
}

#[test]
fn test_every_bracket_points_to_its_partner() {
    let rom = crate::bytecode::assembler::assemble(HELLO);
    let table = crate::analysis::resolve_branch_dests(&rom).unwrap();

    for (addr, byte) in rom.iter().enumerate() {
        let dest = decode_bdest_word(&table, addr).unwrap() as usize;
        match *byte {
            0x6 => {
                // L'ouverture saute juste après sa fermeture
                assert_eq!(rom[dest - 1], 0x7);
                assert_eq!(decode_bdest_word(&table, dest - 1), Some(addr as u16));
            }
            0x7 => {
                assert_eq!(rom[dest], 0x6);
                assert_eq!(decode_bdest_word(&table, dest), Some(addr as u16 + 1));
            }
            _ => assert_eq!(dest, 0),
        }
    }
}

#[test]
fn test_failed_analysis_reports_message() {
    let mut program = Program::from_rom("brainfuck", vec![0x6, 0x6, 0x7], 3);
    let mut log = MessageLog::new();

    let ok = BranchDestAnalyzer::default()
        .added(&mut program, &mut crate::analysis::DummyMonitor, &mut log)
        .unwrap();
    assert!(!ok);
    assert_eq!(
        log.messages(),
        &[ResolveError::UnmatchedBranch(Some(0)).to_string()]
    );
}
