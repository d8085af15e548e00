// src/main.rs

mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use bf_bdest::analysis::analyzer_configs::PROCESSOR_NAME;
use bf_bdest::analysis::{AnalyzerConfig, BranchDestAnalyzer, CancelToken, MessageLog, TaskProgress};
use bf_bdest::bytecode::assembler::assemble_file;
use bf_bdest::bytecode::files::{read_rom, write_bdest};
use bf_bdest::Program;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Affiche les messages de debug
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble un fichier source en image d'instructions brute
    Assemble {
        #[arg(value_name = "SOURCE")]
        input: PathBuf,
        #[arg(value_name = "ROM")]
        output: PathBuf,
    },

    /// Calcule la table des destinations de branchement d'une image
    Resolve {
        #[arg(value_name = "ROM")]
        rom: PathBuf,
        #[arg(value_name = "BDEST")]
        bdest: PathBuf,

        /// Fichier de configuration TOML de l'analyseur
        #[arg(short, long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Processeur déclaré pour l'image
        #[arg(long, default_value = PROCESSOR_NAME)]
        processor: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.verbose);

    let result = match cli.command {
        Command::Assemble { input, output } => assemble_file(&input, &output).map(|_| ()).map_err(|e| e.to_string()),
        Command::Resolve {
            rom,
            bdest,
            config,
            processor,
        } => resolve(rom, bdest, config, &processor),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            log::error!("{msg}");
            ExitCode::FAILURE
        }
    }
}

fn resolve(
    rom_path: PathBuf,
    bdest_path: PathBuf,
    config_path: Option<PathBuf>,
    processor: &str,
) -> Result<(), String> {
    let config = match config_path {
        Some(path) => AnalyzerConfig::from_file(&path).map_err(|e| format!("{}: {}", path.display(), e))?,
        None => AnalyzerConfig::default(),
    };

    let rom = read_rom(&rom_path).map_err(|e| format!("{}: {}", rom_path.display(), e))?;
    let slots = rom.len();
    let mut program = Program::with_blocks(processor, &config.rom_block, rom, &config.bdest_block, slots);

    let analyzer = BranchDestAnalyzer::new(config);
    if !analyzer.can_analyze(&program) {
        return Err(format!(
            "Processeur non supporté: {} (attendu: {})",
            processor,
            analyzer.config().processor
        ));
    }

    let mut monitor = TaskProgress::new(CancelToken::new());
    let mut message_log = MessageLog::new();
    let resolved = analyzer
        .added(&mut program, &mut monitor, &mut message_log)
        .map_err(|e| e.to_string())?;
    log::debug!("Progression: {}/{}", monitor.progress(), monitor.total());

    if !resolved {
        for message in message_log.messages() {
            eprintln!("{}", message);
        }
        if let Some(addr) = message_log.error_address() {
            eprintln!("Instruction fautive: 0x{:04x}", addr);
        }
        return Err(format!("Échec de l'analyse de {}", rom_path.display()));
    }

    let bdest = program
        .memory
        .get_block(&analyzer.config().bdest_block)
        .ok_or_else(|| format!("Bloc mémoire introuvable: {}", analyzer.config().bdest_block))?;
    write_bdest(&bdest_path, bdest.bytes()).map_err(|e| format!("{}: {}", bdest_path.display(), e))?;

    log::info!("Table bdest écrite dans {}", bdest_path.display());
    Ok(())
}
