//src/analysis/analyzer.rs

use crate::memory::Program;

use super::analyzer_configs::AnalyzerConfig;
use super::monitors::TaskMonitor;
use super::resolve_errors::{ResolveError, ResolveResult};
use super::resolver::{BranchResolver, ResolveStats};

const NAME: &str = "Brainfuck Branch Destination Resolver";
const DESCRIPTION: &str = "Computes branch destinations for control flow instructions ([ and ]) and writes them to bdest memory";

/// Journal des messages d'erreur remontés à l'utilisateur
#[derive(Debug, Default, Clone)]
pub struct MessageLog {
    messages: Vec<String>,
    error_address: Option<u64>, // Adresse fautive de la première erreur qui en porte une
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_error(&mut self, err: &ResolveError) {
        self.messages.push(err.to_string());
        if self.error_address.is_none() {
            self.error_address = err.address();
        }
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }

    /// Adresse d'instruction liée à la première erreur, si connue
    pub fn error_address(&self) -> Option<u64> {
        self.error_address
    }
}

/// Analyseur qui remplit le bloc bdest d'un programme
#[derive(Debug, Default, Clone)]
pub struct BranchDestAnalyzer {
    config: AnalyzerConfig,
    resolver: BranchResolver,
}

impl BranchDestAnalyzer {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            config,
            resolver: BranchResolver::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        NAME
    }

    pub fn description(&self) -> &'static str {
        DESCRIPTION
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    /// Indique si le programme cible le processeur configuré
    pub fn can_analyze(&self, program: &Program) -> bool {
        program.processor == self.config.processor
    }

    /// Résout les destinations du bloc rom dans le bloc bdest.
    ///
    /// Seule l'annulation est retournée en `Err`. Les autres erreurs sont
    /// ajoutées à `message_log` et l'analyse retourne `Ok(false)`.
    pub fn added<M>(
        &self,
        program: &mut Program,
        monitor: &mut M,
        message_log: &mut MessageLog,
    ) -> ResolveResult<bool>
    where
        M: TaskMonitor + ?Sized,
    {
        match self.resolve_program(program, monitor) {
            Ok(stats) => {
                log::info!(
                    "{}: {} paires résolues sur {} instructions",
                    NAME,
                    stats.pairs,
                    stats.instructions
                );
                Ok(true)
            }
            Err(ResolveError::Cancelled) => {
                log::info!("{}: analyse annulée", NAME);
                Err(ResolveError::Cancelled)
            }
            Err(e) => {
                log::error!("{}: {}", NAME, e);
                message_log.append_error(&e);
                Ok(false)
            }
        }
    }

    fn resolve_program<M>(&self, program: &mut Program, monitor: &mut M) -> ResolveResult<ResolveStats>
    where
        M: TaskMonitor + ?Sized,
    {
        let (rom, bdest) = program
            .memory
            .split_blocks(&self.config.rom_block, &self.config.bdest_block)?;

        self.resolver.resolve(rom, bdest, monitor)
    }
}
