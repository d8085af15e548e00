//src/analysis/stacks.rs

/// Pile LIFO des adresses de `[` pas encore fermés.
/// Locale à un passage de résolution.
#[derive(Debug, Default)]
pub struct PendingStack {
    addresses: Vec<u64>,
    max_depth: usize,
}

impl PendingStack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, addr: u64) {
        self.addresses.push(addr);
        self.max_depth = self.max_depth.max(self.addresses.len());
    }

    pub fn pop(&mut self) -> Option<u64> {
        self.addresses.pop()
    }

    pub fn peek(&self) -> Option<u64> {
        self.addresses.last().copied()
    }

    /// Plus ancienne adresse encore en attente (la première empilée)
    pub fn oldest(&self) -> Option<u64> {
        self.addresses.first().copied()
    }

    pub fn depth(&self) -> usize {
        self.addresses.len()
    }

    /// Profondeur maximale atteinte depuis la création
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }
}
