use uuid::Uuid;

/// Source of task identifiers.
///
/// The engine never generates ids itself—it pulls them from an injected source,
/// so tests can assert on deterministic ids while production gets random v4 UUIDs.
pub trait IdSource {
    fn next_id(&mut self) -> Uuid;
}

/// Random v4 UUIDs. The production source.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidSource;

impl IdSource for UuidSource {
    fn next_id(&mut self) -> Uuid {
        Uuid::new_v4()
    }
}

/// Monotonic counter ids, for deterministic tests and reproducible embedding.
#[derive(Debug, Default)]
pub struct SequentialSource {
    next: u128,
}

impl SequentialSource {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSource for SequentialSource {
    fn next_id(&mut self) -> Uuid {
        self.next += 1;
        Uuid::from_u128(self.next)
    }
}
