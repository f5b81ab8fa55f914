// Record id generation
use uuid::Uuid;

/// Source of unique record ids
///
/// Every id handed out within one simulation run must be distinct.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Production id source backed by random UUIDs
#[derive(Debug, Default, Clone)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Counter-based ids with deterministic output
#[derive(Debug, Default, Clone)]
pub struct SequentialIdGenerator {
    counter: u64,
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        self.counter += 1;
        format!("id-{}", self.counter)
    }
}
