use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceError {
    #[error(
        "sequence exhausted after {visited} of {requested} requested elements"
    )]
    Exhausted { requested: usize, visited: usize },
    #[error("sequence is longer than the index type can count (max {max})")]
    IndexOverflow { max: usize },
}

impl SequenceError {
    pub fn exhausted(requested: usize, visited: usize) -> Self {
        debug_assert!(visited < requested);
        SequenceError::Exhausted { requested, visited }
    }
    pub fn index_overflow(max: usize) -> Self {
        SequenceError::IndexOverflow { max }
    }
}
