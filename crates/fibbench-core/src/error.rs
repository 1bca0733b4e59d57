use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    #[error("negative argument: {0} (the sequence is defined for n >= 0)")]
    NegativeArgument(i64),

    #[error("term overflow: f({n}) does not fit in u128")]
    Overflow { n: u64 },
}

pub type FibResult<T> = Result<T, FibError>;
