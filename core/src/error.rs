use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    // The running product left the i64 range while multiplying by `n`.
    #[error("factorial overflows i64 at {n}!")]
    Overflow { n: i64 },
}
