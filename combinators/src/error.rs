use thiserror::Error as ThisError;

/// Misuse of a combinator. Running out of elements is never an error.
#[derive(ThisError, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// A combinator that groups elements was asked for groups of zero.
    #[error("{op} requires a positive size")]
    ZeroSize { op: &'static str },
}
