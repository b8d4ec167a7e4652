use thiserror::Error as ThisError;

/// Misuse of an [`Iter`](crate::Iter) operation.
///
/// Exhaustion is not represented here: accessors report it as `None`.
#[derive(ThisError, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    #[error(transparent)]
    Combinator(#[from] combinators::Error),
}
