//! Pure sequence transformers over anything that implements [`IntoIterator`].
//!
//! Every function pulls from its source one element at a time and preserves
//! order. Functions returning an adapter are lazy; `head`, `uncons` and
//! `split` drain a bounded prefix eagerly and hand back the untouched rest.

mod batch;
mod error;
mod flatmap;
mod split;
mod window;

pub use batch::{batch, Batch};
pub use error::Error;
pub use flatmap::{flatmap, FlatMap};
pub use split::{flatten, head, split, tail, uncons};
pub use window::{pairwise, take, take_while, Pairwise};
