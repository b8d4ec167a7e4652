//! Haskell-style lazy sequences over any iterable source.
//!
//! [`Iter`] wraps a single forward-only cursor and exposes monadic
//! combinators over it. Nothing is pulled from the source until a consuming
//! operation asks for it, and no element is ever produced twice.
//!
//! ```
//! use haskellian::Iter;
//!
//! let xs = Iter::new(vec![1, 2, 3, 4, 5])
//!     .filter(|x| x % 2 == 0)
//!     .map(|x| x * 10)
//!     .sync();
//! assert_eq!(xs, vec![20, 40]);
//! ```

mod error;
mod lazy_sequence;
mod monad;

pub use error::Error;
pub use lazy_sequence::{Iter, PREVIEW_LEN};
pub use monad::Monad;
