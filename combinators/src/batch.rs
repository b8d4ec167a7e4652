use crate::error::Error;

pub struct Batch<I> {
    iter: I,
    size: usize,
}

/// Groups consecutive elements of `xs` into vectors of `size` elements.
///
/// The last group is shorter when the length of `xs` is not a multiple of
/// `size`; it is yielded, not dropped.
pub fn batch<I: IntoIterator>(xs: I, size: usize) -> Result<Batch<I::IntoIter>, Error> {
    if size == 0 {
        return Err(Error::ZeroSize { op: "batch" });
    }
    Ok(Batch {
        iter: xs.into_iter(),
        size,
    })
}

impl<I: Iterator> Iterator for Batch<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = Vec::with_capacity(self.size);
        group.extend(self.iter.by_ref().take(self.size));
        if group.is_empty() {
            None
        } else {
            Some(group)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.iter.size_hint();
        let groups = |n: usize| n / self.size + usize::from(n % self.size != 0);
        (groups(lower), upper.map(groups))
    }
}
