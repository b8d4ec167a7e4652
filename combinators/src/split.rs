use std::iter::Chain;

pub fn head<I: IntoIterator>(xs: I) -> Option<I::Item> {
    xs.into_iter().next()
}

pub fn tail<I: IntoIterator>(xs: I) -> I::IntoIter {
    uncons(xs).1
}

/// Pulls the first element and returns it together with the rest of the
/// source, which resumes right after it.
pub fn uncons<I: IntoIterator>(xs: I) -> (Option<I::Item>, I::IntoIter) {
    let mut iter = xs.into_iter();
    (iter.next(), iter)
}

/// Pulls exactly `min(n, len)` elements into a vector and returns it with the
/// rest of the source, which is left untouched.
pub fn split<I: IntoIterator>(xs: I, n: usize) -> (Vec<I::Item>, I::IntoIter) {
    let mut iter = xs.into_iter();
    let prefix = iter.by_ref().take(n).collect();
    (prefix, iter)
}

/// Yields `prefix` and then continues with `rest`. Used to put drained
/// elements back in front of a source.
pub fn flatten<I, J>(prefix: I, rest: J) -> Chain<I::IntoIter, J::IntoIter>
where
    I: IntoIterator,
    J: IntoIterator<Item = I::Item>,
{
    prefix.into_iter().chain(rest)
}
