pub struct FlatMap<I, F, U: IntoIterator> {
    iter: I,
    f: F,
    current: Option<U::IntoIter>,
}

/// Applies `f` to every element of `xs` and yields the elements of the
/// results, in order. `f` runs only when the output needs a new element.
pub fn flatmap<I, F, U>(xs: I, f: F) -> FlatMap<I::IntoIter, F, U>
where
    I: IntoIterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    FlatMap {
        iter: xs.into_iter(),
        f,
        current: None,
    }
}

impl<I, F, U> Iterator for FlatMap<I, F, U>
where
    I: Iterator,
    F: FnMut(I::Item) -> U,
    U: IntoIterator,
{
    type Item = U::Item;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(elem) = self.current.as_mut().and_then(Iterator::next) {
                return Some(elem);
            }
            match self.iter.next() {
                Some(x) => {
                    self.current = Some((self.f)(x).into_iter());
                }
                None => {
                    self.current = None;
                    return None;
                }
            }
        }
    }
}
