use std::iter::{Take, TakeWhile};

pub fn take<I: IntoIterator>(xs: I, n: usize) -> Take<I::IntoIter> {
    xs.into_iter().take(n)
}

/// Leading elements of `xs` satisfying `p`.
///
/// The first element failing `p` is pulled from the source and discarded, so
/// anyone sharing the source will not see it.
pub fn take_while<I, P>(xs: I, p: P) -> TakeWhile<I::IntoIter, P>
where
    I: IntoIterator,
    P: FnMut(&I::Item) -> bool,
{
    xs.into_iter().take_while(p)
}

pub struct Pairwise<I: Iterator> {
    iter: I,
    last: Option<I::Item>,
}

/// Overlapping pairs of neighbouring elements: `[a, b, c]` gives `(a, b)`
/// and `(b, c)`. Empty when `xs` has fewer than two elements.
pub fn pairwise<I>(xs: I) -> Pairwise<I::IntoIter>
where
    I: IntoIterator,
    I::Item: Clone,
{
    Pairwise {
        iter: xs.into_iter(),
        last: None,
    }
}

impl<I> Iterator for Pairwise<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (I::Item, I::Item);

    fn next(&mut self) -> Option<Self::Item> {
        if self.last.is_none() {
            self.last = Some(self.iter.next()?);
        }
        let next = self.iter.next()?;
        let prev = self.last.replace(next.clone())?;
        Some((prev, next))
    }
}

#[test]
fn take_stops_pulling() {
    let mut source = 0..;
    assert_eq!(take(source.by_ref(), 3).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(source.next(), Some(3));
}

#[test]
fn take_while_drops_first_failure() {
    let mut source = vec![1, 2, 5, 3].into_iter();
    assert_eq!(
        take_while(source.by_ref(), |&x| x < 4).collect::<Vec<_>>(),
        vec![1, 2]
    );
    assert_eq!(source.next(), Some(3));
}

#[test]
fn pairwise_windows() {
    assert_eq!(pairwise(1..4).collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
    assert_eq!(pairwise(vec![1]).next(), None);
    assert_eq!(pairwise(Vec::<i32>::new()).next(), None);
}

#[test]
fn pairwise_pulls_on_demand() {
    let mut source = 0..;
    let mut pairs = pairwise(source.by_ref());
    assert_eq!(pairs.next(), Some((0, 1)));
    assert_eq!(pairs.next(), Some((1, 2)));
    drop(pairs);
    assert_eq!(source.next(), Some(3));

    let mut source = 0..;
    drop(pairwise(source.by_ref()));
    assert_eq!(source.next(), Some(0));
}
