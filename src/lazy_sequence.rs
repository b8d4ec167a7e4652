use std::{cell::RefCell, fmt, iter, mem, ops::BitOr};

use itertools::Itertools;

use crate::{error::Error, monad::Monad};

/// Number of elements shown by the `Debug` representation of an [`Iter`].
pub const PREVIEW_LEN: usize = 5;

type Cursor<'a, A> = Box<dyn Iterator<Item = A> + 'a>;

/// A lazy sequence: one forward-only cursor over a source of `A`s.
///
/// Combinators taking `self` hand the cursor over to the sequence they
/// return, so a sequence can never be consumed again after `uncons`,
/// `split` or `map`. Operations taking `&mut self` (`next`, `head`, `peek`,
/// `at`) advance the cursor in place.
pub struct Iter<'a, A> {
    // Behind a RefCell so that `preview` can re-chain it through `&self`.
    xs: RefCell<Cursor<'a, A>>,
    peeked: Option<A>,
}

impl<'a, A: 'a> Iter<'a, A> {
    pub fn new<I>(xs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        I::IntoIter: 'a,
    {
        Self {
            xs: RefCell::new(Box::new(xs.into_iter().fuse())),
            peeked: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(iter::empty())
    }

    pub fn unit(value: A) -> Self {
        Self::new(iter::once(value))
    }

    /// Replaces every element with the elements of `f(element)`, in order.
    ///
    /// `f` runs only when the result needs another element.
    pub fn bind<B, F, U>(self, f: F) -> Iter<'a, B>
    where
        B: 'a,
        F: FnMut(A) -> U + 'a,
        U: IntoIterator<Item = B> + 'a,
    {
        Iter::new(combinators::flatmap(self, f))
    }

    pub fn flatmap<B, F, U>(self, f: F) -> Iter<'a, B>
    where
        B: 'a,
        F: FnMut(A) -> U + 'a,
        U: IntoIterator<Item = B> + 'a,
    {
        self.bind(f)
    }

    pub fn map<B: 'a, F>(self, f: F) -> Iter<'a, B>
    where
        F: FnMut(A) -> B + 'a,
    {
        Iter::new(Iterator::map(self, f))
    }

    pub fn fmap<B: 'a, F>(self, f: F) -> Iter<'a, B>
    where
        F: FnMut(A) -> B + 'a,
    {
        self.map(f)
    }

    pub fn filter<P>(self, p: P) -> Self
    where
        P: FnMut(&A) -> bool + 'a,
    {
        Iter::new(Iterator::filter(self, p))
    }

    /// Groups of `n` consecutive elements. The last group is shorter when the
    /// length is not a multiple of `n`.
    pub fn batch(self, n: usize) -> Result<Iter<'a, Vec<A>>, Error> {
        match combinators::batch(self, n) {
            Ok(batches) => Ok(Iter::new(batches)),
            Err(err) => {
                log::debug!("rejected batch: {}", err);
                Err(err.into())
            }
        }
    }

    pub fn head(&mut self) -> Option<A> {
        combinators::head(self)
    }

    /// Returns the first element without consuming it: the next pull yields
    /// it again.
    pub fn peek(&mut self) -> Option<&A> {
        if self.peeked.is_none() {
            self.peeked = self.xs.get_mut().next();
        }
        self.peeked.as_ref()
    }

    pub fn tail(self) -> Self {
        combinators::tail(self)
    }

    /// Splits off the first element. The returned sequence continues right
    /// after it.
    pub fn uncons(self) -> (Option<A>, Self) {
        let (x, rest) = combinators::uncons(self);
        log::trace!("uncons pulled {} element(s)", usize::from(x.is_some()));
        (x, rest)
    }

    /// Eagerly pulls the first `n` elements (fewer if the source runs out)
    /// and returns them together with the lazy remainder.
    pub fn split(self, n: usize) -> (Self, Self) {
        let (prefix, rest) = combinators::split(self, n);
        log::trace!("split pulled {} of {} element(s)", prefix.len(), n);
        (Iter::new(prefix), rest)
    }

    pub fn take(self, n: usize) -> Self {
        Iter::new(combinators::take(self, n))
    }

    /// Leading elements satisfying `p`.
    ///
    /// The first element failing `p` is pulled from the source and dropped.
    /// If the source is shared (for instance through `by_ref`), its other
    /// users will not see that element.
    pub fn take_while<P>(self, p: P) -> Self
    where
        P: FnMut(&A) -> bool + 'a,
    {
        Iter::new(combinators::take_while(self, p))
    }

    pub fn skip(self, n: usize) -> Self {
        Iter::new(Iterator::skip(self, n))
    }

    pub fn chain<I>(self, other: I) -> Self
    where
        I: IntoIterator<Item = A>,
        I::IntoIter: 'a,
    {
        Iter::new(combinators::flatten(self, other))
    }

    pub fn at(&mut self, i: usize) -> Option<A> {
        self.nth(i)
    }

    pub fn pairwise(self) -> Iter<'a, (A, A)>
    where
        A: Clone,
    {
        Iter::new(combinators::pairwise(self))
    }

    pub fn enumerate(self) -> Iter<'a, (usize, A)> {
        Iter::new(Iterator::enumerate(self))
    }

    /// Collects all remaining elements. Never returns on an infinite source.
    pub fn sync(self) -> Vec<A> {
        let xs = self.collect::<Vec<_>>();
        log::debug!("synced {} element(s)", xs.len());
        xs
    }

    /// Renders up to `k` leading elements without consuming them.
    ///
    /// The elements are pulled into a buffer and then chained back in front
    /// of the remaining cursor. A trailing `...` is left out when the source
    /// is known to be exhausted: it ran out before `k` elements, or its size
    /// hint says nothing is left after them. A peeked element that does not
    /// fit in `k` counts as more to come.
    pub fn preview(&self, k: usize) -> String
    where
        A: fmt::Debug,
    {
        let buffered = self.peeked.iter().take(k).count();
        let wanted = k - buffered;
        let mut xs = self.xs.borrow_mut();
        let (previewed, rest) =
            combinators::split(mem::replace(&mut *xs, Box::new(iter::empty())), wanted);
        let exhausted = buffered == usize::from(self.peeked.is_some())
            && (previewed.len() < wanted || rest.size_hint().1 == Some(0));
        let ellipsis = match (exhausted, buffered + previewed.len()) {
            (true, _) => "",
            (false, 0) => "...",
            (false, _) => ", ...",
        };
        let res = format!(
            "Iter([{:?}{}])",
            self.peeked.iter().take(k).chain(&previewed).format(", "),
            ellipsis
        );
        log::trace!("preview re-chained {} element(s)", previewed.len());
        if previewed.is_empty() {
            *xs = rest;
        } else {
            *xs = Box::new(combinators::flatten(previewed, rest));
        }
        res
    }
}

impl<'a, A> Iterator for Iter<'a, A> {
    type Item = A;

    fn next(&mut self) -> Option<Self::Item> {
        match self.peeked.take() {
            Some(x) => Some(x),
            None => self.xs.get_mut().next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = match self.xs.try_borrow() {
            Ok(xs) => xs.size_hint(),
            Err(_) => (0, None),
        };
        if self.peeked.is_some() {
            (lower.saturating_add(1), upper.and_then(|n| n.checked_add(1)))
        } else {
            (lower, upper)
        }
    }
}

impl<'a, A: 'a> Default for Iter<'a, A> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, A: 'a> From<Vec<A>> for Iter<'a, A> {
    fn from(xs: Vec<A>) -> Self {
        Self::new(xs)
    }
}

impl<'a, A: fmt::Debug + 'a> fmt::Debug for Iter<'a, A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.preview(PREVIEW_LEN))
    }
}

/// `xs | f` is `xs.map(f)`.
impl<'a, A: 'a, B: 'a, F> BitOr<F> for Iter<'a, A>
where
    F: FnMut(A) -> B + 'a,
{
    type Output = Iter<'a, B>;

    fn bitor(self, f: F) -> Self::Output {
        self.map(f)
    }
}

impl<'a, A: 'a> Monad<'a> for Iter<'a, A> {
    type Value = A;
    type Of<B: 'a> = Iter<'a, B>;

    fn unit(value: A) -> Self {
        Iter::unit(value)
    }

    fn bind<B: 'a, F>(self, f: F) -> Iter<'a, B>
    where
        F: FnMut(A) -> Iter<'a, B> + 'a,
    {
        Iter::bind(self, f)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::{Iter, PREVIEW_LEN};
    use crate::error::Error;

    #[test]
    fn next_after_exhaustion() {
        let mut xs = Iter::new(vec![1]);
        assert_eq!(xs.next(), Some(1));
        assert_eq!(xs.next(), None);
        assert_eq!(xs.next(), None);
    }

    #[test]
    fn nothing_pulled_before_demand() {
        let pulls = Cell::new(0);
        let xs = Iter::new((0..10).inspect(|_| pulls.set(pulls.get() + 1)))
            .map(|x| x + 1)
            .filter(|x| x % 2 == 0)
            .bind(|x| vec![x, x]);
        assert_eq!(pulls.get(), 0);
        assert_eq!(xs.take(3).sync(), vec![2, 2, 4]);
        assert_eq!(pulls.get(), 4);
    }

    #[test]
    fn filter_then_map() {
        assert_eq!(
            Iter::new(vec![1, 2, 3, 4, 5])
                .filter(|x| x % 2 == 0)
                .map(|x| x * 10)
                .sync(),
            vec![20, 40]
        );
    }

    #[test]
    fn bitor_is_map() {
        assert_eq!((Iter::new(1..4) | (|x: i32| x * x)).sync(), vec![1, 4, 9]);
    }

    #[test]
    fn head_consumes() {
        let mut xs = Iter::new(vec!['a', 'b']);
        assert_eq!(xs.head(), Some('a'));
        assert_eq!(xs.head(), Some('b'));
        assert_eq!(xs.head(), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut xs = Iter::new(vec!['a', 'b']);
        assert_eq!(xs.peek(), Some(&'a'));
        assert_eq!(xs.peek(), Some(&'a'));
        assert_eq!(xs.head(), Some('a'));
        assert_eq!(xs.peek(), Some(&'b'));
        assert_eq!(xs.sync(), vec!['b']);
    }

    #[test]
    fn peeked_element_survives_combinators() {
        let mut xs = Iter::new(1..5);
        assert_eq!(xs.peek(), Some(&1));
        let (first, rest) = xs.split(2);
        assert_eq!(first.sync(), vec![1, 2]);
        assert_eq!(rest.sync(), vec![3, 4]);
    }

    #[test]
    fn uncons_and_tail() {
        let (x, rest) = Iter::new(vec![7, 8, 9]).uncons();
        assert_eq!(x, Some(7));
        assert_eq!(rest.sync(), vec![8, 9]);
        assert_eq!(Iter::new(vec![7, 8, 9]).tail().sync(), vec![8, 9]);
        assert!(Iter::<i32>::empty().tail().sync().is_empty());
    }

    #[test]
    fn split_pulls_prefix_only() {
        let pulls = Cell::new(0);
        let xs = Iter::new((0..).inspect(|_| pulls.set(pulls.get() + 1)));
        let (first, rest) = xs.split(3);
        assert_eq!(pulls.get(), 3);
        assert_eq!(first.sync(), vec![0, 1, 2]);
        assert_eq!(rest.take(2).sync(), vec![3, 4]);
        assert_eq!(pulls.get(), 5);
    }

    #[test]
    fn batch_zero_is_misuse() {
        assert!(matches!(
            Iter::new(0..3).batch(0),
            Err(Error::Combinator(combinators::Error::ZeroSize { .. }))
        ));
    }

    #[test]
    fn take_while_consumes_first_failure() {
        let mut source = 1..10;
        let small = Iter::new(source.by_ref()).take_while(|&x| x < 4).sync();
        assert_eq!(small, vec![1, 2, 3]);
        assert_eq!(source.next(), Some(5));
    }

    #[test]
    fn at_consumes_up_to_index() {
        let mut xs = Iter::new(vec![10, 20, 30, 40]);
        assert_eq!(xs.at(2), Some(30));
        assert_eq!(xs.next(), Some(40));
        assert_eq!(Iter::new(vec![10, 20, 30, 40]).at(5), None);
    }

    #[test]
    fn skip_and_chain() {
        assert_eq!(
            Iter::new(0..5).skip(3).chain(vec![9]).sync(),
            vec![3, 4, 9]
        );
    }

    #[test]
    fn debug_preview_replays() {
        let xs = Iter::new(1..=7);
        assert_eq!(format!("{:?}", xs), "Iter([1, 2, 3, 4, 5, ...])");
        assert_eq!(format!("{:?}", xs), "Iter([1, 2, 3, 4, 5, ...])");
        assert_eq!(xs.sync(), vec![1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn debug_preview_short_source() {
        assert_eq!(format!("{:?}", Iter::new(vec![1, 2])), "Iter([1, 2])");
        assert_eq!(format!("{:?}", Iter::<u8>::empty()), "Iter([])");
        assert_eq!(Iter::new(0..).preview(0), "Iter([...])");
    }

    #[test]
    fn preview_knows_when_source_is_spent() {
        assert_eq!(Iter::<u8>::empty().preview(0), "Iter([])");
        assert_eq!(Iter::new(vec![1, 2, 3]).preview(3), "Iter([1, 2, 3])");
        assert_eq!(Iter::new(vec![1, 2, 3]).preview(2), "Iter([1, 2, ...])");

        let mut xs = Iter::new(vec![7]);
        xs.peek();
        assert_eq!(xs.preview(0), "Iter([...])");
        assert_eq!(xs.preview(1), "Iter([7])");
    }

    #[test]
    fn preview_after_peek() {
        let mut xs = Iter::new(1..=PREVIEW_LEN + 1);
        assert_eq!(xs.peek(), Some(&1));
        assert_eq!(xs.preview(3), "Iter([1, 2, 3, ...])");
        assert_eq!(xs.sync(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn preview_pulls_only_k() {
        let pulls = Cell::new(0);
        let xs = Iter::new((0..).inspect(|_| pulls.set(pulls.get() + 1)));
        assert_eq!(xs.preview(2), "Iter([0, 1, ...])");
        assert_eq!(pulls.get(), 2);
        assert_eq!(xs.take(3).sync(), vec![0, 1, 2]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn size_hint_includes_peeked() {
        let mut xs = Iter::new(vec![1, 2, 3]);
        xs.peek();
        assert_eq!(xs.size_hint(), (3, Some(3)));
    }
}
