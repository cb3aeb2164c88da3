use std::marker::PhantomData;

use crate::Idx;

/// Like [`Iterator::enumerate`], but yields typed indices starting at an
/// arbitrary position.
///
/// The position is tracked as a `usize`, so enumerating exactly
/// `I::MAX + 1` elements is fine. Only yielding an index past `I::MAX`
/// panics, see [`Idx::from_usize`].
pub struct IdxEnumerate<I, IT> {
    pos: usize,
    base_iter: IT,
    _phantom: PhantomData<fn() -> I>,
}

impl<I: Idx, IT: Iterator> IdxEnumerate<I, IT> {
    pub fn new(pos: I, base_iter: impl IntoIterator<IntoIter = IT>) -> Self {
        Self {
            pos: pos.into_usize(),
            base_iter: base_iter.into_iter(),
            _phantom: PhantomData,
        }
    }
    /// The index that the next yielded element will receive.
    ///
    /// # Panics
    /// If that index does not fit into `I`.
    pub fn pos(&self) -> I {
        I::from_usize(self.pos)
    }
    /// [`IdxEnumerate::pos`], but `None` instead of panicking.
    pub fn checked_pos(&self) -> Option<I> {
        I::checked_from_usize(self.pos)
    }
    pub fn pos_usize(&self) -> usize {
        self.pos
    }
}

impl<I: Idx, IT: Iterator> Iterator for IdxEnumerate<I, IT> {
    type Item = (I, IT::Item);

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.base_iter.next()?;
        let idx = I::from_usize(self.pos);
        self.pos += 1;
        Some((idx, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.base_iter.size_hint()
    }

    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.base_iter.count()
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        let v = self.base_iter.nth(n)?;
        let idx = self.pos + n;
        self.pos = idx + 1;
        Some((I::from_usize(idx), v))
    }
}

impl<I: Idx, IT: ExactSizeIterator> ExactSizeIterator for IdxEnumerate<I, IT> {}
