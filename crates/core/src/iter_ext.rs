use crate::{error::SequenceError, for_each, join, Idx};

/// Method call syntax for the free functions of this crate.
pub trait SequenceExt: Iterator + Sized {
    fn join_strings(self, separator: impl AsRef<str>) -> String
    where
        Self::Item: AsRef<str>,
    {
        join::join_strings(self, separator)
    }

    fn for_each_n<I: Idx>(self, n: I, f: impl FnMut(Self::Item, I)) -> Self {
        for_each::for_each_n(self, n, f)
    }

    fn try_for_each_n<I: Idx>(
        self,
        n: I,
        f: impl FnMut(Self::Item, I),
    ) -> Result<Self, SequenceError> {
        for_each::try_for_each_n(self, n, f)
    }

    fn indexed_for(self, f: impl FnMut(Self::Item, usize)) -> usize {
        for_each::indexed_for(self, f)
    }

    fn indexed_for_n<I: Idx>(self, n: I, f: impl FnMut(Self::Item)) -> Self {
        for_each::indexed_for_n(self, n, f)
    }
}

impl<IT: Iterator> SequenceExt for IT {}
