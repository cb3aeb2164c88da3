#![allow(clippy::inline_always)]

use core::{
    fmt::Debug,
    hash::Hash,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A type usable as the position counter of an indexed iteration.
///
/// Counting always starts at [`Idx::ZERO`] and advances by [`Idx::ONE`]
/// per visited element.
pub trait Idx:
    Default
    + Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Hash
    + Add<Output = Self>
    + Sub<Output = Self>
    + AddAssign
    + SubAssign
{
    const ZERO: Self;
    const ONE: Self;
    const MAX: Self;
    // We can't use `From<usize>` because e.g. u32 does not implement
    // that, and we can't implement it for it (orphan rule).
    /// # Panics
    /// If `v` is larger than [`Idx::MAX`].
    fn from_usize(v: usize) -> Self;
    fn into_usize(self) -> usize;

    /// `None` if `v` is larger than [`Idx::MAX`].
    fn checked_from_usize(v: usize) -> Option<Self> {
        if v > Self::MAX.into_usize() {
            return None;
        }
        Some(Self::from_usize(v))
    }
}

impl Idx for usize {
    const ZERO: usize = 0;
    const ONE: usize = 1;
    const MAX: usize = usize::MAX;

    #[inline(always)]
    fn into_usize(self) -> usize {
        self
    }
    #[inline(always)]
    fn from_usize(v: usize) -> Self {
        v
    }
}

macro_rules! impl_idx_for_primitive {
    ($($t: ty),*) => {$(
        impl Idx for $t {
            const ZERO: $t = 0;
            const ONE: $t = 1;
            const MAX: $t = <$t>::MAX;

            #[inline(always)]
            fn into_usize(self) -> usize {
                #![allow(clippy::cast_possible_truncation)]
                self as usize
            }
            #[inline(always)]
            fn from_usize(v: usize) -> Self {
                match <$t>::try_from(v) {
                    Ok(v) => v,
                    Err(_) => panic!(
                        "index {v} exceeds {}::MAX",
                        stringify!($t)
                    ),
                }
            }
        }
    )*};
}

impl_idx_for_primitive!(u8, u16, u32, u64);

/// Declares newtype indices usable wherever an [`Idx`] is expected.
///
/// ### Example
/// ```rust
/// # use sequtil_core::{idx_newtype, for_each::indexed_for_idx};
/// idx_newtype! {
///     pub struct StepId(u32);
/// }
///
/// let mut steps = Vec::new();
/// let count = indexed_for_idx(["a", "b"], |s, i: StepId| steps.push((i, s)));
/// assert_eq!(count, StepId(2));
/// assert_eq!(steps, [(StepId(0), "a"), (StepId(1), "b")]);
/// ```
#[macro_export]
macro_rules! idx_newtype {
    { $( $(#[$attrs: meta])* $type_vis: vis struct $name: ident ($base_vis: vis $base_type: path); )* } => {$(
        $(#[$attrs])*
        #[derive(Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[repr(transparent)]
        $type_vis struct $name ($base_vis $base_type);

        impl $crate::Idx for $name {
            const ZERO: Self = $name(<$base_type as $crate::Idx>::ZERO);
            const ONE: Self = $name(<$base_type as $crate::Idx>::ONE);
            const MAX: Self = $name(<$base_type as $crate::Idx>::MAX);
            #[inline(always)]
            fn into_usize(self) -> usize {
                <$base_type as $crate::Idx>::into_usize(self.0)
            }
            #[inline(always)]
            fn from_usize(v: usize) -> Self {
                $name(<$base_type as $crate::Idx>::from_usize(v))
            }
        }
        impl ::core::convert::From<usize> for $name {
            #[inline(always)]
            fn from(v: usize) -> $name {
                $name(<$base_type as $crate::Idx>::from_usize(v))
            }
        }
        impl ::core::convert::From<$name> for usize {
            #[inline(always)]
            fn from(v: $name) -> usize {
                <$base_type as $crate::Idx>::into_usize(v.0)
            }
        }
        impl ::core::fmt::Debug for $name {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(&self.0, f)
            }
        }
        impl ::core::fmt::Display for $name {
            #[inline]
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.0, f)
            }
        }
        impl ::core::ops::Add for $name {
            type Output = Self;
            #[inline]
            fn add(self, other: Self) -> Self {
                $name(self.0 + other.0)
            }
        }
        impl ::core::ops::Sub for $name {
            type Output = Self;
            #[inline]
            fn sub(self, other: Self) -> Self {
                $name(self.0 - other.0)
            }
        }
        impl ::core::ops::AddAssign for $name {
            #[inline]
            fn add_assign(&mut self, other: Self) {
                self.0 += other.0;
            }
        }
        impl ::core::ops::SubAssign for $name {
            #[inline]
            fn sub_assign(&mut self, other: Self) {
                self.0 -= other.0;
            }
        }
    )*};
}
