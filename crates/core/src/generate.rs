use std::mem::MaybeUninit;

use arrayvec::ArrayVec;

use crate::{debug_log::log_entry, Idx};

/// Builds an array where the element at position `i` is `generator(i)`.
///
/// `generator` is invoked exactly `N` times, in ascending index order.
///
/// ### Example
/// ```
/// # use sequtil_core::generate::generate_sequence;
/// let squares: [usize; 3] = generate_sequence(|i| i * i);
/// assert_eq!(squares, [0, 1, 4]);
/// ```
pub fn generate_sequence<const N: usize, T>(
    mut generator: impl FnMut(usize) -> T,
) -> [T; N] {
    log_entry!("generate_sequence", N);
    std::array::from_fn(|i| generator(i))
}

/// [`generate_sequence`] with a typed index.
///
/// # Panics
/// If `N - 1` does not fit into `I`. This is checked before `generator` is
/// invoked for the first time.
pub fn generate_sequence_idx<I: Idx, const N: usize, T>(
    mut generator: impl FnMut(I) -> T,
) -> [T; N] {
    log_entry!("generate_sequence_idx", N);
    assert!(
        N == 0 || I::checked_from_usize(N - 1).is_some(),
        "cannot generate {} elements, the index type's max is {:?}",
        N,
        I::MAX
    );
    std::array::from_fn(|i| generator(I::from_usize(i)))
}

/// Fallible [`generate_sequence`]. Stops at the first error, dropping the
/// elements generated so far.
pub fn try_generate_sequence<const N: usize, T, E>(
    mut generator: impl FnMut(usize) -> Result<T, E>,
) -> Result<[T; N], E> {
    log_entry!("try_generate_sequence", N);
    let mut res = ArrayVec::<T, N>::new();
    for i in 0..N {
        res.push(generator(i)?);
    }
    debug_assert!(res.is_full());
    // SAFETY: the loop above pushed exactly N elements
    Ok(unsafe { res.into_inner_unchecked() })
}

/// Builds `[T; N]` in constant contexts, where closures can't be called.
///
/// The expression after `=>` is evaluated once per index, with the index
/// bound as a `usize` to the given identifier.
///
/// ### Example
/// ```
/// # use sequtil_core::const_sequence;
/// const POWERS_OF_TWO: [u32; 5] = const_sequence![i in 5 => 1 << i];
/// assert_eq!(POWERS_OF_TWO, [1, 2, 4, 8, 16]);
/// ```
#[macro_export]
macro_rules! const_sequence {
    ($i: ident in $len: expr => $value: expr) => {{
        const LEN: usize = $len;
        let mut data: [::core::mem::MaybeUninit<_>; LEN] =
            [const { ::core::mem::MaybeUninit::uninit() }; LEN];
        let mut idx: usize = 0;
        while idx < LEN {
            #[allow(unused_variables)]
            let $i: usize = idx;
            data[idx] = ::core::mem::MaybeUninit::new($value);
            idx += 1;
        }
        // SAFETY: the loop above initialized all LEN slots
        unsafe { $crate::generate::transpose_maybe_uninit(data) }
    }};
}

/// [`std::mem::MaybeUninit::transpose`] implementation in stable Rust. Replace
/// once [maybe_uninit_uninit_array_transpose](https://github.com/rust-lang/rust/issues/96097)
/// is stabilized.
///
/// # Safety
/// All elements of `v` must be initialized.
#[doc(hidden)]
#[allow(clippy::needless_pass_by_value)]
pub const unsafe fn transpose_maybe_uninit<T, const N: usize>(
    v: [MaybeUninit<T>; N],
) -> [T; N] {
    let mut res = MaybeUninit::<[T; N]>::uninit();
    let mut i = 0;
    while i < v.len() {
        unsafe {
            res.as_mut_ptr()
                .cast::<T>()
                .add(i)
                .write(v.as_ptr().add(i).read().assume_init());
        };
        i += 1;
    }
    unsafe { res.assume_init() }
}
