use std::fmt::{Display, Write};

use crate::debug_log::log_entry;

pub const DEFAULT_SEPARATOR: &str = ", ";

/// Joins a sequence of strings, separating consecutive elements with
/// `separator`.
///
/// No separator is emitted before the first or after the last element,
/// but every pair of neighbours is separated, even if one of them is empty.
///
/// ### Example
/// ```
/// # use sequtil_core::join::join_strings;
/// assert_eq!(join_strings(["a", "b", "c"], ", "), "a, b, c");
/// assert_eq!(join_strings(["", "a"], "-"), "-a");
/// assert_eq!(join_strings(Vec::<String>::new(), ", "), "");
/// ```
pub fn join_strings<S: AsRef<str>>(
    strings: impl IntoIterator<Item = S>,
    separator: impl AsRef<str>,
) -> String {
    log_entry!("join_strings");
    let separator = separator.as_ref();
    let mut res = String::new();
    for (i, s) in strings.into_iter().enumerate() {
        if i != 0 {
            res.push_str(separator);
        }
        res.push_str(s.as_ref());
    }
    res
}

/// [`join_strings`] using [`DEFAULT_SEPARATOR`].
pub fn join_strings_default<S: AsRef<str>>(
    strings: impl IntoIterator<Item = S>,
) -> String {
    join_strings(strings, DEFAULT_SEPARATOR)
}

/// Appends the joined strings to `target` instead of allocating a new
/// `String`.
pub fn join_strings_into<S: AsRef<str>>(
    target: &mut impl Write,
    strings: impl IntoIterator<Item = S>,
    separator: impl AsRef<str>,
) -> std::fmt::Result {
    log_entry!("join_strings_into");
    let separator = separator.as_ref();
    let mut first = true;
    for s in strings {
        if !first {
            target.write_str(separator)?;
        }
        first = false;
        target.write_str(s.as_ref())?;
    }
    Ok(())
}

/// Like [`join_strings_into`], but formats each element through its
/// [`Display`] impl. Errors returned by the element's impl are propagated.
pub fn join_display_into<D: Display>(
    target: &mut impl Write,
    values: impl IntoIterator<Item = D>,
    separator: impl AsRef<str>,
) -> std::fmt::Result {
    log_entry!("join_display_into");
    let separator = separator.as_ref();
    for (i, v) in values.into_iter().enumerate() {
        if i != 0 {
            target.write_str(separator)?;
        }
        write!(target, "{v}")?;
    }
    Ok(())
}

/// Like [`join_strings`], but formats each element through its
/// [`Display`] impl.
///
/// Writing into the `String` itself can't fail, so an error means one of
/// the elements' [`Display`] impls reported one.
pub fn join_display<D: Display>(
    values: impl IntoIterator<Item = D>,
    separator: impl AsRef<str>,
) -> Result<String, std::fmt::Error> {
    let mut res = String::new();
    join_display_into(&mut res, values, separator)?;
    Ok(res)
}

pub fn join_byte_strings<B: AsRef<[u8]>>(
    strings: impl IntoIterator<Item = B>,
    separator: &[u8],
) -> Vec<u8> {
    log_entry!("join_byte_strings");
    let mut res = Vec::new();
    for (i, s) in strings.into_iter().enumerate() {
        if i != 0 {
            res.extend_from_slice(separator);
        }
        res.extend_from_slice(s.as_ref());
    }
    res
}
