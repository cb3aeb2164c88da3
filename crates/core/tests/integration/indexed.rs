use rstest::rstest;
use sequtil_core::{
    for_each_n, idx_newtype, indexed_for, indexed_for_idx, indexed_for_n,
    try_for_each_n, try_indexed_for_n, SequenceError,
};

idx_newtype! {
    struct Line(u32);
}

#[test]
fn for_each_n_invokes_three_times_in_order() {
    let data = vec![10, 20, 30, 40];
    let mut calls = Vec::new();
    let mut rest = for_each_n(data.iter(), 3usize, |v, i| calls.push((*v, i)));
    assert_eq!(calls, [(10, 0), (20, 1), (30, 2)]);
    assert_eq!(rest.next(), Some(&40));
    assert_eq!(rest.next(), None);
}

#[test]
fn for_each_n_with_newtype_index() {
    let text = "first\nsecond\nthird\nfourth";
    let mut numbered = Vec::new();
    let rest = for_each_n(text.lines(), Line(2), |l, n| {
        numbered.push(format!("{n}: {l}"));
    });
    assert_eq!(numbered, ["0: first", "1: second"]);
    assert_eq!(rest.collect::<Vec<_>>(), ["third", "fourth"]);
}

#[rstest]
#[case(0, 0)]
#[case(4, 4)]
#[case(9, 9)]
fn indexed_for_returns_length(#[case] len: usize, #[case] expected: usize) {
    let v = vec![(); len];
    let mut last: Option<usize> = None;
    let count = indexed_for(&v, |_, i| {
        assert_eq!(last.map_or(0, |l| l + 1), i);
        last = Some(i);
    });
    assert_eq!(count, expected);
}

#[test]
fn indexed_for_newtype_count() {
    let count = indexed_for_idx("a\nb\nc".lines(), |_, _: Line| ());
    assert_eq!(count, Line(3));
}

#[test]
fn indexed_for_n_returns_advanced_iterator() {
    let mut sum = 0;
    let rest = indexed_for_n(1..=10, 4u8, |v| sum += v);
    assert_eq!(sum, 1 + 2 + 3 + 4);
    assert_eq!(rest.sum::<i32>(), 5 + 6 + 7 + 8 + 9 + 10);
}

#[test]
fn checked_variants_succeed_on_long_enough_input() {
    let rest = try_for_each_n([1, 2, 3], 2u32, |_, _| ()).unwrap();
    assert_eq!(rest.len(), 1);
    let rest = try_indexed_for_n([1, 2, 3], 3u32, |_| ()).unwrap();
    assert_eq!(rest.len(), 0);
}

#[test]
fn checked_variants_report_short_input() {
    let err = try_for_each_n("ab".chars(), 4usize, |_, _| ()).unwrap_err();
    assert_eq!(err, SequenceError::Exhausted { requested: 4, visited: 2 });
    assert_eq!(
        err.to_string(),
        "sequence exhausted after 2 of 4 requested elements"
    );

    let err = try_indexed_for_n(std::iter::empty::<u8>(), 1u8, |_| ())
        .unwrap_err();
    assert_eq!(err, SequenceError::exhausted(1, 0));
}
