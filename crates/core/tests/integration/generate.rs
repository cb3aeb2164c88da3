use sequtil_core::{
    const_sequence, generate_sequence, generate_sequence_idx, idx_newtype,
    try_generate_sequence,
};

idx_newtype! {
    struct Slot(u8);
}

const LOOKUP: [u64; 8] = const_sequence![i in 8 => (i as u64) * 3 + 1];

#[test]
fn generated_element_matches_generator() {
    let f = |i: usize| i * i;
    let res: [usize; 16] = generate_sequence(f);
    for (i, v) in res.iter().enumerate() {
        assert_eq!(*v, f(i));
    }
}

#[test]
fn generate_with_newtype_index() {
    let res: [Slot; 4] = generate_sequence_idx(|s: Slot| s + Slot(1));
    assert_eq!(res, [Slot(1), Slot(2), Slot(3), Slot(4)]);
}

#[test]
fn try_generate_propagates_parse_errors() {
    let inputs = ["1", "2", "x"];
    let res: Result<[i32; 3], _> =
        try_generate_sequence(|i| inputs[i].parse::<i32>());
    assert!(res.is_err());

    let res: Result<[i32; 2], _> =
        try_generate_sequence(|i| inputs[i].parse::<i32>());
    assert_eq!(res, Ok([1, 2]));
}

#[test]
fn const_lookup_table() {
    assert_eq!(LOOKUP, [1, 4, 7, 10, 13, 16, 19, 22]);
    let runtime: [u64; 8] = generate_sequence(|i| (i as u64) * 3 + 1);
    assert_eq!(LOOKUP, runtime);
}
