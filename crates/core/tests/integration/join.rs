use rstest::rstest;
use sequtil_core::{
    join_display, join_strings, join_strings_default, join_strings_into,
    SequenceExt, DEFAULT_SEPARATOR,
};

#[rstest]
#[case(&["a", "b", "c"], "a, b, c")]
#[case(&[], "")]
#[case(&["x"], "x")]
fn join_with_default_separator(#[case] input: &[&str], #[case] output: &str) {
    assert_eq!(join_strings_default(input), output);
    assert_eq!(join_strings(input, DEFAULT_SEPARATOR), output);
}

#[test]
fn join_reproduces_concatenation() {
    let words = ["the", "quick", "brown", "fox"];
    let separator = "::";
    let mut expected = String::new();
    for (i, w) in words.iter().enumerate() {
        if i > 0 {
            expected += separator;
        }
        expected += w;
    }
    assert_eq!(join_strings(words, separator), expected);
    assert_eq!(
        join_strings(words, separator).matches(separator).count(),
        words.len() - 1
    );
}

#[test]
fn join_does_not_consume_borrowed_input() {
    let names = vec!["ada".to_owned(), "grace".to_owned()];
    let first = join_strings(&names, " & ");
    let second = join_strings(&names, " & ");
    assert_eq!(first, second);
    assert_eq!(names.len(), 2);
}

#[test]
fn join_lazy_iterator() {
    let res = (1..=3).map(|i| "#".repeat(i)).join_strings(" ");
    assert_eq!(res, "# ## ###");
}

#[test]
fn join_into_formatter() {
    struct Csv<'a>(&'a [&'a str]);
    impl std::fmt::Display for Csv<'_> {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            join_strings_into(f, self.0, ",")
        }
    }
    assert_eq!(Csv(&["1", "2", "3"]).to_string(), "1,2,3");
}

#[test]
fn join_display_nested() {
    let rows = [[1, 2], [3, 4]];
    let res = join_display(
        rows.iter().map(|r| join_display(r, " ").unwrap()),
        "\n",
    );
    assert_eq!(res, Ok("1 2\n3 4".to_owned()));
}
