#![no_main]
use jsontrim::filter::{is_printable_ascii, trim_str, trim_string};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|s: String| {
    let out = trim_str(&s);
    assert!(out.chars().all(is_printable_ascii), "non-printable survived: {:?}", out);

    // Output must be a subsequence of the input.
    let mut rest = s.chars();
    for c in out.chars() {
        assert!(rest.any(|x| x == c), "{:?} is not a subsequence of {:?}", out, s);
    }

    assert_eq!(trim_str(&out), out);
    assert_eq!(trim_string(s), out);
});
