use regexvm::Regex;

/// Compiles `pattern` and matches it against `input`, asserting that the
/// captured group spans (as `(start, end)` byte offsets, `None` for a
/// group that didn't participate) equal `expected`. `expected = None` means
/// the pattern must not match at all.
pub fn assert_captures(pattern: &[u8], input: &[u8], expected: Option<&[Option<(usize, usize)>]>) {
    let re = Regex::new(pattern).unwrap_or_else(|e| panic!("failed to compile {pattern:?}: {e}"));
    let got = re.find_captures(input);
    match (got, expected) {
        (None, None) => {}
        (Some(caps), Some(expected)) => {
            let got_spans: Vec<Option<(usize, usize)>> = (0..expected.len())
                .map(|i| caps.get(i).map(|m| (m.span.from, m.span.to)))
                .collect();
            assert_eq!(
                got_spans,
                expected,
                "capture mismatch for pattern {:?} input {:?}",
                String::from_utf8_lossy(pattern),
                String::from_utf8_lossy(input)
            );
        }
        (None, Some(_)) => panic!(
            "expected a match for pattern {:?} input {:?}, got none",
            String::from_utf8_lossy(pattern),
            String::from_utf8_lossy(input)
        ),
        (Some(caps), None) => panic!(
            "expected no match for pattern {:?} input {:?}, got {:?}",
            String::from_utf8_lossy(pattern),
            String::from_utf8_lossy(input),
            (caps.group0().span.from, caps.group0().span.to)
        ),
    }
}
