//! Checks for the structural invariants the engine is required to hold
//! (program-size bound, class-table invariant, determinism, capture
//! disjointness), independent of any particular pattern's semantics.

use regexvm::Program;

const PATTERNS: &[&[u8]] = &[
    b"a",
    b"a*",
    b"a+?",
    b"(a|b)+",
    b"^[A-Z]+$",
    b"[^aeiou]+",
    b"(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)(k)",
    b"a??b*+?",
    b".*d",
    b"",
];

/// `compiled_size(P) <= 2*len(P) + 6`.
#[test]
fn program_size_bound() {
    for pattern in PATTERNS {
        let program = Program::compile(pattern).unwrap();
        assert!(
            program.size() <= 2 * pattern.len() + 6,
            "pattern {:?}: size {} exceeds bound {}",
            String::from_utf8_lossy(pattern),
            program.size(),
            2 * pattern.len() + 6
        );
    }
}

/// After compiling, slot 0 of the class table is forced back to zero, so
/// NUL never matches any class.
#[test]
fn class_table_invariant() {
    for pattern in PATTERNS {
        let program = Program::compile(pattern).unwrap();
        assert_eq!(program.classes().raw()[0], 0);
    }
}

/// Two runs of `exec` against the same program and input produce
/// identical captures.
#[test]
fn determinism() {
    for pattern in PATTERNS {
        let program = Program::compile(pattern).unwrap();
        for input in [b"".as_slice(), b"xabbax", b"HELLO123", b"aaaab"] {
            let mut first = [None; 20];
            let mut second = [None; 20];
            let m1 = program.exec(input, &mut first).unwrap();
            let m2 = program.exec(input, &mut second).unwrap();
            assert_eq!(m1, m2);
            assert_eq!(first, second);
        }
    }
}

/// Exceeding the 32 character-class budget is a programming-error
/// condition (spec.md §4.1, §7), not a recoverable `Result`: it panics
/// rather than handing back an `Err` a caller might quietly swallow.
#[test]
#[should_panic(expected = "more than 32 character classes")]
fn exceeding_class_budget_panics() {
    let mut pattern = Vec::new();
    for _ in 0..33 {
        pattern.extend_from_slice(b"[a]");
    }
    let _ = Program::compile(&pattern);
}

/// Every reported group has `start <= end`.
#[test]
fn capture_disjointness() {
    for pattern in PATTERNS {
        let program = Program::compile(pattern).unwrap();
        for input in [b"".as_slice(), b"xabbax", b"HELLO123", b"aaaab"] {
            let mut captures = [None; 20];
            if program.exec(input, &mut captures).unwrap() {
                for pair in captures.chunks_exact(2) {
                    if let (Some(start), Some(end)) = (pair[0], pair[1]) {
                        assert!(start <= end);
                    }
                }
            }
        }
    }
}
