//! The grep-like command-line driver.
//!
//! Expanded from `original_source/grep.c`'s minimal "read a line, match,
//! puts on success" loop (spec.md §6.3): this adds multi-file iteration,
//! `-d` disassembly and `-o FORMAT` capture substitution, none of which the
//! one-pattern-from-argv/stdin-only original has. Argument parsing is done
//! by hand, the way the teacher's `main.rs` REPL reads its own input,
//! rather than via a CLI-parsing crate (spec.md §8: no crate is introduced
//! here the teacher doesn't already reach for).

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::debug;
use crate::regex::Regex;
use crate::util::Captures;

pub const USAGE: &str = "usage: regexvm [-d] [-o FORMAT] PATTERN [FILE...]";

pub struct Options {
    pub disassemble: bool,
    pub output_format: Option<Vec<u8>>,
    pub pattern: Vec<u8>,
    pub files: Vec<String>,
}

/// Parses driver arguments (excluding argv[0]). Returns a usage-error
/// message on malformed input.
pub fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Options, String> {
    let mut disassemble = false;
    let mut output_format = None;
    let mut rest: Vec<String> = Vec::new();

    let mut it = args.into_iter();
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "-d" => disassemble = true,
            "-o" => {
                let fmt = it.next().ok_or("-o requires an argument")?;
                output_format = Some(fmt.into_bytes());
            }
            "--" => {
                rest.extend(it);
                break;
            }
            _ => rest.push(arg),
        }
    }

    let mut rest = rest.into_iter();
    let pattern = rest.next().ok_or(USAGE)?.into_bytes();
    let files: Vec<String> = rest.collect();

    Ok(Options {
        disassemble,
        output_format,
        pattern,
        files,
    })
}

/// Runs the driver, writing matches to `stdout` and diagnostics to
/// `stderr`. Returns the process exit code (spec.md §6.3): 0 if any line
/// matched anywhere, 1 if the pattern compiled but nothing matched, 2 on
/// usage error, compile failure, or an I/O error on any file.
pub fn run(options: &Options, stdout: &mut impl Write, stderr: &mut impl Write) -> i32 {
    let regex = match Regex::new(&options.pattern) {
        Ok(r) => r,
        Err(e) => {
            let _ = writeln!(stderr, "regexvm: {e}");
            return 2;
        }
    };

    if options.disassemble {
        let _ = debug::disassemble(regex.program(), stderr);
    }

    let mut any_match = false;
    let mut any_error = false;

    if options.files.is_empty() {
        let stdin = io::stdin();
        run_source(&regex, stdin.lock(), options, stdout, &mut any_match, &mut any_error);
    } else {
        for name in &options.files {
            if name == "-" {
                let stdin = io::stdin();
                run_source(&regex, stdin.lock(), options, stdout, &mut any_match, &mut any_error);
                continue;
            }
            match File::open(name) {
                Ok(f) => {
                    run_source(
                        &regex,
                        BufReader::new(f),
                        options,
                        stdout,
                        &mut any_match,
                        &mut any_error,
                    );
                }
                Err(e) => {
                    let _ = writeln!(stderr, "regexvm: {name}: {e}");
                    any_error = true;
                }
            }
        }
    }

    if any_error {
        2
    } else if any_match {
        0
    } else {
        1
    }
}

fn run_source(
    regex: &Regex,
    mut source: impl BufRead,
    options: &Options,
    stdout: &mut impl Write,
    any_match: &mut bool,
    any_error: &mut bool,
) {
    let mut line = Vec::new();
    loop {
        line.clear();
        match source.read_until(b'\n', &mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => {
                *any_error = true;
                break;
            }
        }
        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if let Some(captures) = regex.find_captures(&line) {
            *any_match = true;
            match &options.output_format {
                Some(format) => {
                    let rendered = render_format(format, &captures);
                    let _ = stdout.write_all(&rendered);
                    let _ = stdout.write_all(b"\n");
                }
                None => {
                    let _ = stdout.write_all(&line);
                    let _ = stdout.write_all(b"\n");
                }
            }
        }
    }
}

/// Substitutes `$0`..`$9` in `format` with the corresponding capture's
/// slice (empty if that group didn't participate), `$$` with a literal
/// `$`, and passes any other `$x` through unchanged (spec.md §6.3).
fn render_format(format: &[u8], captures: &Captures<'_>) -> Vec<u8> {
    let mut out = Vec::with_capacity(format.len());
    let mut i = 0;
    while i < format.len() {
        if format[i] == b'$' && i + 1 < format.len() {
            let next = format[i + 1];
            if next == b'$' {
                out.push(b'$');
                i += 2;
                continue;
            }
            if next.is_ascii_digit() {
                let group = (next - b'0') as usize;
                if let Some(m) = captures.get(group) {
                    out.extend_from_slice(m.as_bytes());
                }
                i += 2;
                continue;
            }
        }
        out.push(format[i]);
        i += 1;
    }
    out
}
