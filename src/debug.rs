//! Disassembler: a one-line-per-instruction dump of a compiled [`Program`].
//!
//! Grounded on `original_source/debug.c`'s `printprogram` — same
//! address-relative addressing (`pc - pc0`, printed `%03d`) and one mnemonic
//! per instruction — extended per spec.md §6 to reconstruct a `CharSet`'s
//! members from the bitmask instead of printing the placeholder `[...]` the
//! original does, since the original never needed to (it printed the AST's
//! own class-range text, which this engine no longer keeps around after
//! parsing). spec.md §6 calls for both the positive (`[abc]`/`[a-z]`) and
//! negated (`[^abc]`) forms; a class like `[^aeiou]` sets nearly every byte
//! 1..=255, so printing it as a run of positive ranges would be technically
//! correct but unreadable — [`format_class`] prints whichever of a class or
//! its complement has fewer members, negating when the complement wins.

use std::io::{self, Write};

use crate::program::{Inst, Program};

/// Writes one line per instruction of `program` to `out`.
pub fn disassemble<W: Write>(program: &Program, out: &mut W) -> io::Result<()> {
    for (addr, inst) in program.insts().iter().enumerate() {
        write!(out, "{addr:03} ")?;
        match *inst {
            Inst::Char(c) => writeln!(out, "Char {}", c as char)?,
            Inst::AnyChar => writeln!(out, "AnyChar")?,
            Inst::CharSet(mask) => writeln!(out, "CharSet {}", format_class(program, mask))?,
            Inst::Match => writeln!(out, "Match")?,
            Inst::MatchEnd => writeln!(out, "MatchEnd")?,
            Inst::Jump(x) => writeln!(out, "Jump {x:03}")?,
            Inst::Split(x, y) => writeln!(out, "Split {x:03} {y:03}")?,
            Inst::Save(i) => writeln!(out, "Save {i}")?,
        }
    }
    Ok(())
}

/// Reconstructs a class's membership as `[abc]`/`[a-z]`, or as the negated
/// `[^abc]`/`[^a-z]` if fewer bytes are excluded than included. Bytes
/// 1..=255 are scanned; byte 0 never belongs to any class (spec.md's
/// charclass invariant), so it never appears in either form.
fn format_class(program: &Program, mask: u32) -> String {
    let table = program.classes().raw();
    let is_member = |b: u8| table[b as usize] & mask != 0;
    let member_count = (1..=255u16).filter(|&b| is_member(b as u8)).count();

    if member_count * 2 > 255 {
        format!("[^{}]", format_ranges(|b| !is_member(b)))
    } else {
        format!("[{}]", format_ranges(is_member))
    }
}

/// Collapses the bytes 1..=255 for which `is_member` holds into `lo-hi`
/// ranges, the way a hand-written class would have been written.
fn format_ranges(is_member: impl Fn(u8) -> bool) -> String {
    let mut s = String::new();
    let mut b: u32 = 1;
    while b <= 255 {
        if is_member(b as u8) {
            let lo = b;
            let mut hi = b;
            while hi + 1 <= 255 && is_member((hi + 1) as u8) {
                hi += 1;
            }
            push_byte(&mut s, lo as u8);
            if hi > lo + 1 {
                s.push('-');
                push_byte(&mut s, hi as u8);
            } else if hi == lo + 1 {
                push_byte(&mut s, hi as u8);
            }
            b = hi + 1;
        } else {
            b += 1;
        }
    }
    s
}

fn push_byte(s: &mut String, b: u8) {
    if b.is_ascii_graphic() || b == b' ' {
        s.push(b as char);
    } else {
        s.push_str(&format!("\\x{b:02x}"));
    }
}
