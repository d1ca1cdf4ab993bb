//! Linear bytecode compiler.
//!
//! Grounded on `original_source/compiler.c`'s `compiletree`, generalized to
//! the push-then-backpatch idiom the teacher uses in
//! `thompson::bytecode::Compiler` (`empty_split`/`set_split`/`empty_jump`/
//! `set_jump` there; inlined here as plain index bookkeeping): rather than
//! doing pointer arithmetic against a pre-sized buffer the way the original
//! C does, each forward-referencing instruction is pushed as a placeholder
//! `Split`/`Jump` and patched once its target address is known.
//!
//! Emits at most `2*len(pattern)+6` instructions (spec.md §3), proved the
//! same way the original is: every AST node that corresponds to a pattern
//! byte contributes at most two instructions, and the fixed prologue/
//! epilogue (the `.*?` preamble plus the outermost `Save`/`Save`/`Match`)
//! contributes the rest.

use crate::ast::{Arena, AstNode, NodeId};
use crate::charclass::CharClasses;
use crate::program::{Inst, Program};

/// Groups beyond $9 still participate in matching but are never captured
/// (spec.md §4.2).
const MAX_SAVE_GROUP: usize = 9;

pub struct Compiler {
    insts: Vec<Inst>,
    next_save_group: usize,
    matchend: bool,
}

impl Compiler {
    /// Compiles an already-parsed AST into a [`Program`]. Cannot fail: every
    /// condition that could abort compilation (the 32-class budget) is
    /// enforced earlier, during parsing.
    pub fn compile(arena: &Arena, root: NodeId, classes: CharClasses) -> Program {
        let mut c = Compiler {
            insts: Vec::new(),
            next_save_group: 0,
            matchend: false,
        };
        c.emit(arena, root);
        c.insts.push(if c.matchend {
            Inst::MatchEnd
        } else {
            Inst::Match
        });
        Program::new(c.insts, classes)
    }

    #[inline]
    fn pc(&self) -> usize {
        self.insts.len()
    }

    #[inline]
    fn push(&mut self, inst: Inst) -> usize {
        self.insts.push(inst);
        self.pc() - 1
    }

    /// Compiles one AST node. `Concat`'s right child is walked in a loop
    /// instead of recursed into so that a long chain of concatenated
    /// literals doesn't need a correspondingly deep call stack.
    fn emit(&mut self, arena: &Arena, mut id: NodeId) {
        loop {
            match arena.get(id) {
                AstNode::Epsilon => return,
                AstNode::Dollar => {
                    self.matchend = true;
                    return;
                }
                AstNode::OneChar(c) => {
                    self.push(Inst::Char(*c));
                    return;
                }
                AstNode::AnyChar => {
                    self.push(Inst::AnyChar);
                    return;
                }
                AstNode::Charset { mask } => {
                    self.push(Inst::CharSet(*mask));
                    return;
                }
                AstNode::Concat(x, y) => {
                    let (x, y) = (*x, *y);
                    self.emit(arena, x);
                    id = y;
                }
                AstNode::Either(x, y) => {
                    let (x, y) = (*x, *y);
                    let split = self.push(Inst::Split(0, 0));
                    let x_start = self.pc();
                    self.emit(arena, x);
                    let jump = self.push(Inst::Jump(0));
                    let y_start = self.pc();
                    self.emit(arena, y);
                    let end = self.pc();
                    self.insts[split] = Inst::Split(x_start, y_start);
                    self.insts[jump] = Inst::Jump(end);
                    return;
                }
                AstNode::Optional(x) => {
                    let x = *x;
                    let split = self.push(Inst::Split(0, 0));
                    let x_start = self.pc();
                    self.emit(arena, x);
                    let end = self.pc();
                    self.insts[split] = Inst::Split(x_start, end);
                    return;
                }
                AstNode::WeakOpt(x) => {
                    let x = *x;
                    let split = self.push(Inst::Split(0, 0));
                    let x_start = self.pc();
                    self.emit(arena, x);
                    let end = self.pc();
                    self.insts[split] = Inst::Split(end, x_start);
                    return;
                }
                AstNode::Star(x) => {
                    let x = *x;
                    let l = self.push(Inst::Split(0, 0));
                    let body = self.pc();
                    self.emit(arena, x);
                    self.push(Inst::Jump(l));
                    let end = self.pc();
                    self.insts[l] = Inst::Split(body, end);
                    return;
                }
                AstNode::WeakStar(x) => {
                    let x = *x;
                    let l = self.push(Inst::Split(0, 0));
                    let body = self.pc();
                    self.emit(arena, x);
                    self.push(Inst::Jump(l));
                    let end = self.pc();
                    self.insts[l] = Inst::Split(end, body);
                    return;
                }
                AstNode::Plus(x) => {
                    let x = *x;
                    let l = self.pc();
                    self.emit(arena, x);
                    let split = self.push(Inst::Split(0, 0));
                    let end = self.pc();
                    self.insts[split] = Inst::Split(l, end);
                    return;
                }
                AstNode::WeakPlus(x) => {
                    let x = *x;
                    let l = self.pc();
                    self.emit(arena, x);
                    let split = self.push(Inst::Split(0, 0));
                    let end = self.pc();
                    self.insts[split] = Inst::Split(end, l);
                    return;
                }
                AstNode::Capture(x) => {
                    let x = *x;
                    if self.next_save_group > MAX_SAVE_GROUP {
                        id = x;
                        continue;
                    }
                    let k = self.next_save_group;
                    self.next_save_group += 1;
                    self.push(Inst::Save(2 * k));
                    self.emit(arena, x);
                    self.push(Inst::Save(2 * k + 1));
                    return;
                }
            }
        }
    }
}
