use std::fmt;

use crate::types::{Int, Var};

/// Variable table. Keys keep the `#` sigil; slots are zero-initialized
/// when a variable is first classified and are never deleted during a run.
pub type Env = fnv::FnvHashMap<Var, Int>;

/// A single slot in the flat instruction stream. Control opcodes carry no
/// payload of their own; their operands follow as separate `Literal` slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    Push,
    Pop,
    Sum,
    Sub,
    Exit,
    Print,
    Read,
    Literal(Literal),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Display text with no further interpretation.
    Printable(String),
    /// A `#`-prefixed variable name, sigil included.
    Variable(Var),
    /// Numeric text; parsed at the point of use.
    Measurable(String),
}

impl Literal {
    pub fn value(&self) -> &str {
        match self {
            Literal::Printable(text) | Literal::Variable(text) | Literal::Measurable(text) => text,
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instruction::Push => f.write_str("PUSH"),
            Instruction::Pop => f.write_str("POP"),
            Instruction::Sum => f.write_str("SUM"),
            Instruction::Sub => f.write_str("SUB"),
            Instruction::Exit => f.write_str("EXIT"),
            Instruction::Print => f.write_str("PRINT"),
            Instruction::Read => f.write_str("READ"),
            Instruction::Literal(literal) => f.write_str(literal.value()),
        }
    }
}

#[derive(Debug, PartialEq)]
pub struct Program {
    pub(in crate::vm) instructions: Vec<Instruction>,
    pub(in crate::vm) variables: Env,
}

impl Program {
    pub fn instructions(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter()
    }

    pub fn variables(&self) -> &Env {
        &self.variables
    }
}
