use crate::types::parse;
use crate::vm::{Instruction, Literal};

pub const SIGIL: char = '#';

/// Turns one raw token into a typed instruction. Precedence: exact reserved
/// opcode spelling, then sigil-prefixed variable, then numeric literal, then
/// printable fallback. No token is ever rejected here.
pub fn classify(token: &str) -> Instruction {
    match token {
        "PUSH" => Instruction::Push,
        "POP" => Instruction::Pop,
        "SUM" => Instruction::Sum,
        "SUB" => Instruction::Sub,
        "EXIT" => Instruction::Exit,
        "PRINT" => Instruction::Print,
        "READ" => Instruction::Read,
        _ if token.starts_with(SIGIL) => Instruction::Literal(Literal::Variable(token.into())),
        _ if parse::is_number(token) => Instruction::Literal(Literal::Measurable(token.into())),
        _ => Instruction::Literal(Literal::Printable(token.into())),
    }
}
