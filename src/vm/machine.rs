use thiserror::Error;

use super::program::{Instruction, Literal, Program};
use crate::io::{InputStream, OutputStream};
use crate::types::{Int, Var};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExecutionError {
    #[error("program counter {pc} ran past the end of the program (missing EXIT?)")]
    OutOfBounds { pc: usize },

    #[error("{op} on a stack with too few values")]
    StackUnderflow { op: &'static str },

    #[error("variable '{0}' is not defined")]
    UndefinedVariable(Var),

    #[error("input line '{0}' is not an integer")]
    InputParse(String),

    #[error("end of input while executing READ")]
    EndOfInput,

    #[error("{op} operand at {pc} is not usable")]
    BadOperand { op: &'static str, pc: usize },
}

type Result<T> = std::result::Result<T, ExecutionError>;

type Stack = Vec<Int>;

pub struct Machine<'a, I, O> {
    input: &'a mut I,
    output: &'a mut O,
    stack: Stack,
}

impl<I, O> Machine<'_, I, O>
where
    I: InputStream,
    O: OutputStream,
{
    pub fn new<'a>(input: &'a mut I, output: &'a mut O) -> Machine<'a, I, O> {
        Machine {
            input,
            output,
            stack: Stack::new(),
        }
    }

    pub fn push(&mut self, value: Int) {
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<Int> {
        self.stack.pop()
    }

    pub fn run(&mut self, program: &mut Program) -> Result<()> {
        let mut pc = 0;
        loop {
            let instruction = fetch(&program.instructions, pc)?;

            // Operands live in the slots after the opcode; each branch
            // below advances past the ones it consumes.
            pc += 1;

            match instruction {
                // The only normal termination; running off the end of the
                // stream is OutOfBounds instead.
                Instruction::Exit => return Ok(()),
                Instruction::Print => {
                    let operand = operand(&program.instructions, pc, "PRINT")?;
                    pc += 1;

                    match operand {
                        Literal::Printable(text) | Literal::Measurable(text) => {
                            self.output.write(text)
                        }
                        Literal::Variable(name) => {
                            let value = program
                                .variables
                                .get(name)
                                .copied()
                                .ok_or_else(|| ExecutionError::UndefinedVariable(name.clone()))?;
                            self.output.write(&value.to_string());
                        }
                    }
                }
                Instruction::Push => {
                    let operand = operand(&program.instructions, pc, "PUSH")?;

                    // The builder only lets integer literals through here.
                    let value = match operand {
                        Literal::Measurable(text) => text
                            .parse::<Int>()
                            .map_err(|_| ExecutionError::BadOperand { op: "PUSH", pc })?,
                        _ => return Err(ExecutionError::BadOperand { op: "PUSH", pc }),
                    };
                    pc += 1;

                    self.push(value);
                }
                Instruction::Sum => {
                    let name = destination(&program.instructions, pc, "SUM")?.clone();
                    pc += 1;

                    let (first, second) = self.pop_two("SUM")?;
                    program.variables.insert(name, second + first);
                }
                Instruction::Sub => {
                    let name = destination(&program.instructions, pc, "SUB")?.clone();
                    pc += 1;

                    // The first pop is the subtrahend: PUSH 10 PUSH 4 SUB
                    // stores 10 - 4.
                    let (first, second) = self.pop_two("SUB")?;
                    program.variables.insert(name, second - first);
                }
                Instruction::Read => {
                    let line = self.input.read().ok_or(ExecutionError::EndOfInput)?;
                    let value = line
                        .trim()
                        .parse::<Int>()
                        .map_err(|_| ExecutionError::InputParse(line.trim().to_string()))?;
                    self.push(value);
                }
                Instruction::Pop => {
                    // Pop-and-discard; POP has no other observable effect.
                    self.pop()
                        .ok_or(ExecutionError::StackUnderflow { op: "POP" })?;
                }
                // A literal in opcode position is a stray operand; skip it.
                Instruction::Literal(_) => {}
            }
        }
    }

    fn pop_two(&mut self, op: &'static str) -> Result<(Int, Int)> {
        let first = self.pop().ok_or(ExecutionError::StackUnderflow { op })?;
        let second = self.pop().ok_or(ExecutionError::StackUnderflow { op })?;
        Ok((first, second))
    }
}

fn fetch(instructions: &[Instruction], pc: usize) -> Result<&Instruction> {
    instructions.get(pc).ok_or(ExecutionError::OutOfBounds { pc })
}

fn operand<'p>(instructions: &'p [Instruction], pc: usize, op: &'static str) -> Result<&'p Literal> {
    match fetch(instructions, pc)? {
        Instruction::Literal(literal) => Ok(literal),
        _ => Err(ExecutionError::BadOperand { op, pc }),
    }
}

fn destination<'p>(
    instructions: &'p [Instruction],
    pc: usize,
    op: &'static str,
) -> Result<&'p Var> {
    match operand(instructions, pc, op)? {
        Literal::Variable(name) => Ok(name),
        _ => Err(ExecutionError::BadOperand { op, pc }),
    }
}
