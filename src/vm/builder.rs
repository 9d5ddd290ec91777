use thiserror::Error;

use super::program::{Env, Instruction, Literal, Program};
use crate::lexer;
use crate::types::Int;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("{op} at instruction {at} has no operand")]
    MissingOperand { op: &'static str, at: usize },

    #[error("PUSH operand '{found}' is not an integer literal")]
    BadPushOperand { found: String },

    #[error("{op} destination '{found}' is not a variable")]
    BadStoreOperand { op: &'static str, found: String },

    #[error("PRINT operand '{found}' is not a literal")]
    BadPrintOperand { found: String },
}

type Result<T> = std::result::Result<T, BuildError>;

pub struct Builder {
    instructions: Vec<Instruction>,
    variables: Env,
}

impl Builder {
    pub fn new() -> Self {
        Builder {
            instructions: Vec::new(),
            variables: Env::default(),
        }
    }

    pub fn build(mut self, tokens: impl IntoIterator<Item = String>) -> Result<Program> {
        for token in tokens {
            self.append(&token);
        }

        self.validate()?;

        Ok(Program {
            instructions: self.instructions,
            variables: self.variables,
        })
    }

    fn append(&mut self, token: &str) {
        let instruction = lexer::classify(token);

        if let Instruction::Literal(Literal::Variable(name)) = &instruction {
            // Idempotent: re-declaring a variable keeps its current value.
            self.variables.entry(name.clone()).or_insert(0);
        }

        self.instructions.push(instruction);
    }

    // Operand-shape checks. PUSH needs an integer literal, SUM/SUB a
    // destination variable and PRINT any literal; rejecting mismatches
    // here keeps the operand stack numeric-only at runtime.
    fn validate(&self) -> Result<()> {
        for (at, instruction) in self.instructions.iter().enumerate() {
            match instruction {
                Instruction::Push => match self.operand(at, "PUSH")? {
                    Instruction::Literal(Literal::Measurable(text))
                        if text.parse::<Int>().is_ok() => {}
                    found => {
                        return Err(BuildError::BadPushOperand {
                            found: found.to_string(),
                        })
                    }
                },
                Instruction::Sum | Instruction::Sub => {
                    let op = match instruction {
                        Instruction::Sum => "SUM",
                        _ => "SUB",
                    };

                    match self.operand(at, op)? {
                        Instruction::Literal(Literal::Variable(_)) => {}
                        found => {
                            return Err(BuildError::BadStoreOperand {
                                op,
                                found: found.to_string(),
                            })
                        }
                    }
                }
                Instruction::Print => match self.operand(at, "PRINT")? {
                    Instruction::Literal(_) => {}
                    found => {
                        return Err(BuildError::BadPrintOperand {
                            found: found.to_string(),
                        })
                    }
                },
                _ => {}
            }
        }

        Ok(())
    }

    fn operand(&self, at: usize, op: &'static str) -> Result<&Instruction> {
        self.instructions
            .get(at + 1)
            .ok_or(BuildError::MissingOperand { op, at })
    }
}
