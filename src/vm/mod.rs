mod builder;
mod machine;
mod program;

use crate::io::{InputStream, OutputStream};

pub use self::builder::{BuildError, Builder};
pub use self::machine::{ExecutionError, Machine};
pub use self::program::{Env, Instruction, Literal, Program};

pub fn build(tokens: impl IntoIterator<Item = String>) -> Result<Program, BuildError> {
    Builder::new().build(tokens)
}

pub fn run<I, O>(program: &mut Program, input: &mut I, output: &mut O) -> Result<(), ExecutionError>
where
    I: InputStream,
    O: OutputStream,
{
    Machine::new(input, output).run(program)
}
