mod simple_programs;

use crate::source;
use crate::vm::{self, BuildError, ExecutionError, Program};

fn tokens(program: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for line in program.lines() {
        source::split_line(line, &mut tokens);
    }
    tokens
}

pub fn build(program: &str) -> Result<Program, BuildError> {
    vm::build(tokens(program))
}

pub fn run(program: &str, stdin: &[&str], stdout: &[&str]) {
    let mut program = build(program).unwrap();
    let mut input: Vec<String> = stdin.iter().rev().map(|s| s.to_string()).collect();
    let mut output: Vec<String> = Vec::new();

    vm::run(&mut program, &mut input, &mut output).unwrap();

    assert!(input.is_empty(), "unconsumed input: {:?}", input);
    assert_eq!(output, stdout);
}

pub fn run_err(program: &str, stdin: &[&str]) -> ExecutionError {
    let mut program = build(program).unwrap();
    let mut input: Vec<String> = stdin.iter().rev().map(|s| s.to_string()).collect();
    let mut output: Vec<String> = Vec::new();

    vm::run(&mut program, &mut input, &mut output).unwrap_err()
}
