mod io;
mod lexer;
#[cfg(test)]
mod regression;
mod source;
mod types;
mod vm;

use std::env;
use std::error::Error;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    let path = match env::args().nth(1) {
        Some(path) => path,
        None => {
            eprintln!("Usage: stax <program file>");
            return Ok(());
        }
    };

    if let Err(e) = execute(path.as_ref()) {
        eprintln!("Failure: {}", e);
    }

    Ok(())
}

fn execute(path: &Path) -> Result<(), Box<dyn Error>> {
    let tokens = source::tokens(path)?;
    let mut program = vm::build(tokens)?;
    vm::run(&mut program, &mut std::io::stdin(), &mut std::io::stdout())?;

    Ok(())
}
