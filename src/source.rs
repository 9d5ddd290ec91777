use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Flattens a program file into its raw token stream: every line is split
/// on spaces and the tokens of all lines are concatenated in file order.
/// Blank lines contribute no tokens.
pub fn tokens(path: &Path) -> io::Result<Vec<String>> {
    let file = File::open(path)?;

    let mut tokens = Vec::new();
    for line in BufReader::new(file).lines() {
        split_line(&line?, &mut tokens);
    }

    Ok(tokens)
}

pub fn split_line(line: &str, tokens: &mut Vec<String>) {
    for token in line.trim().split(' ') {
        if !token.is_empty() {
            tokens.push(token.to_string());
        }
    }
}
