use std::io::{Stdin, Stdout, Write};

pub trait InputStream {
    fn read(&mut self) -> Option<String>;
}

pub trait OutputStream {
    fn write(&mut self, line: &str);
}

// IO streams implementations
impl InputStream for Stdin {
    fn read(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl OutputStream for Stdout {
    fn write(&mut self, line: &str) {
        writeln!(self, "{}", line).unwrap();
    }
}

impl InputStream for Vec<String> {
    fn read(&mut self) -> Option<String> {
        self.pop()
    }
}

impl OutputStream for Vec<String> {
    fn write(&mut self, line: &str) {
        self.push(line.to_string())
    }
}

impl InputStream for () {
    fn read(&mut self) -> Option<String> {
        None
    }
}

impl OutputStream for () {
    fn write(&mut self, _: &str) {}
}
