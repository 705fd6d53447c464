// output_writer.rs
use std::{
    fmt::Display,
    io::{self, Write},
};

pub struct OutputWriter<W: Write> {
    writer: W,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Writes one scanned value on its own line.
    pub fn write_value(&mut self, value: &dyn Display) -> io::Result<()> {
        writeln!(self.writer, "{value}")
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_value_per_line() {
        let mut out = OutputWriter::new(Vec::new());
        out.write_value(&42).unwrap();
        out.write_value(&"4 5 ").unwrap();
        out.write_value(&"").unwrap();
        assert_eq!(out.writer, b"42\n4 5 \n\n");
    }
}
