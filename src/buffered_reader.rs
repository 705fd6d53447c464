use std::io::{self, BufRead, BufReader, Read};

use crate::{
    error::{into_text, Error},
    reader::strip_line_ending,
    Reader,
};

// an empty window would make every fill look like end of stream
const MIN_CAPACITY: usize = 1;

/// A [`Reader`] that keeps a read-ahead window between calls.
///
/// The wrapped stream must not be read from anywhere else while this reader
/// is alive: bytes sitting in the window are invisible to other consumers.
pub struct BufferedReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> BufferedReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
        }
    }

    /// Uses a window of `capacity` bytes, at least one.
    pub fn with_capacity(capacity: usize, inner: R) -> Self {
        Self {
            reader: BufReader::with_capacity(capacity.max(MIN_CAPACITY), inner),
        }
    }

    pub fn capacity(&self) -> usize {
        self.reader.capacity()
    }

    /// Returns the read-ahead bytes not yet handed out.
    pub fn buffer(&self) -> &[u8] {
        self.reader.buffer()
    }

    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        loop {
            match self.reader.fill_buf() {
                Ok(_) => break,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
        Ok(self.reader.buffer())
    }
}

impl<R: Read> Reader for BufferedReader<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let byte = match self.fill_buf()?.first() {
            Some(&byte) => byte,
            None => return Ok(None),
        };
        self.reader.consume(1);
        Ok(Some(byte))
    }

    /// Reads a line out of the read-ahead window.
    ///
    /// A line longer than the window arrives in several fragments, which are
    /// joined in order before the line ending is stripped.
    fn line(&mut self) -> Result<String, Error> {
        let mut line = Vec::new();
        let mut fragments = 0usize;
        loop {
            let available = self.fill_buf()?;
            if available.is_empty() {
                if line.is_empty() {
                    return Err(Error::EndOfStream);
                }
                break;
            }
            fragments += 1;

            match available.iter().position(|&byte| byte == b'\n') {
                Some(end) => {
                    line.extend_from_slice(&available[..=end]);
                    self.reader.consume(end + 1);
                    break;
                }
                None => {
                    let len = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(len);
                }
            }
        }

        strip_line_ending(&mut line);
        tracing::trace!(len = line.len(), fragments, "read line");
        into_text(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn reassembles_fragments() {
        let mut reader = BufferedReader::with_capacity(4, Cursor::new(b"abcdefghij\nk\n".to_vec()));
        assert_eq!(reader.line().unwrap(), "abcdefghij");
        assert_eq!(reader.line().unwrap(), "k");
        assert!(reader.line().unwrap_err().is_end_of_stream());
    }

    #[test]
    fn crlf_split_across_fragments() {
        let mut reader = BufferedReader::with_capacity(3, Cursor::new(b"ab\r\ncd\r\n".to_vec()));
        assert_eq!(reader.line().unwrap(), "ab");
        assert_eq!(reader.line().unwrap(), "cd");
    }

    #[test]
    fn keeps_lookahead_between_calls() {
        let mut reader = BufferedReader::new(Cursor::new(b"12 34\nrest\n".to_vec()));
        assert_eq!(reader.int32().unwrap(), 12);
        assert_eq!(reader.buffer(), b"34\nrest\n");
        assert_eq!(reader.line().unwrap(), "34");
        assert_eq!(reader.buffer(), b"rest\n");
    }

    #[test]
    fn capacity_is_configurable() {
        let reader = BufferedReader::with_capacity(16, io::empty());
        assert_eq!(reader.capacity(), 16);
    }

    #[test]
    fn zero_capacity_still_reads() {
        let mut reader = BufferedReader::with_capacity(0, &b"hello\n42\n"[..]);
        assert_eq!(reader.capacity(), 1);
        assert_eq!(reader.line().unwrap(), "hello");
        assert_eq!(reader.int().unwrap(), 42);
        assert!(reader.line().unwrap_err().is_end_of_stream());
    }
}
