use std::{fmt::Display, io, str::FromStr};

use crate::{
    complex::{Complex128, Complex64},
    error::{into_text, Error},
};

/// Length of the UTF-8 sequence introduced by `lead`; stray bytes count as one.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

/// Reads the bytes of one character. A sequence cut short by end of stream
/// is returned as far as it got.
fn next_char<R: Reader + ?Sized>(reader: &mut R) -> io::Result<Option<Vec<u8>>> {
    let lead = match reader.next_byte()? {
        Some(byte) => byte,
        None => return Ok(None),
    };
    let mut bytes = vec![lead];
    while bytes.len() < utf8_len(lead) {
        match reader.next_byte()? {
            Some(byte) => bytes.push(byte),
            None => break,
        }
    }
    Ok(Some(bytes))
}

/// Whether `bytes` encode a single Unicode whitespace character.
pub(crate) fn is_whitespace(bytes: &[u8]) -> bool {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|text| text.chars().next())
        .is_some_and(char::is_whitespace)
}

/// Removes a trailing `"\r\n"` pair, or failing that a single trailing `'\n'`.
pub(crate) fn strip_line_ending(line: &mut Vec<u8>) {
    if line.ends_with(b"\r\n") {
        line.truncate(line.len() - 2);
    } else if line.ends_with(b"\n") {
        line.truncate(line.len() - 1);
    }
}

fn parse<T>(token: String, target: &'static str) -> Result<T, Error>
where
    T: FromStr,
    T::Err: Display,
{
    token.parse().map_err(|err: T::Err| Error::Parse {
        reason: err.to_string(),
        token,
        target,
    })
}

/// Typed scanning and line reading over a single forward-only stream cursor.
///
/// Every typed operation skips leading whitespace, reads one token and parses
/// it with the target type's `FromStr`. Whitespace is any Unicode white space
/// character. The one that ends a token is consumed along with it, so a
/// following [`line`](Reader::line) starts right after it.
pub trait Reader {
    /// Advances the cursor by one byte. `Ok(None)` signals end of stream.
    fn next_byte(&mut self) -> io::Result<Option<u8>>;

    /// Reads the next whitespace-delimited token.
    fn string(&mut self) -> Result<String, Error> {
        let mut token = loop {
            match next_char(self)? {
                Some(bytes) if is_whitespace(&bytes) => continue,
                Some(bytes) => break bytes,
                None => return Err(Error::EndOfStream),
            }
        };

        while let Some(bytes) = next_char(self)? {
            if is_whitespace(&bytes) {
                break;
            }
            token.extend_from_slice(&bytes);
        }

        let token = into_text(token)?;
        tracing::trace!(%token, "scanned token");
        Ok(token)
    }

    /// Reads up to and including the next `'\n'` and returns the line without
    /// its `"\n"` or `"\r\n"` ending.
    ///
    /// The stream is read one byte at a time so nothing past the newline is
    /// consumed. A final line without a newline is returned unchanged; only a
    /// stream that is already exhausted yields [`Error::EndOfStream`].
    fn line(&mut self) -> Result<String, Error> {
        let mut line = Vec::new();
        loop {
            match self.next_byte()? {
                Some(byte) => {
                    line.push(byte);
                    if byte == b'\n' {
                        break;
                    }
                }
                None if line.is_empty() => return Err(Error::EndOfStream),
                None => break,
            }
        }

        strip_line_ending(&mut line);
        tracing::trace!(len = line.len(), "read line");
        into_text(line)
    }

    fn bool(&mut self) -> Result<bool, Error> {
        parse(self.string()?, "bool")
    }

    fn int(&mut self) -> Result<isize, Error> {
        parse(self.string()?, "int")
    }

    fn int8(&mut self) -> Result<i8, Error> {
        parse(self.string()?, "int8")
    }

    fn int16(&mut self) -> Result<i16, Error> {
        parse(self.string()?, "int16")
    }

    fn int32(&mut self) -> Result<i32, Error> {
        parse(self.string()?, "int32")
    }

    fn int64(&mut self) -> Result<i64, Error> {
        parse(self.string()?, "int64")
    }

    fn uint(&mut self) -> Result<usize, Error> {
        parse(self.string()?, "uint")
    }

    fn uint8(&mut self) -> Result<u8, Error> {
        parse(self.string()?, "uint8")
    }

    fn uint16(&mut self) -> Result<u16, Error> {
        parse(self.string()?, "uint16")
    }

    fn uint32(&mut self) -> Result<u32, Error> {
        parse(self.string()?, "uint32")
    }

    fn uint64(&mut self) -> Result<u64, Error> {
        parse(self.string()?, "uint64")
    }

    fn float32(&mut self) -> Result<f32, Error> {
        parse(self.string()?, "float32")
    }

    fn float64(&mut self) -> Result<f64, Error> {
        parse(self.string()?, "float64")
    }

    fn complex64(&mut self) -> Result<Complex64, Error> {
        parse(self.string()?, "complex64")
    }

    fn complex128(&mut self) -> Result<Complex128, Error> {
        parse(self.string()?, "complex128")
    }
}
