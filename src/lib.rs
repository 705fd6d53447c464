//! Typed scanning and line reading over a byte stream.
//!
//! Two [`Reader`] flavours share one contract: [`UnbufferedReader`] never reads
//! past what it returns, [`BufferedReader`] keeps a read-ahead window and must
//! be reused across calls. Token scans and [`Reader::line`] may be mixed freely;
//! they advance the same cursor.
//!
//! The free functions ([`int`], [`line`], ...) read standard input through a
//! fresh [`UnbufferedReader`] on every call.
//!
//! ```
//! use stdread::Reader;
//!
//! let mut reader = stdread::new(&b" 1  2 \n 3 4 5 \n"[..]);
//! assert_eq!(reader.int().unwrap(), 1);
//! assert_eq!(reader.int().unwrap(), 2);
//! assert_eq!(reader.string().unwrap(), "3");
//! assert_eq!(reader.line().unwrap(), "4 5 ");
//! ```

pub mod complex;
pub mod error;
mod reader;
pub use complex::{Complex, Complex128, Complex64, ParseComplexError};
pub use error::Error;
pub use reader::Reader;
mod buffered_reader;
pub use buffered_reader::BufferedReader;
mod unbuffered_reader;
pub use unbuffered_reader::UnbufferedReader;

use std::io::{self, Read, Stdin};

/// Wraps `inner` in a [`BufferedReader`].
pub fn new<R: Read>(inner: R) -> BufferedReader<R> {
    BufferedReader::new(inner)
}

/// Same as [`new`].
pub fn buffered<R: Read>(inner: R) -> BufferedReader<R> {
    BufferedReader::new(inner)
}

/// Wraps `inner` in an [`UnbufferedReader`].
pub fn unbuffered<R: Read>(inner: R) -> UnbufferedReader<R> {
    UnbufferedReader::new(inner)
}

/// Returns a new reader over standard input.
///
/// Each call builds a fresh reader; nothing is carried over between readers.
pub fn stdin() -> UnbufferedReader<Stdin> {
    UnbufferedReader::new(io::stdin())
}

pub fn bool() -> Result<bool, Error> {
    stdin().bool()
}

pub fn int() -> Result<isize, Error> {
    stdin().int()
}

pub fn int8() -> Result<i8, Error> {
    stdin().int8()
}

pub fn int16() -> Result<i16, Error> {
    stdin().int16()
}

pub fn int32() -> Result<i32, Error> {
    stdin().int32()
}

pub fn int64() -> Result<i64, Error> {
    stdin().int64()
}

pub fn uint() -> Result<usize, Error> {
    stdin().uint()
}

pub fn uint8() -> Result<u8, Error> {
    stdin().uint8()
}

pub fn uint16() -> Result<u16, Error> {
    stdin().uint16()
}

pub fn uint32() -> Result<u32, Error> {
    stdin().uint32()
}

pub fn uint64() -> Result<u64, Error> {
    stdin().uint64()
}

pub fn float32() -> Result<f32, Error> {
    stdin().float32()
}

pub fn float64() -> Result<f64, Error> {
    stdin().float64()
}

pub fn complex64() -> Result<Complex64, Error> {
    stdin().complex64()
}

pub fn complex128() -> Result<Complex128, Error> {
    stdin().complex128()
}

pub fn string() -> Result<String, Error> {
    stdin().string()
}

pub fn line() -> Result<String, Error> {
    stdin().line()
}
