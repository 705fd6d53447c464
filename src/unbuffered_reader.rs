use std::io::{self, Read};

use crate::Reader;

/// A [`Reader`] that pulls bytes straight from the stream, one at a time.
///
/// Nothing past the end of a token or line is ever read, so another consumer
/// can pick up the stream exactly where this one stopped.
pub struct UnbufferedReader<R: Read> {
    inner: R,
}

impl<R: Read> UnbufferedReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Reader for UnbufferedReader<R> {
    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
                Err(err) => return Err(err),
            }
        }
    }
}
