use std::io;

use thiserror::Error;

/// The error returned by every read operation.
#[derive(Debug, Error)]
pub enum Error {
    /// The stream had no more bytes to offer.
    #[error("unexpected end of stream")]
    EndOfStream,
    /// A token was read but could not be parsed as the requested type.
    #[error("cannot parse `{token}` as {target}: {reason}")]
    Parse {
        token: String,
        target: &'static str,
        reason: String,
    },
    /// Any other failure reported by the underlying stream.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Returns `true` if the stream ran dry before anything could be read.
    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, Error::EndOfStream)
    }
}

/// Converts the bytes of a token or line into a `String`.
pub(crate) fn into_text(bytes: Vec<u8>) -> Result<String, Error> {
    String::from_utf8(bytes).map_err(|err| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("stream did not contain valid UTF-8: {err}"),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_of_stream_is_detected() {
        assert!(Error::EndOfStream.is_end_of_stream());
        assert!(!Error::from(io::Error::from(io::ErrorKind::BrokenPipe)).is_end_of_stream());
    }

    #[test]
    fn parse_error_names_token_and_target() {
        let err = Error::Parse {
            token: "abc".to_string(),
            target: "int",
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "cannot parse `abc` as int: invalid digit found in string"
        );
    }

    #[test]
    fn invalid_utf8_is_invalid_data() {
        match into_text(vec![b'a', 0xff]) {
            Err(Error::Io(err)) => assert_eq!(err.kind(), io::ErrorKind::InvalidData),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
