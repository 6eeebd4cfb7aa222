//! Custom `Error` and `Result` types for decoding Itanium symbols.

use std::fmt;

/// Errors that can occur while demangling a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Error {
    /// The mangled symbol ends abruptly.
    UnexpectedEnd,

    /// The mangled symbol is not well-formed.
    UnexpectedText,

    /// Found a back reference that is out-of-bounds of the substitution
    /// table, or a `S_` before any name was seen.
    BadBackReference,

    /// An overflow would occur when parsing an integer in a mangled symbol.
    Overflow,

    /// Encountered too much recursion when demangling symbol.
    TooMuchRecursion,

    /// The symbol uses a part of the grammar that isn't decoded.
    Unsupported(&'static str),

    /// Decoding ran out of scratch memory.
    CapacityExceeded,
}

/// Broad classes of [`Error`], for callers that only care why a decode was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedInput,
    CapacityExceeded,
    UnsupportedConstruction,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match *self {
            Error::UnexpectedEnd
            | Error::UnexpectedText
            | Error::BadBackReference
            | Error::Overflow
            | Error::TooMuchRecursion => ErrorKind::MalformedInput,
            Error::Unsupported(_) => ErrorKind::UnsupportedConstruction,
            Error::CapacityExceeded => ErrorKind::CapacityExceeded,
        }
    }
}

#[test]
fn size_of_error() {
    assert!(
        std::mem::size_of::<Error>() <= 24,
        "We should keep the size of our Error type in check"
    );
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::UnexpectedEnd => write!(f, "mangled symbol ends abruptly"),
            Error::UnexpectedText => write!(f, "mangled symbol is not well-formed"),
            Error::BadBackReference => {
                write!(
                    f,
                    "back reference that is out-of-bounds of the substitution table"
                )
            }
            Error::Overflow => write!(
                f,
                "an overflow would occur when parsing an integer in a mangled symbol"
            ),
            Error::TooMuchRecursion => {
                write!(f, "encountered too much recursion when demangling symbol")
            }
            Error::Unsupported(what) => write!(f, "{what} can't be demangled"),
            Error::CapacityExceeded => write!(f, "ran out of memory while demangling symbol"),
        }
    }
}

impl std::error::Error for Error {}

/// A demangling result of `T` or an [`Error`].
pub type Result<T> = ::core::result::Result<T, Error>;
