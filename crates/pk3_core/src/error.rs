use std::error::Error;
use std::fmt;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecErrorCode {
    /// Input buffer is shorter (or, for save images, not exactly) the size a fixed format requires.
    SizeMismatch,
    /// A creature record slice could not be decoded.
    MalformedRecord,
    /// A logical save section was not present in the active generation.
    MissingSection,
    InvalidInput,
    Io,
    DataTable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodecError {
    pub code: CodecErrorCode,
    pub message: String,
}

impl CodecError {
    pub fn new(code: CodecErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn size_mismatch(what: &str, expected: usize, actual: usize) -> Self {
        Self::new(
            CodecErrorCode::SizeMismatch,
            format!("{what}: expected {expected:#x} bytes, got {actual:#x}"),
        )
    }
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl Error for CodecError {}

impl From<io::Error> for CodecError {
    fn from(e: io::Error) -> Self {
        let code = match e.kind() {
            io::ErrorKind::UnexpectedEof => CodecErrorCode::SizeMismatch,
            _ => CodecErrorCode::Io,
        };
        Self::new(code, e.to_string())
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(CodecErrorCode::DataTable, e.to_string())
    }
}
