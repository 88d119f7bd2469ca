use core::fmt;
use std::error::Error;
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphErrorKind {
    InvalidArgument,
    OutOfRange,
}

impl fmt::Display for GraphErrorKind {
    fn fmt(&self, f: &mut ::std::fmt::Formatter) -> Result<(), ::std::fmt::Error> {
        match *self {
            Self::InvalidArgument => f.write_str("InvalidArgument"),
            Self::OutOfRange => f.write_str("OutOfRange"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct GraphError {
    kind: GraphErrorKind,
    msg: String,
}

impl GraphError {
    pub(crate) fn new(kind: GraphErrorKind, msg: &str) -> Self {
        Self {
            kind,
            msg: String::from(msg),
        }
    }

    pub(crate) fn invalid_argument(msg: &str) -> Self {
        Self::new(GraphErrorKind::InvalidArgument, msg)
    }

    pub(crate) fn out_of_range(msg: &str) -> Self {
        Self::new(GraphErrorKind::OutOfRange, msg)
    }

    pub fn kind(&self) -> GraphErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.msg)
    }
}

impl Error for GraphError {}

impl From<GraphError> for io::Error {
    fn from(e: GraphError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, e)
    }
}
