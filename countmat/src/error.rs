use std::error::Error;
use std::fmt::{
    self,
    Display,
    Formatter,
};
use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading count tables, merging them into a
/// matrix, or extracting annotation records.
#[derive(Debug)]
pub enum CountMatError {
    /// An input path does not exist or is not readable.
    NotFound(PathBuf),
    /// A count file has no gene identifier column to promote to the key.
    MissingGeneColumn(String),
    /// A count cell could not be parsed as a non-negative integer.
    InvalidCount {
        source_name: String,
        line:        usize,
        value:       String,
    },
    /// The merge was given zero input tables.
    EmptyInput,
    Io(io::Error),
    Csv(csv::Error),
}

impl Display for CountMatError {
    fn fmt(
        &self,
        f: &mut Formatter<'_>,
    ) -> fmt::Result {
        match self {
            CountMatError::NotFound(path) => {
                write!(f, "Input path '{}' not found", path.display())
            },
            CountMatError::MissingGeneColumn(name) => {
                write!(f, "No gene identifier column in '{}'", name)
            },
            CountMatError::InvalidCount {
                source_name,
                line,
                value,
            } => {
                write!(
                    f,
                    "Invalid count '{}' at line {} of '{}'",
                    value, line, source_name
                )
            },
            CountMatError::EmptyInput => {
                write!(f, "No input count tables supplied")
            },
            CountMatError::Io(e) => write!(f, "I/O error: {}", e),
            CountMatError::Csv(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl Error for CountMatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            CountMatError::Io(e) => Some(e),
            CountMatError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CountMatError {
    fn from(e: io::Error) -> Self { CountMatError::Io(e) }
}

impl From<csv::Error> for CountMatError {
    fn from(e: csv::Error) -> Self { CountMatError::Csv(e) }
}

pub type Result<T> = std::result::Result<T, CountMatError>;
