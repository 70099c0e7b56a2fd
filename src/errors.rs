use rustyms::error::CustomError;

#[derive(Debug)]
pub enum ProtDigestError {
    /// The input could not be digested at all (missing or non-ASCII sequence).
    InvalidInput(String),
    /// A residue symbol the mass calculator does not know about.
    InvalidResidue { residue: char, sequence: String },
    Mass(CustomError),
    UnknownProtease(String),
    Io(std::io::Error),
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ProtDigestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for ProtDigestError {}

pub type Result<T> = std::result::Result<T, ProtDigestError>;

impl From<std::io::Error> for ProtDigestError {
    fn from(x: std::io::Error) -> Self {
        Self::Io(x)
    }
}

impl From<CustomError> for ProtDigestError {
    fn from(x: CustomError) -> Self {
        Self::Mass(x)
    }
}

impl From<serde_json::Error> for ProtDigestError {
    fn from(x: serde_json::Error) -> Self {
        Self::Json(x)
    }
}

impl From<csv::Error> for ProtDigestError {
    fn from(x: csv::Error) -> Self {
        Self::Csv(x)
    }
}
