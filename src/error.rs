use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// Radix sort only handles non-negative values.
    NegativeValue { index: usize, value: i32 },
    MissingTarget,
    InvalidToken(String),
    EmptyInput,
    UnknownAlgorithm(String),
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeValue { index, value } => write!(
                f,
                "radix sort requires non-negative values, found {} at index {}",
                value, index
            ),
            Self::MissingTarget => write!(f, "linear search needs a target value"),
            Self::InvalidToken(token) => write!(f, "{} is not a valid integer.", token),
            Self::EmptyInput => write!(f, "the array must contain at least one element"),
            Self::UnknownAlgorithm(name) => write!(f, "{} is not a known algorithm.", name),
            Self::Io(err) => write!(f, "i/o error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
