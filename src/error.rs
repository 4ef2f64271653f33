//! Errors
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A required field is empty on a given data row (1-based, header excluded).
    MalformedInput { row: usize, field: &'static str },
    /// A required column is absent from the table header.
    Schema { column: &'static str },
}

impl From<csv::Error> for Error {
    fn from(v: csv::Error) -> Self {
        Self::Csv(v)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
