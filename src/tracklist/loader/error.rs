use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("Malformed YAML document: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("Malformed CSV document: {0}")]
    InvalidCsv(#[from] csv::Error),

    #[error("Tracklist keys must be timestamp strings, got: {0}")]
    InvalidTimestampKey(String),

    #[error("The CSV header row is missing the {0} column")]
    MissingColumn(&'static str),

    #[error("CSV row {0} has no title")]
    MissingTitle(usize),
}

pub type LoaderResult<T> = Result<T, LoaderError>;
