use thiserror::Error;

#[derive(Error, Debug)]
pub enum IndexerError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Invalid base58 value: {0}")]
    InvalidBase58(String),
    #[error("Missing field {field} in {context} response")]
    MissingField {
        context: &'static str,
        field: &'static str,
    },
    #[error("Invalid response data: {0}")]
    InvalidResponseData(String),
}

impl<T: std::fmt::Debug> From<das_api::apis::Error<T>> for IndexerError {
    fn from(error: das_api::apis::Error<T>) -> Self {
        IndexerError::ApiError(error.to_string())
    }
}
