use thiserror::Error;

#[derive(Debug, Error)]
pub enum WebgistError {
    /// The page could not be retrieved: unsupported scheme, transport
    /// failure, or a non-2xx response.
    #[error("failed to fetch {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The document contained no paragraph text to work with.
    #[error("no paragraph text found in document")]
    EmptyContent,

    /// Cleaning and filtering left no words to score.
    #[error("no scorable words after stopword and punctuation filtering")]
    EmptyInput,
}
