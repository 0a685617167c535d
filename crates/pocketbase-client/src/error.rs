use thiserror::Error;

#[derive(Debug, Error)]
pub enum PocketBaseError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("pocketbase returned {status}: {message}")]
    Api { status: u16, message: String },
}
