use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbotError {
    /// Outbound platform call failed. Displays the platform's own description unchanged.
    #[error("{0}")]
    Api(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Message has no sender")]
    MissingUser,

    #[error("Message has no document")]
    MissingDocument,
}

pub type Result<T> = std::result::Result<T, DbotError>;
