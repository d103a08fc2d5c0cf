use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MorphError {
    #[error("word list needs at least 2 words, got {count}")]
    TooFewWords { count: usize },

    #[error("repeat count must not be negative, got {count}")]
    NegativeRepeatCount { count: i32 },
}

impl From<MorphError> for std::io::Error {
    fn from(err: MorphError) -> Self {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, err)
    }
}
