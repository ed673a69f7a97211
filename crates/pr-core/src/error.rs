use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrError {
    #[error("Cannot compare phonemes of different classes: '{left}' and '{right}'")]
    InvalidPhonemeClass { left: char, right: char },
    #[error("Unknown symbol {symbol:?} at offset {offset}")]
    UnknownSymbol { symbol: char, offset: usize },
    #[error("Syllable without a vowel nucleus at offset {offset}")]
    MissingNucleus { offset: usize },
    #[error("Expected syllable separator at offset {offset}, found '{found}'")]
    ExpectedSeparator { found: char, offset: usize },
    #[error("Unexpected input after syllable at offset {offset}")]
    TrailingInput { offset: usize },
    #[error("Invalid target syllable count: {0}")]
    InvalidTarget(String),
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PrError>;
