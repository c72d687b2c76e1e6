use std::fmt;

// === StoreError ===

/// Errors raised by the key-value persistence substrate.
#[derive(Debug)]
pub enum StoreError {
    /// The backing store could not be opened or is not usable.
    Unavailable(String),
    /// Database operation failed.
    DatabaseError(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(msg) => write!(f, "Store unavailable: {}", msg),
            StoreError::DatabaseError(msg) => write!(f, "Store database error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

// === QuizError ===

/// Errors related to quiz attempt operations.
#[derive(Debug)]
pub enum QuizError {
    /// The provided question index is out of bounds.
    QuestionOutOfRange(usize),
    /// The provided option index is out of bounds for the question.
    OptionOutOfRange(usize),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::QuestionOutOfRange(index) => {
                write!(f, "Question index out of range: {}", index)
            }
            QuizError::OptionOutOfRange(index) => {
                write!(f, "Option index out of range: {}", index)
            }
        }
    }
}

impl std::error::Error for QuizError {}

// === FaqError ===

/// Errors related to FAQ accordion operations.
#[derive(Debug)]
pub enum FaqError {
    /// The provided entry index is out of bounds.
    EntryOutOfRange(usize),
}

impl fmt::Display for FaqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FaqError::EntryOutOfRange(index) => {
                write!(f, "FAQ entry index out of range: {}", index)
            }
        }
    }
}

impl std::error::Error for FaqError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}
