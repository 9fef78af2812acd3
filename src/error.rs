#[macro_export]
macro_rules! duration_error {
    ($($arg:tt)*) => {
        $crate::Error::InvalidDuration(format!($($arg)*))
    }
}

#[macro_export]
macro_rules! binding_error {
    ($($arg:tt)*) => {
        $crate::Error::InvalidBinding(format!($($arg)*))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),
    #[error("Invalid binding name: {0}")]
    InvalidBinding(String),
    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Serialization error: {0}")]
    SerializeError(String),
}
