use std::fmt;

#[derive(Debug, Eq, PartialEq)]
pub enum Error {
    Auth(u16),
    App(String, u16),
    Status(u16),
    Mismatch { sent: usize, received: usize },
    Timeout,
    Transport(String),
    Encoding(String),
    Endpoint(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        match err {
            _ if err.is_timeout() => Error::Timeout,
            _ if err.is_decode()  => Error::Encoding(err.to_string()),
            _                     => Error::Transport(err.to_string()),
        }
    }
}

impl From<reqwest::header::InvalidHeaderValue> for Error {
    fn from(err: reqwest::header::InvalidHeaderValue) -> Self {
        Error::Endpoint(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Encoding(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Endpoint(err.to_string())
    }
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Auth(status)       => write!(f, "stream access denied ({})", status),
            Error::App(msg, status)   => write!(f, "stream error ({}): {}", status, msg),
            Error::Status(status)     => write!(f, "stream returned status {}", status),
            Error::Mismatch { sent, received } => {
                write!(f, "sent {} records, got {} outcomes", sent, received)
            },
            Error::Timeout            => write!(f, "stream request timed out"),
            Error::Transport(msg)     => write!(f, "stream transport error: {}", msg),
            Error::Encoding(msg)      => write!(f, "invalid stream payload: {}", msg),
            Error::Endpoint(msg)      => write!(f, "invalid stream endpoint: {}", msg),
        }
    }
}
