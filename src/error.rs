use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON response")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL")]
    Url(#[from] url::ParseError),

    #[error("Configuration error")]
    Config(#[from] envy::Error),

    #[error("Could not write output")]
    Io(#[from] std::io::Error),

    #[error("GIPHY_API_KEY not set")]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, Error>;
