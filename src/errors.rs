pub type Result<T = ()> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid genres attribute: {0}")]
    Genres(#[source] serde_json::Error),
    #[error("cannot encode genres: {0}")]
    Encoding(#[source] serde_json::Error),
    #[error("cannot encode link: {0}")]
    Link(#[from] serde_urlencoded::ser::Error),
    #[error("invalid dataset: {0}")]
    Dataset(#[source] serde_json::Error),
    #[error("missing environment variable {0}")]
    Env(&'static str),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            self.to_string(),
        )
            .into_response()
    }
}
