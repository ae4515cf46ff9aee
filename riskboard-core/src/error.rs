use thiserror::Error;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error("{0}")]
    Transport(String),

    /// Non-2xx response. Displays as the response body, or `HTTP <code>`
    /// when the server sent nothing.
    #[error("{}", status_message(.status, .body))]
    Status { status: u16, body: String },

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),
}

fn status_message(status: &u16, body: &str) -> String {
    if body.trim().is_empty() {
        format!("HTTP {}", status)
    } else {
        body.to_string()
    }
}

impl From<DashboardError> for String {
    fn from(err: DashboardError) -> Self {
        err.to_string()
    }
}

impl From<reqwest::Error> for DashboardError {
    fn from(err: reqwest::Error) -> Self {
        DashboardError::Transport(err.to_string())
    }
}
