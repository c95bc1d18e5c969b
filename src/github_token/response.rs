use serde_json::Value;

use super::errors::TokenError;

/// `message` value GitHub returns for a rejected token
pub const BAD_CREDENTIALS_MESSAGE: &str = "Bad credentials";

/// Raw reply from `GET /user`
#[derive(Debug, Clone, PartialEq)]
pub struct UserResponse {
    pub status: u16,
    pub body: String,
}

impl UserResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Decide whether a `/user` reply proves the token, returning the login on success
///
/// Precedence: an unparseable body reports the HTTP status; a
/// `"Bad credentials"` message wins over any other message regardless of
/// status; a body without `login` surfaces its `message` (or
/// `unknown error`).
pub fn interpret_user_response(response: &UserResponse) -> Result<String, TokenError> {
    let payload: Value = serde_json::from_str(&response.body).map_err(|e| {
        log::debug!(
            "GitHub API body (HTTP {}) is not JSON: {}",
            response.status,
            e
        );
        TokenError::RequestFailed {
            status: response.status,
        }
    })?;

    let message = payload.get("message");
    if message.and_then(Value::as_str) == Some(BAD_CREDENTIALS_MESSAGE) {
        return Err(TokenError::BadCredentials);
    }

    match payload.get("login") {
        Some(login) => Ok(display_value(login)),
        None => Err(TokenError::AuthFailed {
            message: message
                .map(display_value)
                .unwrap_or_else(|| "unknown error".to_string()),
        }),
    }
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
