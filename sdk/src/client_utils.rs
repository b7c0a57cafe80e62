use crate::StoryApiError;
use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};

/// Send a JSON request with an optional body, parse the JSON response.
/// Returns a status error on non-OK status codes.
pub async fn send_json<T: Serialize, R: DeserializeOwned>(
    client: &Client,
    method: Method,
    url: &str,
    body: Option<&T>,
) -> Result<R, StoryApiError> {
    let mut request = client.request(method, url);
    if let Some(body) = body {
        request = request.json(body);
    }
    let response = request.send().await?;
    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        Err(StoryApiError::Status(
            status,
            response.text().await.unwrap_or_default(),
        ))
    } else {
        Ok(response.json::<R>().await?)
    }
}

/// Map a status error from one of the auth-sensitive endpoints into the
/// `Auth` variant. The service answers bad credentials with 401, rejected
/// tokens with 403, and duplicate usernames on signup with 409.
pub fn map_auth_status(error: StoryApiError) -> StoryApiError {
    match error {
        StoryApiError::Status(status, body)
            if matches!(status.as_u16(), 401 | 403 | 404 | 409) =>
        {
            StoryApiError::Auth(if body.is_empty() {
                format!("service answered {status}")
            } else {
                body
            })
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_auth_status_converts_credential_rejections() {
        let error = StoryApiError::Status(
            reqwest::StatusCode::CONFLICT,
            "username already taken".to_string(),
        );
        match map_auth_status(error) {
            StoryApiError::Auth(message) => assert_eq!(message, "username already taken"),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[test]
    fn map_auth_status_leaves_server_errors_alone() {
        let error = StoryApiError::Status(
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            String::new(),
        );
        assert!(matches!(
            map_auth_status(error),
            StoryApiError::Status(status, _) if status.as_u16() == 500
        ));
    }
}
