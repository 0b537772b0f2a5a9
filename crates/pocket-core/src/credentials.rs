use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{PocketError, Result};

/// The consumer key plus the access token of the authorized account.
///
/// Read-only once built, so a single value may be shared across concurrent
/// requests.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    consumer_key: String,
    access_token: String,
}

impl Credentials {
    pub fn new(consumer_key: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            consumer_key: consumer_key.into(),
            access_token: access_token.into(),
        }
    }

    pub fn consumer_key(&self) -> &str {
        &self.consumer_key
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Merges operation fields with `consumer_key` and `access_token` into one
    /// request body. `fields` must serialize to a JSON object (or unit).
    pub fn compose<T: Serialize + ?Sized>(&self, fields: &T) -> Result<Map<String, Value>> {
        let mut body = match serde_json::to_value(fields)? {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            other => {
                return Err(PocketError::Encoding(serde::ser::Error::custom(format!(
                    "request fields must be an object, got {}",
                    json_kind(&other)
                ))))
            }
        };
        body.insert(
            "consumer_key".to_string(),
            Value::String(self.consumer_key.clone()),
        );
        body.insert(
            "access_token".to_string(),
            Value::String(self.access_token.clone()),
        );
        Ok(body)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("consumer_key", &"<redacted>")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn compose_adds_credentials_to_fields() {
        let credentials = Credentials::new("ck", "at");
        let body = credentials
            .compose(&json!({"tag": "rust", "count": 5}))
            .expect("compose");
        assert_eq!(
            Value::Object(body),
            json!({
                "tag": "rust",
                "count": 5,
                "consumer_key": "ck",
                "access_token": "at"
            })
        );
    }

    #[test]
    fn compose_credentials_win_over_colliding_fields() {
        let credentials = Credentials::new("ck", "at");
        let body = credentials
            .compose(&json!({"access_token": "forged"}))
            .expect("compose");
        assert_eq!(body["access_token"], "at");
    }

    #[test]
    fn compose_accepts_unit_and_rejects_scalars() {
        let credentials = Credentials::new("ck", "at");
        let body = credentials.compose(&()).expect("unit is empty");
        assert_eq!(body.len(), 2);
        assert!(matches!(
            credentials.compose(&[1, 2, 3]),
            Err(PocketError::Encoding(_))
        ));
    }

    #[test]
    fn debug_redacts_secrets() {
        let credentials = Credentials::new("consumer-secret", "token-secret");
        let rendered = format!("{credentials:?}");
        assert!(!rendered.contains("consumer-secret"));
        assert!(!rendered.contains("token-secret"));
    }
}
