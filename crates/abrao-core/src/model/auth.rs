//! Sign-in / sign-up payloads and reply interpretation

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// `POST /signin` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// `POST /signup` body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Account record returned on successful auth (password hash omitted).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Raw auth reply body. Any of the fields may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthReply {
    /// Error text (string) or validation errors (list of `{msg}`)
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_user")]
    pub user: Option<UserRecord>,
}

/// A malformed `user` object is dropped rather than failing the whole reply,
/// so the message and status still reach the form.
fn lenient_user<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<UserRecord>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match serde_json::from_value(value) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("ignoring malformed user record: {}", e);
            None
        }
    }))
}

/// What the form shows after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    Accepted {
        message: String,
        user: Option<UserRecord>,
    },
    Rejected {
        message: String,
    },
}

impl AuthOutcome {
    /// Interpret a reply by its shape: `detail` means failure, `message` or
    /// `user` means success. A non-2xx status without `detail` still fails.
    pub fn from_reply(status: u16, reply: AuthReply) -> Self {
        if let Some(detail) = reply.detail.as_ref().and_then(detail_text) {
            return AuthOutcome::Rejected { message: detail };
        }
        if !(200..300).contains(&status) {
            return AuthOutcome::Rejected {
                message: format!("Status {}", status),
            };
        }
        let message = match (&reply.message, &reply.user) {
            (Some(message), _) => message.clone(),
            (None, Some(user)) => format!("Bem-vindo, {}!", user.name),
            (None, None) => "Operação concluída".to_string(),
        };
        AuthOutcome::Accepted {
            message,
            user: reply.user,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AuthOutcome::Accepted { message, .. } | AuthOutcome::Rejected { message } => message,
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, AuthOutcome::Accepted { .. })
    }
}

fn detail_text(detail: &Value) -> Option<String> {
    match detail {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => {
            let messages: Vec<String> = items
                .iter()
                .filter_map(|item| match item {
                    Value::String(text) => Some(text.clone()),
                    other => other.get("msg").and_then(Value::as_str).map(str::to_string),
                })
                .collect();
            if messages.is_empty() {
                None
            } else {
                Some(messages.join("; "))
            }
        }
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reply(json: &str) -> AuthReply {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_detail_is_rejection() {
        let outcome =
            AuthOutcome::from_reply(401, reply(r#"{"detail":"Invalid e-mail or password."}"#));
        assert_eq!(
            outcome,
            AuthOutcome::Rejected {
                message: "Invalid e-mail or password.".into()
            }
        );
    }

    #[test]
    fn test_validation_detail_list() {
        let outcome = AuthOutcome::from_reply(
            422,
            reply(r#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address"}]}"#),
        );
        assert_eq!(outcome.message(), "value is not a valid email address");
        assert!(!outcome.is_accepted());
    }

    #[test]
    fn test_message_is_success() {
        let outcome = AuthOutcome::from_reply(200, reply(r#"{"message":"Login realizado"}"#));
        assert!(outcome.is_accepted());
        assert_eq!(outcome.message(), "Login realizado");
    }

    #[test]
    fn test_user_record_is_success() {
        let outcome = AuthOutcome::from_reply(
            201,
            reply(r#"{"user":{"id":7,"name":"Ana","email":"ana@example.org","created_at":"2024-05-01"}}"#),
        );
        match outcome {
            AuthOutcome::Accepted { message, user } => {
                assert_eq!(message, "Bem-vindo, Ana!");
                assert_eq!(user.map(|u| u.id), Some(7));
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn test_malformed_user_keeps_message() {
        let outcome = AuthOutcome::from_reply(
            200,
            reply(r#"{"message":"Login realizado","user":{"id":"abc","name":"Ana"}}"#),
        );
        assert_eq!(
            outcome,
            AuthOutcome::Accepted {
                message: "Login realizado".into(),
                user: None,
            }
        );
    }

    #[test]
    fn test_bare_error_status() {
        let outcome = AuthOutcome::from_reply(500, AuthReply::default());
        assert_eq!(outcome.message(), "Status 500");
    }
}
