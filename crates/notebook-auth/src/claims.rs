use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// The authenticated user bound to a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub struct Identity {
    pub id: Uuid,
}

/// JWT payload.
///
/// `exp` is only present when token expiry is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub user: Identity,
    /// Issued-at (Unix timestamp)
    pub iat: usize,
    /// Expiration (Unix timestamp)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<usize>,
}

impl Claims {
    pub fn identity(&self) -> Identity {
        self.user
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_claims_serialize_nested_user() {
        let id = Uuid::new_v4();
        let claims = Claims {
            user: Identity { id },
            iat: 1234567800,
            exp: None,
        };
        let value = serde_json::to_value(&claims).unwrap();

        assert_eq!(value["user"]["id"], id.to_string());
        assert!(value.get("exp").is_none());
    }

    #[test]
    fn test_claims_deserialize_without_exp() {
        let json = r#"{"user":{"id":"6f1c1c8e-8a40-4b43-9a57-1b1f2f7d5e01"},"iat":1700000000}"#;
        let claims: Claims = serde_json::from_str(json).unwrap();

        assert_eq!(
            claims.identity().id.to_string(),
            "6f1c1c8e-8a40-4b43-9a57-1b1f2f7d5e01"
        );
        assert_eq!(claims.exp, None);
    }
}
