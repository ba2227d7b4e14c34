//! Stored OAuth token model.

use chrono::{DateTime, Utc};

/// The single logical user this deployment manages. The store still keys on
/// it so multi-user support stays a pure extension of the schema.
pub const DEFAULT_USER_ID: &str = "default";

/// OAuth token row, one per logical user.
///
/// Deliberately not `Serialize`: the access token is a secret and must never
/// end up in a response body or a log line.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TokenRecord {
    /// Logical owner of the token (primary key)
    pub user_id: String,
    /// Bearer token issued by LinkedIn
    pub access_token: String,
    /// When the token expires (informational; not enforced here)
    pub expires_at: DateTime<Utc>,
    /// Last time the row was written
    pub updated_at: DateTime<Utc>,
}

impl TokenRecord {
    /// Build a record for the single logical user from an exchange result.
    pub fn for_default_user(access_token: String, expires_in_secs: i64) -> Self {
        let now = Utc::now();
        Self {
            user_id: DEFAULT_USER_ID.to_string(),
            access_token,
            expires_at: now + chrono::Duration::seconds(expires_in_secs),
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_default_user_expiry() {
        let record = TokenRecord::for_default_user("tok".to_string(), 3600);
        assert_eq!(record.user_id, DEFAULT_USER_ID);
        let lifetime = record.expires_at - record.updated_at;
        assert_eq!(lifetime.num_seconds(), 3600);
    }
}
