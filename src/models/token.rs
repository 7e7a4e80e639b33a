//! Bearer-token claims and permission checks

use jsonwebtoken::{decode, DecodingKey, Validation};
use serde_json::Value;

use crate::error::{AppError, AppResult};

/// Resource types subject to permission checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Book,
    Author,
}

impl Resource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Resource::Book => "book",
            Resource::Author => "author",
        }
    }
}

/// Operations a permission can grant on a resource
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Read,
    Create,
    Update,
    Delete,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Read => "read",
            Action::Create => "create",
            Action::Update => "update",
            Action::Delete => "delete",
        }
    }
}

/// Permission string granting an action on a resource, e.g. `read:book`
pub fn permission(action: Action, resource: Resource) -> String {
    format!("{}:{}", action.as_str(), resource.as_str())
}

/// Claims carried by a bearer token.
///
/// The token signature is NOT verified: claims are trusted at face value,
/// preserving the service's historical behavior. Verification against the
/// identity provider's JWKS is a known gap.
#[derive(Debug, Clone)]
pub struct TokenClaims(Value);

impl TokenClaims {
    /// Decode the claims section of a JWT without verifying its signature
    pub fn from_unverified_token(token: &str) -> AppResult<Self> {
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        validation.validate_exp = false;
        validation.validate_aud = false;
        validation.required_spec_claims.clear();

        let data = decode::<Value>(token, &DecodingKey::from_secret(&[]), &validation)
            .map_err(|e| AppError::Authentication(e.to_string()))?;
        Ok(Self(data.claims))
    }

    /// True iff the `permissions` claim is a list containing `required`
    pub fn has_permission(&self, required: &str) -> bool {
        self.0
            .get("permissions")
            .and_then(Value::as_array)
            .map_or(false, |perms| {
                perms.iter().any(|p| p.as_str() == Some(required))
            })
    }

    /// Authorize an action on a resource, failing with a 403 otherwise
    pub fn require(&self, action: Action, resource: Resource) -> AppResult<()> {
        if self.has_permission(&permission(action, resource)) {
            Ok(())
        } else {
            Err(AppError::Authorization(
                "Insufficient permissions".to_string(),
            ))
        }
    }
}
