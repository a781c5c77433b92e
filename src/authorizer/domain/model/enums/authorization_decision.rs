#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuthorizerContext {
    pub anonymous_user_id: String,
}

/// Outcome of a single authorization attempt. Never cached or persisted.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AuthorizationDecision {
    Allow {
        principal_id: String,
        resource: String,
        context: AuthorizerContext,
    },
    Deny,
}

impl AuthorizationDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow { .. })
    }
}
