use std::sync::Mutex;

use async_trait::async_trait;
use color_identification_api::identity_integration::{
    domain::model::value_objects::{
        anonymous_user_id::AnonymousUserId, verification_claim::VerificationClaim,
    },
    interfaces::acl::identity_verification_facade::{
        IdentityIntegrationError, IdentityVerificationFacade, VerifiedIdentity,
    },
};

#[derive(Default)]
struct FakeIdentityState {
    user_id: Option<String>,
    claims: Vec<VerificationClaim>,
    failure: Option<String>,
    tokens: Vec<String>,
}

pub struct FakeIdentityVerificationFacade {
    state: Mutex<FakeIdentityState>,
}

impl FakeIdentityVerificationFacade {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(FakeIdentityState::default()),
        }
    }

    pub fn set_identity(&self, user_id: &str, claims: Vec<VerificationClaim>) {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.user_id = Some(user_id.to_string());
        state.claims = claims;
        state.failure = None;
    }

    pub fn set_failure(&self, message: &str) {
        self.state.lock().expect("mutex poisoned").failure = Some(message.to_string());
    }

    pub fn tokens(&self) -> Vec<String> {
        self.state.lock().expect("mutex poisoned").tokens.clone()
    }
}

#[async_trait]
impl IdentityVerificationFacade for FakeIdentityVerificationFacade {
    async fn exchange_code(
        &self,
        token: &str,
    ) -> Result<VerifiedIdentity, IdentityIntegrationError> {
        let mut state = self.state.lock().expect("mutex poisoned");
        state.tokens.push(token.to_string());

        if let Some(message) = &state.failure {
            return Err(IdentityIntegrationError::Unavailable(message.clone()));
        }

        let user_id = state.user_id.clone().unwrap_or_default();

        Ok(VerifiedIdentity {
            user_id: AnonymousUserId::new(&user_id)
                .map_err(IdentityIntegrationError::MalformedResponse)?,
            claims: state.claims.clone(),
        })
    }
}
