use std::time::Duration;

use async_trait::async_trait;
use tonic::{
    metadata::MetadataValue,
    transport::{Channel, Endpoint},
};
use tracing::{debug, warn};

use crate::{
    identity_grpc::{
        ExchangeCodeRequest,
        identity_verification_service_client::IdentityVerificationServiceClient,
    },
    identity_integration::{
        domain::model::value_objects::{
            anonymous_user_id::AnonymousUserId, verification_claim::VerificationClaim,
        },
        interfaces::acl::identity_verification_facade::{
            IdentityIntegrationError, IdentityVerificationFacade, VerifiedIdentity,
        },
    },
};

const APP_SECRET_METADATA_KEY: &str = "x-app-secret";

pub struct GrpcIdentityVerificationFacadeImpl {
    endpoint: String,
    app_id: String,
    app_secret: String,
    timeout: Duration,
}

impl GrpcIdentityVerificationFacadeImpl {
    pub fn new(endpoint: String, app_id: String, app_secret: String, timeout: Duration) -> Self {
        Self {
            endpoint,
            app_id,
            app_secret,
            timeout,
        }
    }

    async fn grpc_client(
        &self,
    ) -> Result<IdentityVerificationServiceClient<Channel>, IdentityIntegrationError> {
        let endpoint = Endpoint::from_shared(self.endpoint.clone())
            .map_err(|e| IdentityIntegrationError::Unavailable(e.to_string()))?
            .connect_timeout(self.timeout)
            .timeout(self.timeout);

        let channel = endpoint
            .connect()
            .await
            .map_err(|e| IdentityIntegrationError::Unavailable(e.to_string()))?;

        Ok(IdentityVerificationServiceClient::new(channel))
    }

    fn exchange_request(
        &self,
        token: &str,
    ) -> Result<tonic::Request<ExchangeCodeRequest>, IdentityIntegrationError> {
        let mut request = tonic::Request::new(ExchangeCodeRequest {
            app_id: self.app_id.clone(),
            auth_code: token.to_string(),
        });

        let secret = MetadataValue::try_from(self.app_secret.as_str()).map_err(|_| {
            IdentityIntegrationError::Unavailable(
                "application secret is not a valid metadata value".to_string(),
            )
        })?;
        request
            .metadata_mut()
            .insert(APP_SECRET_METADATA_KEY, secret);

        Ok(request)
    }
}

#[async_trait]
impl IdentityVerificationFacade for GrpcIdentityVerificationFacadeImpl {
    async fn exchange_code(
        &self,
        token: &str,
    ) -> Result<VerifiedIdentity, IdentityIntegrationError> {
        let request = self.exchange_request(token)?;
        let mut client = self.grpc_client().await?;

        let response = client.exchange_code(request).await.map_err(|status| {
            warn!(code = ?status.code(), "identity provider rejected code exchange");
            IdentityIntegrationError::Unavailable(status.message().to_string())
        })?;
        let response = response.into_inner();

        let user_id = AnonymousUserId::new(&response.user_id)
            .map_err(IdentityIntegrationError::MalformedResponse)?;

        let claims = response
            .data
            .into_iter()
            .map(|claim| VerificationClaim {
                label: claim.label,
                value: claim.value,
                is_valid: claim.is_valid,
                is_owner: claim.is_owner,
            })
            .collect::<Vec<_>>();

        debug!(
            user_id = user_id.value(),
            claims = claims.len(),
            "identity provider exchanged code"
        );

        Ok(VerifiedIdentity { user_id, claims })
    }
}
