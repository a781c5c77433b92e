use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tracing::warn;
use validator::Validate;

use crate::authorizer::{
    domain::{
        model::{
            enums::{
                authorization_decision::AuthorizationDecision,
                authorizer_domain_error::AuthorizerDomainError,
            },
            queries::authorize_token_query::AuthorizeTokenQuery,
        },
        services::authorizer_query_service::AuthorizerQueryService,
    },
    interfaces::rest::resources::{
        authorize_request_resource::AuthorizeRequestResource,
        authorizer_error_response_resource::AuthorizerErrorResponseResource,
        authorizer_policy_resource::AuthorizerPolicyResource,
    },
};

const TOKEN_EVENT_TYPE: &str = "TOKEN";

#[derive(Clone)]
pub struct AuthorizerRestControllerState {
    pub query_service: Arc<dyn AuthorizerQueryService>,
}

pub fn router(state: AuthorizerRestControllerState) -> Router {
    Router::new()
        .route("/authorizer/authorize", post(authorize))
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/authorizer/authorize",
    tag = "authorizer",
    request_body = AuthorizeRequestResource,
    responses(
        (status = 200, description = "Allow policy for the requested resource", body = AuthorizerPolicyResource),
        (status = 400, description = "Invalid authorizer event", body = AuthorizerErrorResponseResource),
        (status = 401, description = "Identity could not be verified", body = AuthorizerErrorResponseResource),
        (status = 500, description = "Identity provider failure", body = AuthorizerErrorResponseResource)
    )
)]
pub async fn authorize(
    State(state): State<AuthorizerRestControllerState>,
    Json(request): Json<AuthorizeRequestResource>,
) -> Result<Json<AuthorizerPolicyResource>, (StatusCode, Json<AuthorizerErrorResponseResource>)> {
    if let Err(validation_error) = request.validate() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AuthorizerErrorResponseResource {
                message: validation_error.to_string(),
            }),
        ));
    }

    if request.event_type != TOKEN_EVENT_TYPE {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(AuthorizerErrorResponseResource {
                message: format!("unsupported authorizer event type '{}'", request.event_type),
            }),
        ));
    }

    let query = AuthorizeTokenQuery::new(request.authorization_token, request.method_arn)
        .map_err(map_domain_error)?;

    let decision = state
        .query_service
        .handle_authorize(query)
        .await
        .map_err(map_domain_error)?;

    match decision {
        AuthorizationDecision::Allow {
            principal_id,
            resource,
            context,
        } => Ok(Json(AuthorizerPolicyResource::allow(
            principal_id,
            resource,
            context.anonymous_user_id,
        ))),
        AuthorizationDecision::Deny => Err(map_domain_error(AuthorizerDomainError::Unauthorized)),
    }
}

pub fn map_domain_error(
    error: AuthorizerDomainError,
) -> (StatusCode, Json<AuthorizerErrorResponseResource>) {
    match error {
        AuthorizerDomainError::InvalidToken | AuthorizerDomainError::InvalidResource => (
            StatusCode::BAD_REQUEST,
            Json(AuthorizerErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        AuthorizerDomainError::Unauthorized => (
            StatusCode::UNAUTHORIZED,
            Json(AuthorizerErrorResponseResource {
                message: error.to_string(),
            }),
        ),
        // The provider's failure detail stays in the logs.
        AuthorizerDomainError::IntegrationError(message) => {
            warn!(error = message.as_str(), "authorizer returning server error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(AuthorizerErrorResponseResource {
                    message: "Internal server error".to_string(),
                }),
            )
        }
    }
}
