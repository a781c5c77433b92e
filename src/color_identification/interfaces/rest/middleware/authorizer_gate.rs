use std::sync::Arc;

use axum::{
    Json,
    extract::{Request, State},
    http::{HeaderMap, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{Instrument, info_span, warn};
use uuid::Uuid;

use crate::{
    authorizer::{
        domain::model::enums::{
            authorization_decision::{AuthorizationDecision, AuthorizerContext},
            authorizer_domain_error::AuthorizerDomainError,
        },
        interfaces::acl::authorizer_facade::AuthorizerFacade,
    },
    color_identification::interfaces::rest::resources::color_identification_error_response_resource::ColorIdentificationErrorResponseResource,
};

pub const REQUEST_ID_HEADER: &str = "x-request-id";

#[derive(Clone)]
pub struct AuthorizerGateState {
    pub authorizer_facade: Arc<dyn AuthorizerFacade>,
}

/// Runs the authorizer in front of a route and hands its context to the handler
/// through the request extensions.
pub async fn require_authorization(
    State(state): State<AuthorizerGateState>,
    mut request: Request,
    next: Next,
) -> Response {
    let request_id = request_id(request.headers());
    let span = info_span!(
        "authorizer_gate",
        request_id = request_id.as_str(),
        method = %request.method(),
        path = request.uri().path(),
    );

    async move {
        let context = authorize_request(
            &state,
            request.method(),
            request.uri().path(),
            request.headers(),
        )
        .await;

        match context {
            Ok(context) => {
                request.extensions_mut().insert(context);
                next.run(request).await
            }
            Err(rejection) => rejection.into_response(),
        }
    }
    .instrument(span)
    .await
}

pub async fn authorize_request(
    state: &AuthorizerGateState,
    method: &Method,
    path: &str,
    headers: &HeaderMap,
) -> Result<AuthorizerContext, (StatusCode, Json<ColorIdentificationErrorResponseResource>)> {
    let token = bearer_token(headers).ok_or_else(unauthorized)?;
    let resource = format!("{method} {path}");

    let decision = state
        .authorizer_facade
        .authorize(token, resource)
        .await
        .map_err(map_authorizer_error)?;

    match decision {
        AuthorizationDecision::Allow { context, .. } => Ok(context),
        AuthorizationDecision::Deny => Err(unauthorized()),
    }
}

/// The browser client sends the provider token as-is; `Bearer ` is accepted too.
fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let authorization = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .map(str::trim)?;

    let token = authorization
        .strip_prefix("Bearer ")
        .map(str::trim)
        .unwrap_or(authorization);

    if token.is_empty() {
        return None;
    }

    Some(token.to_string())
}

fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::now_v7().to_string())
}

fn unauthorized() -> (StatusCode, Json<ColorIdentificationErrorResponseResource>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(ColorIdentificationErrorResponseResource {
            message: "Unauthorized".to_string(),
        }),
    )
}

fn map_authorizer_error(
    error: AuthorizerDomainError,
) -> (StatusCode, Json<ColorIdentificationErrorResponseResource>) {
    match error {
        AuthorizerDomainError::InvalidToken | AuthorizerDomainError::Unauthorized => {
            unauthorized()
        }
        AuthorizerDomainError::InvalidResource | AuthorizerDomainError::IntegrationError(_) => {
            warn!(error = %error, "authorizer failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ColorIdentificationErrorResponseResource {
                    message: "Internal server error".to_string(),
                }),
            )
        }
    }
}
