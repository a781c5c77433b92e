use std::sync::Arc;

use axum::{Extension, Json, Router, extract::State, http::StatusCode, middleware, routing::get};
use tower_http::cors::CorsLayer;

use crate::{
    authorizer::domain::model::enums::authorization_decision::AuthorizerContext,
    color_identification::{
        domain::{
            model::{
                enums::color_identification_domain_error::ColorIdentificationDomainError,
                queries::derive_color_query::DeriveColorQuery,
            },
            services::color_identification_query_service::ColorIdentificationQueryService,
        },
        interfaces::rest::{
            middleware::authorizer_gate::{AuthorizerGateState, require_authorization},
            resources::{
                color_identification_error_response_resource::ColorIdentificationErrorResponseResource,
                color_identity_response_resource::ColorIdentityResponseResource,
            },
        },
    },
};

#[derive(Clone)]
pub struct ColorIdentificationRestControllerState {
    pub query_service: Arc<dyn ColorIdentificationQueryService>,
}

pub fn router(
    state: ColorIdentificationRestControllerState,
    gate_state: AuthorizerGateState,
    cors: CorsLayer,
) -> Router {
    Router::new()
        .route("/identification", get(identify_color))
        .route_layer(middleware::from_fn_with_state(
            gate_state,
            require_authorization,
        ))
        .with_state(state)
        .layer(cors)
}

#[utoipa::path(
    get,
    path = "/identification",
    tag = "color-identification",
    security(
        ("bearerAuth" = [])
    ),
    responses(
        (status = 200, description = "Color derived from the anonymous identity", body = ColorIdentityResponseResource),
        (status = 401, description = "Identity could not be verified", body = ColorIdentificationErrorResponseResource),
        (status = 500, description = "Identity provider or hashing failure", body = ColorIdentificationErrorResponseResource)
    )
)]
pub async fn identify_color(
    State(state): State<ColorIdentificationRestControllerState>,
    context: Option<Extension<AuthorizerContext>>,
) -> Result<
    Json<ColorIdentityResponseResource>,
    (StatusCode, Json<ColorIdentificationErrorResponseResource>),
> {
    let Extension(context) =
        context.ok_or_else(|| map_domain_error(ColorIdentificationDomainError::MissingAuthorizerContext))?;

    let query = DeriveColorQuery::new(context.anonymous_user_id).map_err(map_domain_error)?;

    let result = state
        .query_service
        .handle_derive_color(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(ColorIdentityResponseResource {
        your_user_identity: result.user_identity.value().to_string(),
        your_color_identity: result.color_identifier.value(),
    }))
}

fn map_domain_error(
    error: ColorIdentificationDomainError,
) -> (StatusCode, Json<ColorIdentificationErrorResponseResource>) {
    let status = match error {
        ColorIdentificationDomainError::InvalidUserIdentity
        | ColorIdentificationDomainError::MissingAuthorizerContext => StatusCode::UNAUTHORIZED,
        ColorIdentificationDomainError::InvalidColorSecret
        | ColorIdentificationDomainError::ColorOutOfRange(_)
        | ColorIdentificationDomainError::HashingError(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (
        status,
        Json(ColorIdentificationErrorResponseResource {
            message: error.to_string(),
        }),
    )
}
