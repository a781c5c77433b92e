use std::sync::Arc;

use axum::Router;

use crate::{
    authorizer::interfaces::acl::authorizer_facade::AuthorizerFacade,
    color_identification::{
        application::query_services::color_identification_query_service_impl::ColorIdentificationQueryServiceImpl,
        domain::model::value_objects::color_secret::ColorSecret,
        interfaces::rest::{
            controllers::color_identification_rest_controller::{
                ColorIdentificationRestControllerState, router,
            },
            middleware::{authorizer_gate::AuthorizerGateState, cors_policy::build_cors_layer},
        },
    },
    config::app_config::AppConfig,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_color_identification_router(
    config: &AppConfig,
    authorizer_facade: Arc<dyn AuthorizerFacade>,
) -> Result<Router, String> {
    let secret = ColorSecret::new(config.identity_private_signing_key.clone())
        .map_err(|e| e.to_string())?;
    let cors = build_cors_layer(&config.allowed_origin)?;

    let query_service = Arc::new(ColorIdentificationQueryServiceImpl::new(secret));

    Ok(router(
        ColorIdentificationRestControllerState { query_service },
        AuthorizerGateState { authorizer_facade },
        cors,
    ))
}
