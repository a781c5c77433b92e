use std::sync::Arc;

use axum::Router;

use crate::{
    authorizer::{
        application::{
            acl::authorizer_facade_impl::AuthorizerFacadeImpl,
            query_services::authorizer_query_service_impl::AuthorizerQueryServiceImpl,
        },
        domain::services::authorizer_query_service::AuthorizerQueryService,
        interfaces::{
            acl::authorizer_facade::AuthorizerFacade,
            rest::controllers::authorizer_rest_controller::{AuthorizerRestControllerState, router},
        },
    },
    config::app_config::AppConfig,
    identity_integration::application::acl::grpc_identity_verification_facade_impl::GrpcIdentityVerificationFacadeImpl,
};

pub mod application;
pub mod domain;
pub mod interfaces;

pub fn build_authorizer_query_service(config: &AppConfig) -> Arc<dyn AuthorizerQueryService> {
    let identity_verification_facade = Arc::new(GrpcIdentityVerificationFacadeImpl::new(
        config.identity_verification_endpoint.clone(),
        config.identity_app_id.clone(),
        config.identity_app_secret.clone(),
        config.identity_verification_timeout,
    ));

    Arc::new(AuthorizerQueryServiceImpl::new_with_policy(
        identity_verification_facade,
        config.claim_validation_policy,
    ))
}

pub fn build_authorizer_facade(
    query_service: Arc<dyn AuthorizerQueryService>,
) -> Arc<dyn AuthorizerFacade> {
    Arc::new(AuthorizerFacadeImpl::new(query_service))
}

pub fn build_authorizer_router(query_service: Arc<dyn AuthorizerQueryService>) -> Router {
    router(AuthorizerRestControllerState { query_service })
}
