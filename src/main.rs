use axum::Router;
use color_identification_api::{
    authorizer::{
        build_authorizer_facade, build_authorizer_query_service, build_authorizer_router,
        interfaces::rest::resources::{
            authorize_request_resource::AuthorizeRequestResource,
            authorizer_error_response_resource::AuthorizerErrorResponseResource,
            authorizer_policy_resource::{
                AuthorizerContextResource, AuthorizerPolicyResource, PolicyDocumentResource,
                PolicyStatementResource,
            },
        },
    },
    color_identification::{
        build_color_identification_router,
        interfaces::rest::resources::{
            color_identification_error_response_resource::ColorIdentificationErrorResponseResource,
            color_identity_response_resource::ColorIdentityResponseResource,
        },
    },
    config::app_config::AppConfig,
    shared::interfaces::rest::openapi::security::BearerSecurityAddon,
};
use dotenvy::dotenv;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        color_identification_api::authorizer::interfaces::rest::controllers::authorizer_rest_controller::authorize,
        color_identification_api::color_identification::interfaces::rest::controllers::color_identification_rest_controller::identify_color
    ),
    components(
        schemas(
            AuthorizeRequestResource,
            AuthorizerPolicyResource,
            PolicyDocumentResource,
            PolicyStatementResource,
            AuthorizerContextResource,
            AuthorizerErrorResponseResource,
            ColorIdentityResponseResource,
            ColorIdentificationErrorResponseResource
        )
    ),
    tags(
        (name = "authorizer", description = "Anonymous identity token authorizer bounded context"),
        (name = "color-identification", description = "Deterministic color derivation bounded context")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "color_identification_api=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env().expect("failed to load configuration");
    info!(?config, "configuration loaded");

    let authorizer_query_service = build_authorizer_query_service(&config);
    let authorizer_facade = build_authorizer_facade(authorizer_query_service.clone());

    let authorizer_router = build_authorizer_router(authorizer_query_service);
    let color_identification_router =
        build_color_identification_router(&config, authorizer_facade)
            .expect("failed to build color identification router");

    let app = Router::new()
        .merge(authorizer_router)
        .merge(color_identification_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    info!("server listening on http://localhost:{}", config.port);
    info!(
        "swagger UI available at http://localhost:{}/swagger-ui",
        config.port
    );

    axum::serve(listener, app)
        .await
        .expect("failed to start axum server");
}
