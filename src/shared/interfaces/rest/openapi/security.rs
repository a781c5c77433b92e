use utoipa::{
    Modify,
    openapi::{
        OpenApi,
        security::{ApiKey, ApiKeyValue, SecurityScheme},
    },
};

/// Registers the `bearerAuth` scheme referenced by gated endpoints.
///
/// The identity provider token is sent as-is in the `Authorization` header, so the
/// scheme is declared as an API key header rather than an HTTP bearer scheme.
pub struct BearerSecurityAddon;

impl Modify for BearerSecurityAddon {
    fn modify(&self, openapi: &mut OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::with_description(
                "Authorization",
                "Anonymous identity token issued by the identity provider, optionally prefixed with `Bearer `",
            ))),
        );
    }
}
