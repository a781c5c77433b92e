use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthorizerDomainError {
    #[error("authorization token is invalid")]
    InvalidToken,

    #[error("resource identifier is invalid")]
    InvalidResource,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("identity integration error: {0}")]
    IntegrationError(String),
}
