use thiserror::Error;

#[derive(Debug, Error)]
pub enum ColorIdentificationDomainError {
    #[error("user identity is invalid")]
    InvalidUserIdentity,

    #[error("color secret is not configured")]
    InvalidColorSecret,

    #[error("color identifier {0:#x} is outside the 24-bit range")]
    ColorOutOfRange(u32),

    #[error("request was not authorized")]
    MissingAuthorizerContext,

    #[error("unable to hash user identity into a color: {0}")]
    HashingError(String),
}
