pub mod color_identifier;
pub mod color_secret;
pub mod user_identity;
