pub mod opaque_token;
pub mod resource_identifier;
