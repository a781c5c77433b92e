pub mod color_identification_error_response_resource;
pub mod color_identity_response_resource;
