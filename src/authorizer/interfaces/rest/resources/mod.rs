pub mod authorize_request_resource;
pub mod authorizer_error_response_resource;
pub mod authorizer_policy_resource;
