pub mod authorizer_gate;
pub mod cors_policy;
