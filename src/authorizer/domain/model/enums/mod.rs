pub mod authorization_decision;
pub mod authorizer_domain_error;
pub mod claim_validation_policy;
