pub mod authorizer;
pub mod color_identification;
pub mod config;
pub mod identity_integration;
pub mod shared;
pub mod identity_grpc {
    tonic::include_proto!("identity_verification");
}
