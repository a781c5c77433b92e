pub mod grpc_identity_verification_facade_impl;
