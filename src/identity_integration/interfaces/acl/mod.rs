pub mod identity_verification_facade;
