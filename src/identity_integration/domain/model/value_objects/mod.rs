pub mod anonymous_user_id;
pub mod verification_claim;
