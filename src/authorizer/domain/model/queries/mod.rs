pub mod authorize_token_query;
