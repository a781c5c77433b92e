pub mod authorizer_query_service;
