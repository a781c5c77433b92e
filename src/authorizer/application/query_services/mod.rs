pub mod authorizer_query_service_impl;
