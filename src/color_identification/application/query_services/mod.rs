pub mod color_identification_query_service_impl;
