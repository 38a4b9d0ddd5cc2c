pub mod supplier_query_service_impl;
