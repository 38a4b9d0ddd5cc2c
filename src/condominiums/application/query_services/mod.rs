pub mod condominium_query_service_impl;
