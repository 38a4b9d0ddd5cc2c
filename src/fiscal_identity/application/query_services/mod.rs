pub mod nif_verification_query_service_impl;
