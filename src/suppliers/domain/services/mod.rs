pub mod supplier_command_service;
pub mod supplier_query_service;
