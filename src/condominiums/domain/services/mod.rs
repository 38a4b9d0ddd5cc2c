pub mod condominium_command_service;
pub mod condominium_query_service;
