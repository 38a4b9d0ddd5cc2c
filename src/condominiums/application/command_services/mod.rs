pub mod condominium_command_service_impl;
