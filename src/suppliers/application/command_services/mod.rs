pub mod supplier_command_service_impl;
