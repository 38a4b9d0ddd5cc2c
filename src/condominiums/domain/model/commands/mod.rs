pub mod create_condominium_command;
pub mod delete_condominium_command;
pub mod update_condominium_command;
