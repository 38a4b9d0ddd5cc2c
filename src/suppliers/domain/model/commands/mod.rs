pub mod create_supplier_command;
pub mod delete_supplier_command;
pub mod update_supplier_command;
