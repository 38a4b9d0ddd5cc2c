use chrono::Utc;
use condoflow_api::suppliers::domain::model::{
    commands::{
        create_supplier_command::CreateSupplierCommand,
        update_supplier_command::UpdateSupplierCommand,
    },
    entities::supplier::Supplier,
    value_objects::supplier_details::{SupplierDetails, SupplierDetailsParts},
};

pub const ELEVATOR_NIF: &str = "123456789";
pub const CLEANING_NIF: &str = "581348915";
pub const GARDEN_NIF: &str = "389982482";

pub fn supplier_parts(name: &str, nif: &str, category: &str) -> SupplierDetailsParts {
    SupplierDetailsParts {
        name: name.to_string(),
        nif: nif.to_string(),
        email: Some("geral@example.pt".to_string()),
        phone: Some("+351 912 345 678".to_string()),
        category: category.to_string(),
        address: Some("Rua das Flores 12, Porto".to_string()),
        notes: None,
    }
}

pub fn create_command(nif: &str) -> CreateSupplierCommand {
    CreateSupplierCommand::new(supplier_parts("Elevadores Norte", nif, "elevators"))
        .expect("valid create command")
}

pub fn update_command(supplier: &Supplier, name: &str, nif: &str) -> UpdateSupplierCommand {
    UpdateSupplierCommand::new(
        supplier.id().to_string(),
        supplier_parts(name, nif, "maintenance"),
    )
    .expect("valid update command")
}

pub fn registered_supplier(name: &str, nif: &str, category: &str) -> Supplier {
    Supplier::register(
        SupplierDetails::new(supplier_parts(name, nif, category)).expect("valid details"),
        Utc::now(),
    )
}
