use chrono::Utc;
use condoflow_api::condominiums::domain::model::{
    commands::{
        create_condominium_command::CreateCondominiumCommand,
        update_condominium_command::UpdateCondominiumCommand,
    },
    entities::condominium::Condominium,
    value_objects::condominium_details::{CondominiumDetails, CondominiumDetailsParts},
};

pub const BOAVISTA_NIF: &str = "248915967";
pub const ALAMEDA_NIF: &str = "501442600";
pub const MARGINAL_NIF: &str = "123456789";

pub fn condominium_parts(name: &str, nif: &str, city: &str) -> CondominiumDetailsParts {
    CondominiumDetailsParts {
        name: name.to_string(),
        nif: nif.to_string(),
        address: "Avenida da Boavista 1200".to_string(),
        postal_code: "4100-130".to_string(),
        city: city.to_string(),
    }
}

pub fn create_command(nif: &str) -> CreateCondominiumCommand {
    CreateCondominiumCommand::new(condominium_parts("Edifício Boavista", nif, "Porto"))
        .expect("valid create command")
}

pub fn update_command(condominium: &Condominium, name: &str, nif: &str) -> UpdateCondominiumCommand {
    UpdateCondominiumCommand::new(
        condominium.id().to_string(),
        condominium_parts(name, nif, "Porto"),
    )
    .expect("valid update command")
}

pub fn registered_condominium(name: &str, nif: &str, city: &str) -> Condominium {
    Condominium::register(
        CondominiumDetails::new(condominium_parts(name, nif, city)).expect("valid details"),
        Utc::now(),
    )
}
