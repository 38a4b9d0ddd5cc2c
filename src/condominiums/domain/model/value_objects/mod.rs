pub mod condominium_details;
pub mod condominium_id;
pub mod condominium_name;
pub mod postal_code;
