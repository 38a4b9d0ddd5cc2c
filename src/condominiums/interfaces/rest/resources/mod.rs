pub mod condominium_request_resource;
pub mod condominium_resource;
