pub mod supplier_request_resource;
pub mod supplier_resource;
