pub mod supplier_category;
pub mod supplier_domain_error;
