pub mod email_address;
pub mod phone_number;
pub mod supplier_details;
pub mod supplier_id;
pub mod supplier_name;
