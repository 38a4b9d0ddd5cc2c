pub mod nif_verdict;
pub mod tax_identification_number_error;
