pub mod tax_identification_number_validator;
