pub mod tax_identification_number;
