pub mod condominiums;
pub mod config;
pub mod fiscal_identity;
pub mod shared;
pub mod suppliers;
