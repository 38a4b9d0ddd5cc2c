pub mod postgres;
pub mod supplier_repository;
