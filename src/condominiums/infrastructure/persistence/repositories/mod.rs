pub mod condominium_repository;
pub mod postgres;
