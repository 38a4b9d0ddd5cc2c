pub mod condominium_domain_error;
