pub mod condominium;
