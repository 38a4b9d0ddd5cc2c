pub mod nif_verification_resource;
