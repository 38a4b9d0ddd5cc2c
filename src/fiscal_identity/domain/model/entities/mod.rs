pub mod nif_verification;
