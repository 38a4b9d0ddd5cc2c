pub mod fiscal_identity_rest_controller;
