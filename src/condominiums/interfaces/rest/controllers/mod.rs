pub mod condominium_rest_controller;
