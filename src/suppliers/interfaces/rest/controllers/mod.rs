pub mod supplier_rest_controller;
