mod support;

mod supplier_endpoint_tests;
