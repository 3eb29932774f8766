pub mod logging_gateways;
