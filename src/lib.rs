pub mod application;
pub mod config;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod infrastructure;

use std::io::Read;

pub use application::ticket_service::TicketService;
pub use config::Config;
pub use errors::AppError;
pub use handlers::purchase::{handle_purchase, PurchaseReceipt};
use infrastructure::logging_gateways::{LoggingPaymentGateway, LoggingSeatReservation};

/// Read one order and purchase it against the logging gateways.
///
/// The order comes from `config.order_file` when set, otherwise from `input`.
pub fn run<R: Read>(config: &Config, mut input: R) -> Result<PurchaseReceipt, AppError> {
    let body = match &config.order_file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            input.read_to_string(&mut buf)?;
            buf
        }
    };

    let service = TicketService::with_rules(
        LoggingPaymentGateway,
        LoggingSeatReservation,
        config.purchase_rules(),
    );
    handle_purchase(&body, &service)
}
