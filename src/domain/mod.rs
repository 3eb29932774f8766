pub mod errors;
pub mod ports;
pub mod purchase;
pub mod ticket;

pub use errors::PurchaseError;
pub use purchase::{PurchaseRules, PurchaseSummary, MAX_TICKETS};
pub use ticket::{AccountId, PriceTable, TicketType, TicketTypeRequest};
