use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PurchaseError {
    #[error("Exceeded maximum number of tickets per purchase ({requested} requested, limit {max}).")]
    ExceedsMaxTickets { requested: u64, max: u32 },
    #[error("At least one adult ticket is required for the purchase.")]
    NoAdultPresent,
    #[error("Invalid ticket type: {0}")]
    InvalidTicketType(String),
}
