use super::errors::PurchaseError;
use super::ticket::{PriceTable, TicketType, TicketTypeRequest};

pub const MAX_TICKETS: u32 = 20;

/// Aggregates of one order. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PurchaseSummary {
    pub total_tickets: u64,
    pub adult_tickets: u64,
    pub total_price: u64,
    pub total_seats: u64,
}

impl PurchaseSummary {
    pub fn from_requests(requests: &[TicketTypeRequest], prices: &PriceTable) -> Self {
        requests
            .iter()
            .fold(PurchaseSummary::default(), |mut acc, r| {
                let quantity = r.quantity;
                acc.total_tickets = acc.total_tickets.saturating_add(quantity);
                if r.ticket_type == TicketType::Adult {
                    acc.adult_tickets = acc.adult_tickets.saturating_add(quantity);
                }
                if r.ticket_type.occupies_seat() {
                    acc.total_seats = acc.total_seats.saturating_add(quantity);
                }
                acc.total_price = acc
                    .total_price
                    .saturating_add(prices.price_of(r.ticket_type).saturating_mul(quantity));
                acc
            })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PurchaseRules {
    pub max_tickets: u32,
}

impl Default for PurchaseRules {
    fn default() -> Self {
        Self {
            max_tickets: MAX_TICKETS,
        }
    }
}

impl PurchaseRules {
    /// The ticket limit is checked before the adult rule. An order with no
    /// tickets at all passes.
    pub fn validate(&self, summary: &PurchaseSummary) -> Result<(), PurchaseError> {
        if summary.total_tickets > u64::from(self.max_tickets) {
            return Err(PurchaseError::ExceedsMaxTickets {
                requested: summary.total_tickets,
                max: self.max_tickets,
            });
        }
        if summary.total_tickets > 0 && summary.adult_tickets == 0 {
            return Err(PurchaseError::NoAdultPresent);
        }
        Ok(())
    }
}
