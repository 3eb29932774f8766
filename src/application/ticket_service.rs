use crate::domain::errors::PurchaseError;
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::domain::purchase::{PurchaseRules, PurchaseSummary};
use crate::domain::ticket::{AccountId, PriceTable, TicketTypeRequest};

pub struct TicketService<P, S> {
    payment: P,
    seats: S,
    prices: PriceTable,
    rules: PurchaseRules,
}

impl<P: TicketPaymentService, S: SeatReservationService> TicketService<P, S> {
    pub fn new(payment: P, seats: S) -> Self {
        Self::with_rules(payment, seats, PurchaseRules::default())
    }

    pub fn with_rules(payment: P, seats: S, rules: PurchaseRules) -> Self {
        Self {
            payment,
            seats,
            prices: PriceTable::default(),
            rules,
        }
    }

    /// Validate and price an order without touching either collaborator.
    pub fn quote(&self, requests: &[TicketTypeRequest]) -> Result<PurchaseSummary, PurchaseError> {
        let summary = PurchaseSummary::from_requests(requests, &self.prices);
        self.rules.validate(&summary)?;
        Ok(summary)
    }

    /// Take payment for the order, then reserve its seats.
    ///
    /// Neither collaborator is called when validation fails. An order with no
    /// tickets still goes through both calls with zero amounts.
    pub fn purchase_tickets(
        &self,
        account_id: AccountId,
        requests: &[TicketTypeRequest],
    ) -> Result<(), PurchaseError> {
        let summary = self.quote(requests).inspect_err(|e| {
            log::warn!("Rejected purchase for account {}: {}", account_id, e);
        })?;

        self.payment.make_payment(account_id, summary.total_price);
        self.seats.reserve_seat(account_id, summary.total_seats);

        log::info!(
            "Purchased {} tickets for account {}: paid {}, reserved {} seats",
            summary.total_tickets,
            account_id,
            summary.total_price,
            summary.total_seats
        );
        Ok(())
    }
}
