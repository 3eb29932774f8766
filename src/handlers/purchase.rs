use serde::{Deserialize, Serialize};

use crate::application::ticket_service::TicketService;
use crate::domain::errors::PurchaseError;
use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::domain::ticket::{AccountId, TicketType, TicketTypeRequest};
use crate::errors::AppError;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TicketLineRequest {
    /// One of "INFANT", "CHILD", "ADULT" (any case).
    #[serde(rename = "type")]
    pub ticket_type: String,
    pub quantity: u64,
}

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    pub account_id: i64,
    #[serde(default)]
    pub tickets: Vec<TicketLineRequest>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PurchaseReceipt {
    pub account_id: i64,
    pub total_tickets: u64,
    pub total_price: u64,
    pub seats_reserved: u64,
}

impl PurchaseRequest {
    pub fn into_domain(self) -> Result<(AccountId, Vec<TicketTypeRequest>), PurchaseError> {
        let requests = self
            .tickets
            .into_iter()
            .map(|l| {
                let ticket_type: TicketType = l.ticket_type.parse()?;
                Ok(TicketTypeRequest::new(ticket_type, l.quantity))
            })
            .collect::<Result<Vec<_>, PurchaseError>>()?;
        Ok((AccountId(self.account_id), requests))
    }
}

// ── Handler ──────────────────────────────────────────────────────────────────

/// Decode a JSON purchase request and run it through the service.
///
/// An unknown ticket type rejects the whole order before anything is priced.
pub fn handle_purchase<P, S>(
    body: &str,
    service: &TicketService<P, S>,
) -> Result<PurchaseReceipt, AppError>
where
    P: TicketPaymentService,
    S: SeatReservationService,
{
    let request: PurchaseRequest = serde_json::from_str(body)?;
    let (account_id, requests) = request.into_domain()?;

    service.purchase_tickets(account_id, &requests)?;
    let summary = service.quote(&requests)?;

    Ok(PurchaseReceipt {
        account_id: account_id.0,
        total_tickets: summary.total_tickets,
        total_price: summary.total_price,
        seats_reserved: summary.total_seats,
    })
}
