use crate::domain::ports::{SeatReservationService, TicketPaymentService};
use crate::domain::ticket::AccountId;

/// Payment gateway stand-in that records the charge in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPaymentGateway;

impl TicketPaymentService for LoggingPaymentGateway {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        log::info!(
            "payment: charged account {} amount {}",
            account_id,
            total_amount_to_pay
        );
    }
}

/// Seat booking stand-in that records the reservation in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSeatReservation;

impl SeatReservationService for LoggingSeatReservation {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        log::info!(
            "seats: reserved {} seats for account {}",
            total_seats_to_allocate,
            account_id
        );
    }
}
