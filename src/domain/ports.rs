use std::sync::Arc;

use super::ticket::AccountId;

/// Third-party payment gateway. A call always succeeds; the gateway panics on
/// anything it cannot handle.
pub trait TicketPaymentService: Send + Sync + 'static {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64);
}

/// Third-party seat booking. Same contract as the payment gateway.
pub trait SeatReservationService: Send + Sync + 'static {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64);
}

impl<T: TicketPaymentService + ?Sized> TicketPaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount_to_pay: u64) {
        (**self).make_payment(account_id, total_amount_to_pay)
    }
}

impl<T: SeatReservationService + ?Sized> SeatReservationService for Arc<T> {
    fn reserve_seat(&self, account_id: AccountId, total_seats_to_allocate: u64) {
        (**self).reserve_seat(account_id, total_seats_to_allocate)
    }
}
