//! Hand-off of confirmed bookings to the reservation service.

use std::cell::RefCell;

use maison_domain::Confirmation;

/// Receives each successful submission exactly once.
///
/// The hand-off is fire-and-forget: implementations report their own
/// failures and never block the wizard from reaching its confirmation view.
pub trait ReservationDispatcher {
    fn dispatch(&self, confirmation: &Confirmation);
}

impl<T: ReservationDispatcher + ?Sized> ReservationDispatcher for &T {
    fn dispatch(&self, confirmation: &Confirmation) {
        (**self).dispatch(confirmation)
    }
}

impl<T: ReservationDispatcher + ?Sized> ReservationDispatcher for Box<T> {
    fn dispatch(&self, confirmation: &Confirmation) {
        (**self).dispatch(confirmation)
    }
}

/// Emits the booking as a structured tracing event.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDispatcher;

impl ReservationDispatcher for LogDispatcher {
    fn dispatch(&self, confirmation: &Confirmation) {
        tracing::info!(
            target: "maison::reservations",
            reference = %confirmation.reference(),
            room = %confirmation.room().id,
            check_in = %confirmation.check_in(),
            check_out = %confirmation.check_out(),
            nights = confirmation.nights(),
            adults = confirmation.guests().adults(),
            children = confirmation.guests().children(),
            "reservation handed off"
        );
    }
}

/// Keeps every dispatched confirmation in memory.
#[derive(Debug, Default)]
pub struct RecordingDispatcher {
    sent: RefCell<Vec<Confirmation>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn sent(&self) -> Vec<Confirmation> {
        self.sent.borrow().clone()
    }
}

impl ReservationDispatcher for RecordingDispatcher {
    fn dispatch(&self, confirmation: &Confirmation) {
        self.sent.borrow_mut().push(confirmation.clone());
    }
}
