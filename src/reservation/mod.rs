mod conflicts;
mod types;
mod util;
mod validate;

pub use types::{Conflict, ConflictKind, SlotRequest, ValidationError};

use crate::model::{Booking, NewBooking};
use crate::store::BookingStore;
use chrono::NaiveDate;

/// Vrai si `[start, end]` chevauche une réservation existante (bornes incluses).
///
/// Un intervalle vide ou inversé (`start >= end`) est rejeté avant toute comparaison.
pub fn has_conflict(
    start: NaiveDate,
    end: NaiveDate,
    existing: &[Booking],
) -> Result<bool, ValidationError> {
    conflicts::has_conflict(start, end, existing)
}

/// Liste toutes les réservations en conflit avec `[start, end]`, dans l'ordre de `existing`.
pub fn find_conflicts(
    start: NaiveDate,
    end: NaiveDate,
    existing: &[Booking],
) -> Result<Vec<Conflict>, ValidationError> {
    conflicts::find_conflicts(start, end, existing)
}

pub fn validate_slot(
    request: &SlotRequest,
    existing: &[Booking],
) -> Result<NewBooking, ValidationError> {
    validate::validate_slot(request, existing)
}

impl BookingStore {
    pub fn has_conflict(&self, start: NaiveDate, end: NaiveDate) -> Result<bool, ValidationError> {
        conflicts::has_conflict(start, end, self.bookings())
    }

    pub fn find_conflicts(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Conflict>, ValidationError> {
        conflicts::find_conflicts(start, end, self.bookings())
    }

    pub fn validate(&self, request: &SlotRequest) -> Result<NewBooking, ValidationError> {
        validate::validate_slot(request, self.bookings())
    }
}
