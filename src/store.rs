use crate::model::{Booking, BookingId};
use chrono::NaiveDate;

/// Copie locale (transitoire) des réservations du backend.
#[derive(Debug, Clone, Default)]
pub struct BookingStore {
    bookings: Vec<Booking>,
}

impl BookingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_bookings(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Remplace tout le contenu (rafraîchissement complet).
    pub fn replace_all(&mut self, bookings: Vec<Booking>) {
        self.bookings = bookings;
    }

    /// Ajoute une réservation confirmée par le backend.
    pub fn insert(&mut self, booking: Booking) {
        self.bookings.push(booking);
    }

    /// Retire une réservation ; renvoie l'élément supprimé s'il existait.
    pub fn remove(&mut self, id: BookingId) -> Option<Booking> {
        let pos = self.bookings.iter().position(|b| b.id == id)?;
        Some(self.bookings.remove(pos))
    }

    pub fn find(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    /// Prochains occupants : tri chronologique par début, `limit` premiers.
    ///
    /// Avec `today`, les réservations déjà terminées (fin < today) sont écartées.
    pub fn upcoming(&self, today: Option<NaiveDate>, limit: usize) -> Vec<&Booking> {
        let mut out: Vec<&Booking> = self
            .bookings
            .iter()
            .filter(|b| today.map_or(true, |t| b.end >= t))
            .collect();
        out.sort_by_key(|b| (b.start, b.id));
        out.truncate(limit);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookingStatus;

    fn booking(id: u64, start: (i32, u32, u32), end: (i32, u32, u32)) -> Booking {
        Booking::new(
            BookingId::new(id),
            format!("occupant {id}"),
            NaiveDate::from_ymd_opt(start.0, start.1, start.2).unwrap(),
            NaiveDate::from_ymd_opt(end.0, end.1, end.2).unwrap(),
            BookingStatus::Booked,
        )
        .unwrap()
    }

    #[test]
    fn upcoming_sorts_and_truncates() {
        let store = BookingStore::from_bookings(vec![
            booking(1, (2025, 3, 1), (2025, 3, 8)),
            booking(2, (2025, 1, 1), (2025, 1, 8)),
            booking(3, (2025, 2, 1), (2025, 2, 8)),
        ]);
        let ids: Vec<u64> = store.upcoming(None, 2).iter().map(|b| b.id.get()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn upcoming_hides_finished_bookings() {
        let store = BookingStore::from_bookings(vec![
            booking(1, (2025, 1, 1), (2025, 1, 8)),
            booking(2, (2025, 2, 1), (2025, 2, 8)),
        ]);
        let today = NaiveDate::from_ymd_opt(2025, 1, 8).unwrap();
        assert_eq!(store.upcoming(Some(today), 10).len(), 2);
        let later = NaiveDate::from_ymd_opt(2025, 1, 9).unwrap();
        assert_eq!(store.upcoming(Some(later), 10).len(), 1);
    }

    #[test]
    fn remove_unknown_is_none() {
        let mut store = BookingStore::from_bookings(vec![booking(1, (2025, 1, 1), (2025, 1, 8))]);
        assert!(store.remove(BookingId::new(9)).is_none());
        assert!(store.remove(BookingId::new(1)).is_some());
        assert!(store.is_empty());
    }
}
