use crate::model::{Booking, BookingId, BookingStatus};
use chrono::NaiveDate;

const SAMPLE: &[(u64, &str, &str, &str, BookingStatus)] = &[
    (1, "Alice", "2024-12-27", "2025-01-03", BookingStatus::Booked),
    (2, "Aymeric", "2025-07-11", "2025-07-14", BookingStatus::Booked),
    (3, "Aymeric", "2025-01-31", "2025-02-07", BookingStatus::Tentative),
    (4, "Alexis", "2025-01-14", "2025-01-26", BookingStatus::Booked),
    (5, "Del & Clery", "2025-01-25", "2025-02-02", BookingStatus::Booked),
    (6, "Brioist", "2025-02-14", "2025-02-21", BookingStatus::Booked),
    (7, "Sophie & Marc", "2025-03-01", "2025-03-08", BookingStatus::Booked),
    (8, "Pierre", "2025-03-15", "2025-03-22", BookingStatus::Tentative),
    (9, "Isabelle", "2025-04-05", "2025-04-12", BookingStatus::Booked),
    (10, "Thomas & Julie", "2025-04-20", "2025-04-27", BookingStatus::Booked),
    (11, "Nicolas", "2025-05-10", "2025-05-17", BookingStatus::Booked),
    (12, "Marie", "2025-05-24", "2025-05-31", BookingStatus::Tentative),
    (13, "Jean & Anne", "2025-06-07", "2025-06-14", BookingStatus::Booked),
    (14, "Laurent", "2025-06-21", "2025-06-28", BookingStatus::Booked),
    (15, "Claire", "2025-07-05", "2025-07-10", BookingStatus::Booked),
    (16, "Michel & Véronique", "2025-08-02", "2025-08-09", BookingStatus::Booked),
    (17, "Dominique", "2025-08-16", "2025-08-23", BookingStatus::Tentative),
    (18, "Fabrice", "2025-09-01", "2025-09-08", BookingStatus::Booked),
    (19, "Nathalie & Patrick", "2025-09-15", "2025-09-22", BookingStatus::Booked),
    (20, "Gérard", "2025-10-04", "2025-10-11", BookingStatus::Booked),
];

/// Jeu de données de repli, affiché quand le backend est injoignable.
pub fn sample_bookings() -> Vec<Booking> {
    SAMPLE
        .iter()
        .filter_map(|&(id, name, start, end, status)| {
            let start = NaiveDate::parse_from_str(start, "%Y-%m-%d").ok()?;
            let end = NaiveDate::parse_from_str(end, "%Y-%m-%d").ok()?;
            Booking::new(BookingId::new(id), name, start, end, status).ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_sample_row_is_valid() {
        let bookings = sample_bookings();
        assert_eq!(bookings.len(), SAMPLE.len());
        assert!(bookings.iter().all(|b| b.start < b.end));
    }
}
