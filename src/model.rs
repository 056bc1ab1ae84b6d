use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifiant fort pour Booking (attribué par le serveur)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(u64);

impl BookingId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Statut de confirmation d'une réservation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Booked,
    Tentative,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Booked => "booked",
            BookingStatus::Tentative => "tentative",
        }
    }
}

/// Réservation : intervalle de jours [start, end], bornes incluses.
///
/// La désérialisation passe par [`Booking::new`] : nom vide ou `end <= start` sont refusés.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBooking")]
pub struct Booking {
    pub id: BookingId,
    pub name: String,
    #[serde(serialize_with = "day::serialize")]
    pub start: NaiveDate,
    #[serde(serialize_with = "day::serialize")]
    pub end: NaiveDate,
    pub status: BookingStatus,
}

/// Forme brute reçue du backend, avant validation.
#[derive(Deserialize)]
struct RawBooking {
    id: BookingId,
    name: String,
    #[serde(deserialize_with = "day::deserialize")]
    start: NaiveDate,
    #[serde(deserialize_with = "day::deserialize")]
    end: NaiveDate,
    #[serde(default)]
    status: BookingStatus,
}

impl TryFrom<RawBooking> for Booking {
    type Error = String;

    fn try_from(raw: RawBooking) -> Result<Self, Self::Error> {
        Booking::new(raw.id, raw.name, raw.start, raw.end, raw.status)
            .map_err(|e| format!("booking {}: {e}", raw.id))
    }
}

impl Booking {
    /// Crée une réservation en validant que `end > start` et que le nom n'est pas vide.
    pub fn new<N: Into<String>>(
        id: BookingId,
        name: N,
        start: NaiveDate,
        end: NaiveDate,
        status: BookingStatus,
    ) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("booking name cannot be empty".to_string());
        }
        if end <= start {
            return Err("end must be strictly after start".to_string());
        }
        Ok(Self {
            id,
            name,
            start,
            end,
            status,
        })
    }

    /// Vrai si `date` tombe dans la réservation (bornes incluses).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Charge utile envoyée au backend (`POST /`) ; id et statut sont attribués côté serveur.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBooking {
    pub name: String,
    #[serde(with = "day")]
    pub start: NaiveDate,
    #[serde(with = "day")]
    pub end: NaiveDate,
}

/// Jours au format `YYYY-MM-DD` ; en lecture on tolère aussi un horodatage RFC3339.
mod day {
    use super::NaiveDate;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&date.format("%Y-%m-%d"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_day(&raw).map_err(de::Error::custom)
    }
}

/// Parse un jour `YYYY-MM-DD` ou un horodatage RFC3339 (partie date en UTC).
pub fn parse_day(raw: &str) -> Result<NaiveDate, String> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    raw.parse::<DateTime<Utc>>()
        .map(|dt| dt.date_naive())
        .map_err(|_| format!("invalid date: {raw}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn booking_rejects_inverted_range() {
        let err = Booking::new(BookingId::new(1), "Alice", d(2025, 1, 10), d(2025, 1, 10), BookingStatus::Booked);
        assert!(err.is_err());
    }

    #[test]
    fn deserializes_backend_payload_with_default_status() {
        let json = r#"{"id": 4, "name": "Alexis", "start": "2025-01-14", "end": "2025-01-26T00:00:00Z"}"#;
        let booking: Booking = serde_json::from_str(json).unwrap();
        assert_eq!(booking.id, BookingId::new(4));
        assert_eq!(booking.end, d(2025, 1, 26));
        assert_eq!(booking.status, BookingStatus::Booked);
    }

    #[test]
    fn deserialization_rejects_invalid_backend_rows() {
        let inverted = r#"[{"id": 1, "name": "Alice", "start": "2025-01-20", "end": "2025-01-10"}]"#;
        let err = serde_json::from_str::<Vec<Booking>>(inverted).unwrap_err();
        assert!(err.to_string().contains("booking 1"));

        let unnamed = r#"[{"id": 2, "name": "  ", "start": "2025-01-10", "end": "2025-01-20"}]"#;
        assert!(serde_json::from_str::<Vec<Booking>>(unnamed).is_err());
    }

    #[test]
    fn booking_roundtrips_as_plain_days() {
        let b = Booking::new(BookingId::new(3), "Aymeric", d(2025, 1, 31), d(2025, 2, 7), BookingStatus::Tentative).unwrap();
        let json = serde_json::to_string(&b).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"name":"Aymeric","start":"2025-01-31","end":"2025-02-07","status":"tentative"}"#
        );
        assert_eq!(serde_json::from_str::<Booking>(&json).unwrap(), b);
    }

    #[test]
    fn new_booking_serializes_plain_days() {
        let payload = NewBooking {
            name: "Pierre".into(),
            start: d(2025, 3, 15),
            end: d(2025, 3, 22),
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert_eq!(json, r#"{"name":"Pierre","start":"2025-03-15","end":"2025-03-22"}"#);
    }

    #[test]
    fn contains_is_inclusive() {
        let b = Booking::new(BookingId::new(1), "Alice", d(2025, 1, 10), d(2025, 1, 15), BookingStatus::Tentative).unwrap();
        assert!(b.contains(d(2025, 1, 10)));
        assert!(b.contains(d(2025, 1, 15)));
        assert!(!b.contains(d(2025, 1, 16)));
    }
}
