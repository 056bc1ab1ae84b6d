use crate::model::BookingId;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    Overlap,        // au moins une nuit en commun
    SharedBoundary, // contact sur le premier ou le dernier jour
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub booking: BookingId,
    pub kind: ConflictKind,
}

/// Saisie brute du formulaire de réservation (dates éventuellement absentes).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlotRequest {
    pub name: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl SlotRequest {
    pub fn new<N: Into<String>>(name: N, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self {
            name: name.into(),
            start,
            end,
        }
    }
}

/// Erreurs de validation, affichées telles quelles dans le formulaire.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Veuillez entrer un nom")]
    EmptyName,
    #[error("Veuillez sélectionner une date de début")]
    MissingStart,
    #[error("Veuillez sélectionner une date de fin")]
    MissingEnd,
    #[error("La date de fin doit être après la date de début")]
    InvalidRange,
    #[error("Cette période chevauche une réservation existante (réservation {0})")]
    Conflict(BookingId),
}
