#![forbid(unsafe_code)]
//! Chantemerle — réservation de créneaux dans un appartement partagé.
//!
//! - Détection de conflits entre intervalles de jours (bornes incluses).
//! - Grille mensuelle (semaines du lundi au dimanche).
//! - Client REST minimal (liste, création, suppression) ; l'état local
//!   n'est modifié qu'après confirmation du serveur.

pub mod calendar;
pub mod client;
pub mod config;
pub mod io;
pub mod model;
pub mod render;
pub mod reservation;
pub mod sample;
pub mod store;
pub mod sync;

pub use calendar::{build_month_grid, CalendarDay, CalendarMonth, CalendarWeek, DayState, MonthGrid};
pub use client::{ApiError, BookingApi, HttpBookingApi, MemoryApi};
pub use config::{Config, FallbackPolicy};
pub use model::{Booking, BookingId, BookingStatus, NewBooking};
pub use render::{CalendarRenderer, TextCalendar};
pub use reservation::{
    find_conflicts, has_conflict, validate_slot, Conflict, ConflictKind, SlotRequest,
    ValidationError,
};
pub use sample::sample_bookings;
pub use store::BookingStore;
pub use sync::{BookingService, RefreshOutcome, ServiceError};
