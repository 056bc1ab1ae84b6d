//! Synchronisation avec le backend.
//!
//! L'état local n'est modifié qu'après confirmation du serveur ; en cas d'échec
//! l'erreur est remontée et un bandeau est positionné, sans deviner le résultat.

use crate::calendar::{build_month_grid, CalendarMonth, MonthGrid};
use crate::client::{ApiError, BookingApi};
use crate::config::FallbackPolicy;
use crate::model::{Booking, BookingId};
use crate::reservation::{SlotRequest, ValidationError};
use crate::sample::sample_bookings;
use crate::store::BookingStore;
use chrono::NaiveDate;
use thiserror::Error;

pub const BANNER_LOAD_FAILED: &str = "Impossible de charger les réservations";
pub const BANNER_CREATE_FAILED: &str = "Impossible de créer la réservation";
pub const BANNER_DELETE_FAILED: &str = "Impossible de supprimer la réservation";

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{banner}: {source}")]
    Remote {
        banner: &'static str,
        #[source]
        source: ApiError,
    },
}

/// Provenance des données après un rafraîchissement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    Remote(usize),
    Sample(usize),
}

/// Orchestration : backend → store → vues dérivées.
#[derive(Debug)]
pub struct BookingService<A> {
    api: A,
    store: BookingStore,
    fallback: FallbackPolicy,
    banner: Option<String>,
}

impl<A: BookingApi> BookingService<A> {
    pub fn new(api: A, fallback: FallbackPolicy) -> Self {
        Self {
            api,
            store: BookingStore::new(),
            fallback,
            banner: None,
        }
    }

    pub fn store(&self) -> &BookingStore {
        &self.store
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Message d'erreur générique à afficher, s'il y en a un.
    pub fn banner(&self) -> Option<&str> {
        self.banner.as_deref()
    }

    /// Recharge toute la liste ; en cas d'échec, repli éventuel sur l'exemple.
    pub fn refresh(&mut self) -> Result<RefreshOutcome, ServiceError> {
        match self.api.list() {
            Ok(bookings) => {
                let count = bookings.len();
                self.store.replace_all(bookings);
                self.banner = None;
                tracing::debug!(count, "bookings refreshed");
                Ok(RefreshOutcome::Remote(count))
            }
            Err(err) => {
                self.banner = Some(BANNER_LOAD_FAILED.to_string());
                match self.fallback {
                    FallbackPolicy::Sample => {
                        tracing::warn!(error = %err, "listing failed, using sample dataset");
                        self.store.replace_all(sample_bookings());
                        Ok(RefreshOutcome::Sample(self.store.len()))
                    }
                    FallbackPolicy::Fail => Err(ServiceError::Remote {
                        banner: BANNER_LOAD_FAILED,
                        source: err,
                    }),
                }
            }
        }
    }

    /// Valide la saisie contre le store puis crée côté serveur.
    ///
    /// Les erreurs de validation ne touchent pas au bandeau (elles sont propres au formulaire).
    pub fn create(&mut self, request: &SlotRequest) -> Result<Booking, ServiceError> {
        let payload = self.store.validate(request)?;
        match self.api.create(&payload) {
            Ok(created) => {
                tracing::debug!(id = %created.id, "booking created");
                self.store.insert(created.clone());
                self.banner = None;
                Ok(created)
            }
            Err(err) => {
                tracing::warn!(error = %err, "create failed, local state untouched");
                self.banner = Some(BANNER_CREATE_FAILED.to_string());
                Err(ServiceError::Remote {
                    banner: BANNER_CREATE_FAILED,
                    source: err,
                })
            }
        }
    }

    /// Supprime côté serveur puis localement ; renvoie la copie locale retirée.
    pub fn delete(&mut self, id: BookingId) -> Result<Option<Booking>, ServiceError> {
        match self.api.delete(id) {
            Ok(()) => {
                tracing::debug!(%id, "booking deleted");
                self.banner = None;
                Ok(self.store.remove(id))
            }
            Err(err) => {
                tracing::warn!(error = %err, %id, "delete failed, local state untouched");
                self.banner = Some(BANNER_DELETE_FAILED.to_string());
                Err(ServiceError::Remote {
                    banner: BANNER_DELETE_FAILED,
                    source: err,
                })
            }
        }
    }

    pub fn upcoming(&self, today: Option<NaiveDate>, limit: usize) -> Vec<&Booking> {
        self.store.upcoming(today, limit)
    }

    pub fn month_grid(&self, month: CalendarMonth, today: NaiveDate) -> anyhow::Result<MonthGrid> {
        build_month_grid(month, self.store.bookings(), today)
    }
}
