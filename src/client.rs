use crate::config::Config;
use crate::model::{Booking, BookingId, BookingStatus, NewBooking};
use reqwest::blocking::{Client, Response};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend answered {status} for {method} {url}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
    },
    #[error("unknown booking: {0}")]
    NotFound(BookingId),
}

/// Contrat REST minimal du backend : liste, création, suppression.
pub trait BookingApi {
    /// `GET /`
    fn list(&self) -> Result<Vec<Booking>, ApiError>;
    /// `POST /` ; le serveur attribue l'id et le statut.
    fn create(&mut self, booking: &NewBooking) -> Result<Booking, ApiError>;
    /// `DELETE /{id}` ; un 2xx vaut succès.
    fn delete(&mut self, id: BookingId) -> Result<(), ApiError>;
}

/// Client HTTP bloquant vers le backend.
#[derive(Debug, Clone)]
pub struct HttpBookingApi {
    client: Client,
    base_url: String,
}

impl HttpBookingApi {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Réutilise un client déjà configuré (proxy, en-têtes, TLS).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.timeout())
    }

    pub fn collection_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn item_url(&self, id: BookingId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

fn ensure_success(method: &'static str, url: &str, resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(ApiError::Status {
            method,
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    Ok(resp)
}

impl BookingApi for HttpBookingApi {
    fn list(&self) -> Result<Vec<Booking>, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, "listing bookings");
        let resp = ensure_success("GET", &url, self.client.get(&url).send()?)?;
        Ok(resp.json()?)
    }

    fn create(&mut self, booking: &NewBooking) -> Result<Booking, ApiError> {
        let url = self.collection_url();
        tracing::debug!(%url, name = %booking.name, "creating booking");
        let resp = ensure_success("POST", &url, self.client.post(&url).json(booking).send()?)?;
        Ok(resp.json()?)
    }

    fn delete(&mut self, id: BookingId) -> Result<(), ApiError> {
        let url = self.item_url(id);
        tracing::debug!(%url, "deleting booking");
        ensure_success("DELETE", &url, self.client.delete(&url).send()?)?;
        Ok(())
    }
}

/// Backend en mémoire (jeu de données hors-ligne, tests).
#[derive(Debug, Clone, Default)]
pub struct MemoryApi {
    bookings: Vec<Booking>,
}

impl MemoryApi {
    pub fn new(bookings: Vec<Booking>) -> Self {
        Self { bookings }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    fn next_id(&self) -> BookingId {
        let max = self.bookings.iter().map(|b| b.id.get()).max().unwrap_or(0);
        BookingId::new(max + 1)
    }
}

impl BookingApi for MemoryApi {
    fn list(&self) -> Result<Vec<Booking>, ApiError> {
        Ok(self.bookings.clone())
    }

    fn create(&mut self, booking: &NewBooking) -> Result<Booking, ApiError> {
        let created = Booking {
            id: self.next_id(),
            name: booking.name.clone(),
            start: booking.start,
            end: booking.end,
            status: BookingStatus::Booked,
        };
        self.bookings.push(created.clone());
        Ok(created)
    }

    fn delete(&mut self, id: BookingId) -> Result<(), ApiError> {
        let pos = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(ApiError::NotFound(id))?;
        self.bookings.remove(pos);
        Ok(())
    }
}
