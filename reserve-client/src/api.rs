//! Typed reservation API
//!
//! One generic CRUD surface over [`Resource`] plus the customer-scoped
//! booking query. Every update is a full replace: `PUT /{Resource}` with the
//! identity inside the body, never in the path.

use async_trait::async_trait;
use serde_json::Value;
use shared::models::{Booking, Resource};

use crate::{ClientResult, HttpClient, NetworkHttpClient};

/// Reservation backend operations
#[async_trait]
pub trait ReservationApi: Send + Sync {
    /// `GET /{R}`
    async fn list<R: Resource>(&self) -> ClientResult<Vec<R>>;

    /// `POST /{R}`; the echoed record carries the server assigned identity
    async fn create<R: Resource>(&self, record: &R) -> ClientResult<R>;

    /// `PUT /{R}` with `record` re-keyed to `id`
    async fn update<R: Resource>(&self, id: i64, record: R) -> ClientResult<R>;

    /// `DELETE /{R}/{id}`
    async fn delete<R: Resource>(&self, id: i64) -> ClientResult<()>;

    /// `GET /Booking/customer/{customer_id}`
    ///
    /// Never fails: any failure is logged and reads as "no bookings".
    async fn list_bookings_by_customer(&self, customer_id: i64) -> Vec<Booking>;
}

/// REST implementation of [`ReservationApi`]
#[derive(Debug, Clone)]
pub struct ReservationClient<H = NetworkHttpClient> {
    http: H,
}

impl<H: HttpClient> ReservationClient<H> {
    pub fn new(http: H) -> Self {
        Self { http }
    }

    /// Underlying transport
    pub fn http(&self) -> &H {
        &self.http
    }
}

#[async_trait]
impl<H: HttpClient> ReservationApi for ReservationClient<H> {
    async fn list<R: Resource>(&self) -> ClientResult<Vec<R>> {
        self.http.get(R::PATH).await
    }

    async fn create<R: Resource>(&self, record: &R) -> ClientResult<R> {
        let created: R = self.http.post(R::PATH, record).await?;
        tracing::info!(resource = R::PATH, id = ?created.id(), "Created");
        Ok(created)
    }

    async fn update<R: Resource>(&self, id: i64, record: R) -> ClientResult<R> {
        let body = record.with_id(id);
        let updated: R = self.http.put(R::PATH, &body).await?;
        tracing::info!(resource = R::PATH, id, "Updated");
        Ok(updated)
    }

    async fn delete<R: Resource>(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("{}/{}", R::PATH, id)).await?;
        tracing::info!(resource = R::PATH, id, "Deleted");
        Ok(())
    }

    async fn list_bookings_by_customer(&self, customer_id: i64) -> Vec<Booking> {
        let path = format!("{}/customer/{}", Booking::PATH, customer_id);
        match self.http.get::<Value>(&path).await {
            Ok(value @ Value::Array(_)) => match serde_json::from_value(value) {
                Ok(bookings) => bookings,
                Err(e) => {
                    tracing::error!(customer_id, error = %e, "Malformed bookings for customer");
                    Vec::new()
                }
            },
            Ok(_) => {
                tracing::error!(customer_id, "Bookings for customer is not a list");
                Vec::new()
            }
            Err(e) => {
                tracing::error!(customer_id, error = %e, "Error fetching bookings for customer");
                Vec::new()
            }
        }
    }
}
