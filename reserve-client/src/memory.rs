//! In-process reservation backend
//!
//! Honours the same contract as the REST service (server assigned ids and
//! booking numbers, full replace on update, 404 for unknown ids) without a
//! network. Every call is recorded with the JSON body the REST client
//! would have sent, and failures can be injected per request.
//!
//! Requires the "in-memory" feature.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use shared::models::{Booking, Resource};

use crate::{ClientError, ClientResult, ReservationApi};

/// First booking number handed out
const FIRST_BOOKING_NUMBER: i64 = 1001;

/// A request as it would have gone over the wire
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Debug, Default)]
struct Store {
    collections: HashMap<&'static str, Vec<Value>>,
    /// Last identity handed out, per collection
    last_ids: HashMap<&'static str, i64>,
    next_booking_number: i64,
    calls: Vec<RecordedCall>,
    failures: VecDeque<(&'static str, String)>,
}

impl Store {
    fn record(&mut self, method: &'static str, path: String, body: Option<Value>) -> ClientResult<()> {
        let failure = self
            .failures
            .iter()
            .position(|(m, p)| *m == method && *p == path);
        self.calls.push(RecordedCall { method, path, body });
        match failure {
            Some(index) => {
                self.failures.remove(index);
                Err(ClientError::Status {
                    status: 500,
                    message: "injected failure".into(),
                })
            }
            None => Ok(()),
        }
    }

    fn insert(&mut self, path: &'static str, mut value: Value) -> Value {
        let id = self.last_ids.entry(path).or_default();
        *id += 1;
        value["id"] = Value::from(*id);
        if path == Booking::PATH && value.get("bookingNumber").is_none_or(Value::is_null) {
            value["bookingNumber"] = Value::from(self.next_booking_number);
            self.next_booking_number += 1;
        }
        self.collections.entry(path).or_default().push(value.clone());
        value
    }
}

fn id_of(value: &Value) -> Option<i64> {
    value.get("id").and_then(Value::as_i64)
}

/// In-memory implementation of [`ReservationApi`]
#[derive(Debug)]
pub struct InMemoryApi {
    store: Mutex<Store>,
    latency: Mutex<Option<Duration>>,
}

impl Default for InMemoryApi {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryApi {
    pub fn new() -> Self {
        Self {
            store: Mutex::new(Store {
                next_booking_number: FIRST_BOOKING_NUMBER,
                ..Store::default()
            }),
            latency: Mutex::new(None),
        }
    }

    fn store(&self) -> MutexGuard<'_, Store> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Insert a record directly (no call recorded); returns it with its new id
    pub fn seed<R: Resource>(&self, record: R) -> ClientResult<R> {
        let value = serde_json::to_value(&record)?;
        let stored = self.store().insert(R::PATH, value);
        Ok(serde_json::from_value(stored)?)
    }

    /// Current contents of a collection
    pub fn records<R: Resource>(&self) -> ClientResult<Vec<R>> {
        let values = self
            .store()
            .collections
            .get(R::PATH)
            .cloned()
            .unwrap_or_default();
        Ok(serde_json::from_value(Value::Array(values))?)
    }

    /// Every call made so far, oldest first
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.store().calls.clone()
    }

    /// Calls matching a method, e.g. `"POST"`
    pub fn calls_with_method(&self, method: &str) -> Vec<RecordedCall> {
        self.store()
            .calls
            .iter()
            .filter(|c| c.method == method)
            .cloned()
            .collect()
    }

    /// Forget recorded calls
    pub fn clear_calls(&self) {
        self.store().calls.clear();
    }

    /// Make the next `method` request to `path` fail with a 500
    pub fn fail_next(&self, method: &'static str, path: impl Into<String>) {
        self.store().failures.push_back((method, path.into()));
    }

    /// Delay every mutating call, to observe requests in flight
    pub fn set_latency(&self, latency: Option<Duration>) {
        *self.latency.lock().unwrap_or_else(PoisonError::into_inner) = latency;
    }

    async fn wait(&self) {
        let latency = *self.latency.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(latency) = latency {
            tokio::time::sleep(latency).await;
        }
    }
}

#[async_trait]
impl ReservationApi for InMemoryApi {
    async fn list<R: Resource>(&self) -> ClientResult<Vec<R>> {
        let values = {
            let mut store = self.store();
            store.record("GET", R::PATH.to_string(), None)?;
            store.collections.get(R::PATH).cloned().unwrap_or_default()
        };
        Ok(serde_json::from_value(Value::Array(values))?)
    }

    async fn create<R: Resource>(&self, record: &R) -> ClientResult<R> {
        let body = serde_json::to_value(record)?;
        self.store().record("POST", R::PATH.to_string(), Some(body.clone()))?;
        self.wait().await;

        let stored = self.store().insert(R::PATH, body);
        Ok(serde_json::from_value(stored)?)
    }

    async fn update<R: Resource>(&self, id: i64, record: R) -> ClientResult<R> {
        let mut body = serde_json::to_value(record.with_id(id))?;
        self.store().record("PUT", R::PATH.to_string(), Some(body.clone()))?;
        self.wait().await;

        let mut store = self.store();
        let collection = store.collections.entry(R::PATH).or_default();
        let existing = collection
            .iter_mut()
            .find(|v| id_of(v) == Some(id))
            .ok_or_else(|| ClientError::NotFound(format!("{} {}", R::PATH, id)))?;

        // Booking number stays server owned across replaces
        if let Some(number) = existing.get("bookingNumber").cloned() {
            body["bookingNumber"] = number;
        }
        *existing = body.clone();
        Ok(serde_json::from_value(body)?)
    }

    async fn delete<R: Resource>(&self, id: i64) -> ClientResult<()> {
        self.store().record("DELETE", format!("{}/{}", R::PATH, id), None)?;
        self.wait().await;

        let mut store = self.store();
        let collection = store.collections.entry(R::PATH).or_default();
        let before = collection.len();
        collection.retain(|v| id_of(v) != Some(id));
        if collection.len() == before {
            return Err(ClientError::NotFound(format!("{} {}", R::PATH, id)));
        }
        Ok(())
    }

    async fn list_bookings_by_customer(&self, customer_id: i64) -> Vec<Booking> {
        let path = format!("{}/customer/{}", Booking::PATH, customer_id);
        let values = {
            let mut store = self.store();
            if let Err(e) = store.record("GET", path, None) {
                tracing::error!(customer_id, error = %e, "Error fetching bookings for customer");
                return Vec::new();
            }
            store
                .collections
                .get(Booking::PATH)
                .cloned()
                .unwrap_or_default()
        };

        values
            .into_iter()
            .filter_map(|v| serde_json::from_value::<Booking>(v).ok())
            .filter(|b| b.customer_id == customer_id)
            .collect()
    }
}
