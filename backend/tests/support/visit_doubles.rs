//! Recording and counting doubles for visit scenarios.
//!
//! Repositories delegate to the in-memory adapters so reads reflect earlier
//! writes, while counting `save` calls for assertions.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use courier::domain::ports::{
    ActivityLog, ShipmentRepository, ShipmentRepositoryError, UserRepository, UserRepositoryError,
};
use courier::domain::{Shipment, ShipmentId, User, UserId};
use courier::outbound::memory::{InMemoryShipmentRepository, InMemoryUserRepository};

pub struct CountingShipmentRepository {
    inner: InMemoryShipmentRepository,
    saves: AtomicUsize,
}

impl CountingShipmentRepository {
    pub fn new(shipments: Vec<Shipment>) -> Self {
        Self {
            inner: InMemoryShipmentRepository::new(shipments),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self, id: ShipmentId) -> Option<Shipment> {
        self.inner.snapshot(id)
    }
}

#[async_trait]
impl ShipmentRepository for CountingShipmentRepository {
    async fn find_by_id(
        &self,
        id: &ShipmentId,
    ) -> Result<Option<Shipment>, ShipmentRepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn save(&self, shipment: &Shipment) -> Result<(), ShipmentRepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(shipment).await
    }
}

pub struct CountingUserRepository {
    inner: InMemoryUserRepository,
    saves: AtomicUsize,
}

impl CountingUserRepository {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            inner: InMemoryUserRepository::new(users),
            saves: AtomicUsize::new(0),
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserRepository for CountingUserRepository {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserRepositoryError> {
        self.inner.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserRepositoryError> {
        self.inner.find_by_email(email).await
    }

    async fn save(&self, user: &User) -> Result<(), UserRepositoryError> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        self.inner.save(user).await
    }
}

/// Activity sink keeping every message in order.
#[derive(Default)]
pub struct RecordingActivityLog {
    entries: Mutex<Vec<String>>,
}

impl RecordingActivityLog {
    pub fn entries(&self) -> Vec<String> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl ActivityLog for RecordingActivityLog {
    fn info(&self, message: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(message.to_owned());
        }
    }
}
