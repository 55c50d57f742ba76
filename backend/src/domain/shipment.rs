//! Shipment entity and its identifiers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Validation errors raised while constructing shipment values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShipmentValidationError {
    /// The identifier was not a positive integer.
    #[error("shipment id must be a positive integer")]
    InvalidId,
}

/// Stable shipment identifier assigned by the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ShipmentId(i64);

impl ShipmentId {
    /// Validate and wrap a raw identifier.
    ///
    /// # Examples
    /// ```
    /// use courier::domain::ShipmentId;
    ///
    /// assert!(ShipmentId::new(1).is_ok());
    /// assert!(ShipmentId::new(0).is_err());
    /// ```
    pub fn new(id: i64) -> Result<Self, ShipmentValidationError> {
        if id <= 0 {
            return Err(ShipmentValidationError::InvalidId);
        }
        Ok(Self(id))
    }

    /// Raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for ShipmentId {
    type Error = ShipmentValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ShipmentId> for i64 {
    fn from(value: ShipmentId) -> Self {
        value.0
    }
}

impl FromStr for ShipmentId {
    type Err = ShipmentValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .parse::<i64>()
            .map_err(|_| ShipmentValidationError::InvalidId)?;
        Self::new(raw)
    }
}

impl fmt::Display for ShipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shipment lifecycle status.
///
/// The status domain is open: any string the data layer or a visitor assigns
/// is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShipmentStatus(String);

impl ShipmentStatus {
    /// Wrap a status value.
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// Borrow the status text.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for ShipmentStatus {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ShipmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ShipmentStatus> for String {
    fn from(value: ShipmentStatus) -> Self {
        value.0
    }
}

/// A tracked consignment.
///
/// ## Invariants
/// - `id` is a positive integer owned by the data layer.
/// - `status` only changes through a visitor or the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    id: ShipmentId,
    tracking_number: String,
    sender: String,
    receiver: String,
    status: ShipmentStatus,
}

impl Shipment {
    /// Start building a shipment with the given identity.
    ///
    /// # Examples
    /// ```
    /// use courier::domain::{Shipment, ShipmentId};
    ///
    /// let id = ShipmentId::new(1).expect("valid id");
    /// let shipment = Shipment::builder(id, "TN1")
    ///     .sender("Acme")
    ///     .receiver("Ada")
    ///     .status("Processing")
    ///     .build();
    /// assert_eq!(shipment.status().as_str(), "Processing");
    /// ```
    pub fn builder(id: ShipmentId, tracking_number: impl Into<String>) -> ShipmentBuilder {
        ShipmentBuilder {
            id,
            tracking_number: tracking_number.into(),
            sender: String::new(),
            receiver: String::new(),
            status: ShipmentStatus::new(String::new()),
        }
    }

    pub fn id(&self) -> ShipmentId {
        self.id
    }

    pub fn tracking_number(&self) -> &str {
        self.tracking_number.as_str()
    }

    pub fn sender(&self) -> &str {
        self.sender.as_str()
    }

    pub fn receiver(&self) -> &str {
        self.receiver.as_str()
    }

    pub fn status(&self) -> &ShipmentStatus {
        &self.status
    }

    /// Return a copy carrying `status`, leaving `self` untouched.
    pub fn with_status(&self, status: ShipmentStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Builder for [`Shipment`].
#[derive(Debug, Clone)]
pub struct ShipmentBuilder {
    id: ShipmentId,
    tracking_number: String,
    sender: String,
    receiver: String,
    status: ShipmentStatus,
}

impl ShipmentBuilder {
    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = receiver.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = ShipmentStatus::new(status);
        self
    }

    pub fn build(self) -> Shipment {
        Shipment {
            id: self.id,
            tracking_number: self.tracking_number,
            sender: self.sender,
            receiver: self.receiver,
            status: self.status,
        }
    }
}
