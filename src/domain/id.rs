//! Domain identifier types with proper encapsulation.
//!
//! Every clinic entity is keyed by an engine-assigned integer. Each key gets
//! its own newtype so a pet id cannot be passed where a client id is
//! expected.

use std::fmt;

/// Client identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClientId(i32);

impl ClientId {
    /// Create a new `ClientId` from a raw key.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ClientId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Pet identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PetId(i32);

impl PetId {
    /// Create a new `PetId` from a raw key.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for PetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for PetId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Veterinarian identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VetId(i32);

impl VetId {
    /// Create a new `VetId` from a raw key.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for VetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for VetId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Appointment identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppointmentId(i32);

impl AppointmentId {
    /// Create a new `AppointmentId` from a raw key.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for AppointmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for AppointmentId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Product identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ProductId(i32);

impl ProductId {
    /// Create a new `ProductId` from a raw key.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for ProductId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Sale identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SaleId(i32);

impl SaleId {
    /// Create a new `SaleId` from a raw key.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for SaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for SaleId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

/// Treatment identifier - newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreatmentId(i32);

impl TreatmentId {
    /// Create a new `TreatmentId` from a raw key.
    #[must_use]
    pub fn new(id: i32) -> Self {
        Self(id)
    }

    /// Get the raw key value.
    #[must_use]
    pub fn value(self) -> i32 {
        self.0
    }
}

impl fmt::Display for TreatmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for TreatmentId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_raw_values() {
        assert_eq!(ClientId::new(7).value(), 7);
        assert_eq!(PetId::from(3).value(), 3);
        assert_eq!(AppointmentId::new(42).to_string(), "42");
    }

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(SaleId::new(1), SaleId::from(1));
        assert_ne!(TreatmentId::new(1), TreatmentId::new(2));
    }
}
