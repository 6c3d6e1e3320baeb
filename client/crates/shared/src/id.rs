//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! The backend assigns opaque string identifiers (the `_id` field of its
//! JSON documents), so the wrapper carries a `String` rather than a UUID.
//! Ids minted locally by the mock services are wall-clock-millis strings,
//! matching what the real backend hands back on create.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type ApplicationId = Id<markers::Application>;
///
/// let id = ApplicationId::from_raw("admin-app-id");
/// assert_eq!(id.as_str(), "admin-app-id");
/// ```
pub struct Id<T> {
    value: String,
    _marker: PhantomData<T>,
}

// Manual impls over `value` only; derives would demand the same traits
// of the phantom marker types.
impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_raw(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Id<T> {
    /// Wrap an identifier received from the backend
    pub fn from_raw(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// Mint a new identifier locally (mock create path)
    ///
    /// Wall-clock millis, the same shape the mock backend assigns.
    pub fn generate() -> Self {
        Self::from_raw(chrono::Utc::now().timestamp_millis().to_string())
    }

    /// Get the underlying string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying string
    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<&str> for Id<T> {
    fn from(value: &str) -> Self {
        Self::from_raw(value)
    }
}

impl<T> From<Id<T>> for String {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

// Serialize transparently as the raw string; manual impls keep the
// phantom marker out of the serde bounds.
impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::from_raw)
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for Application IDs
    pub struct Application;

    /// Marker for User IDs
    pub struct User;

    /// Marker for Role IDs
    pub struct Role;

    /// Marker for Menu node IDs
    pub struct Menu;
}

/// Type aliases for common IDs
pub type ApplicationId = Id<markers::Application>;
pub type UserId = Id<markers::User>;
pub type RoleId = Id<markers::Role>;
pub type MenuId = Id<markers::Menu>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let application_id: ApplicationId = Id::from_raw("1");
        let menu_id: MenuId = Id::from_raw("1");

        // These are different types, cannot be mixed
        let _a: String = application_id.into_string();
        let _m: String = menu_id.into_string();
    }

    #[test]
    fn test_clone_eq_hash_ignore_the_marker() {
        use std::collections::HashMap;

        let id: MenuId = Id::from_raw("2");
        let copy = id.clone();
        assert_eq!(id, copy);
        assert_ne!(id, MenuId::from_raw("3"));

        let mut index: HashMap<MenuId, usize> = HashMap::new();
        index.insert(copy, 0);
        assert_eq!(index.get(&id), Some(&0));
    }

    #[test]
    fn test_id_round_trip() {
        let id: UserId = Id::from_raw("superadmin-id");
        assert_eq!(id.as_str(), "superadmin-id");
        assert_eq!(id.to_string(), "superadmin-id");
    }

    #[test]
    fn test_generate_is_numeric() {
        let id: RoleId = Id::generate();
        assert!(!id.as_str().is_empty());
        assert!(id.as_str().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_serde_transparent() {
        let id: MenuId = Id::from_raw("6");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"6\"");

        let back: MenuId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
