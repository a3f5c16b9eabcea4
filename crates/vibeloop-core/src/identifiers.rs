//! Core identifier types used across the VibeLoop client.
//!
//! The original data model keyed social relations by display name and
//! merged loop and event ids into one integer namespace. Both were
//! collision-prone, so identifiers here are explicit: authors get a
//! stable handle independent of their display name, and community ids
//! carry the kind they belong to.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

/// Stable handle for a user or post author.
///
/// Display names are mutable attributes; two users named "Aria" get two
/// distinct `AuthorId`s. Fixture authors use readable slug handles,
/// locally created identities use a random UUID string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(pub String);

impl AuthorId {
    /// Create a fresh random author id.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Create from a known handle (fixture slug or stored id).
    pub fn from_handle(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AuthorId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// An author as shown in feeds and member lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub display_name: String,
    /// Accent color associated with the author in the UI.
    pub color: String,
}

impl Author {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: AuthorId(id.into()),
            display_name: display_name.into(),
            color: color.into(),
        }
    }
}

/// Identifier of a dream record.
///
/// Derived from the creation timestamp in milliseconds, matching the
/// composer's id scheme. Uniqueness holds for a single local author,
/// which is the only writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DreamId(pub i64);

impl DreamId {
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for DreamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which fixture domain a joinable community comes from.
///
/// Loops and events both use small integer ids starting at 1, so the
/// kind is part of the identifier to keep `loop:3` and `event:3`
/// distinct in the joined set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CommunityKind {
    Loop,
    Event,
}

impl CommunityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Loop => "loop",
            Self::Event => "event",
        }
    }
}

/// Namespaced identifier of a joinable community.
///
/// Serialized as `"loop:3"` / `"event:3"`. Deserialization also accepts
/// a bare integer, the shape older persisted data used, and maps it to
/// the loop namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CommunityId {
    pub kind: CommunityKind,
    pub n: u32,
}

impl CommunityId {
    pub const fn loop_id(n: u32) -> Self {
        Self {
            kind: CommunityKind::Loop,
            n,
        }
    }

    pub const fn event_id(n: u32) -> Self {
        Self {
            kind: CommunityKind::Event,
            n,
        }
    }
}

impl fmt::Display for CommunityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind.as_str(), self.n)
    }
}

/// Error parsing a `CommunityId` from its string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid community id: {0:?}")]
pub struct ParseCommunityIdError(pub String);

impl FromStr for CommunityId {
    type Err = ParseCommunityIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, n) = s.split_once(':').ok_or_else(|| ParseCommunityIdError(s.to_string()))?;
        let kind = match kind {
            "loop" => CommunityKind::Loop,
            "event" => CommunityKind::Event,
            _ => return Err(ParseCommunityIdError(s.to_string())),
        };
        let n = n.parse::<u32>().map_err(|_| ParseCommunityIdError(s.to_string()))?;
        Ok(Self { kind, n })
    }
}

impl Serialize for CommunityId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CommunityId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct IdVisitor;

        impl serde::de::Visitor<'_> for IdVisitor {
            type Value = CommunityId;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a \"kind:n\" community id string or a bare integer")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(serde::de::Error::custom)
            }

            // Legacy persisted shape: a bare loop/event integer. Those
            // records predate event joining, so they map to the loop
            // namespace.
            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(CommunityId::loop_id)
                    .map_err(serde::de::Error::custom)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                u32::try_from(v)
                    .map(CommunityId::loop_id)
                    .map_err(serde::de::Error::custom)
            }
        }

        deserializer.deserialize_any(IdVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn community_id_roundtrip() {
        let id = CommunityId::event_id(3);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"event:3\"");
        let back: CommunityId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn community_id_accepts_legacy_integers() {
        let id: CommunityId = serde_json::from_str("3").unwrap();
        assert_eq!(id, CommunityId::loop_id(3));
    }

    #[test]
    fn community_id_rejects_garbage() {
        assert!(serde_json::from_str::<CommunityId>("\"party:3\"").is_err());
        assert!(serde_json::from_str::<CommunityId>("\"loop\"").is_err());
        assert!(serde_json::from_str::<CommunityId>("-1").is_err());
    }

    #[test]
    fn loop_and_event_with_same_number_are_distinct() {
        assert_ne!(CommunityId::loop_id(3), CommunityId::event_id(3));
    }

    #[test]
    fn author_ids_are_stable_handles() {
        let a = AuthorId::from_handle("aria");
        let b = AuthorId::from_handle("aria");
        assert_eq!(a, b);
        assert_ne!(AuthorId::random(), AuthorId::random());
    }
}
