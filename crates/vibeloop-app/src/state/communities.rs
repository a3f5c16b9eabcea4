//! The joined loops/events collection.
//!
//! Events reuse this collection: RSVP-less "join" on an event detail
//! screen inserts an `event:`-namespaced record into the same set. At
//! most one record per id; insertion order is newest-first.

use serde::{Deserialize, Serialize};
use vibeloop_core::CommunityId;

/// One joined community, as persisted under `vibeloop_joined_loops`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityRef {
    pub id: CommunityId,
    pub name: String,
    pub color: String,
}

impl CommunityRef {
    pub fn new(id: CommunityId, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
        }
    }
}

/// Migrate the oldest persisted shape: a plain array of integer ids.
///
/// Records of the `{id, name, color}` shape, including those with bare
/// integer ids, already decode canonically; only id-only arrays land
/// here. The fixture table is not consulted: names resolve lazily in
/// the views, so unknown ids keep an empty name and the fallback color.
pub fn migrate_joined(value: &serde_json::Value) -> Option<Vec<CommunityRef>> {
    let entries = value.as_array()?;
    entries
        .iter()
        .map(|entry| {
            let n = u32::try_from(entry.as_u64()?).ok()?;
            Some(CommunityRef::new(
                CommunityId::loop_id(n),
                "",
                vibeloop_core::FALLBACK_COLOR,
            ))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_shape_with_bare_integer_id_decodes_canonically() {
        let raw = r##"[{"id":3,"name":"Dream Journal Club","color":"#C5A9FF"}]"##;
        let refs: Vec<CommunityRef> = serde_json::from_str(raw).unwrap();
        assert_eq!(refs[0].id, CommunityId::loop_id(3));
        assert_eq!(refs[0].name, "Dream Journal Club");
    }

    #[test]
    fn id_only_arrays_migrate() {
        let value: serde_json::Value = serde_json::from_str("[2,5]").unwrap();
        let refs = migrate_joined(&value).unwrap();
        assert_eq!(refs.len(), 2);
        assert_eq!(refs[0].id, CommunityId::loop_id(2));
        assert!(refs[0].name.is_empty());
    }

    #[test]
    fn mixed_garbage_does_not_migrate() {
        let value: serde_json::Value = serde_json::from_str(r#"[2,"x"]"#).unwrap();
        assert!(migrate_joined(&value).is_none());
    }
}
