//! The single user profile record.
//!
//! The avatar is a separate entry (`vibeloop_profile_avatar`) holding a
//! data-URI string, mirroring how the original kept large image data
//! out of the profile blob.

use serde::{Deserialize, Serialize};

/// Persisted under `vibeloop_profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserProfile {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    pub bio: String,
}

/// Shallow-merge patch; omitted fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub username: Option<String>,
    pub bio: Option<String>,
}

impl ProfilePatch {
    pub fn apply_to(&self, profile: &mut UserProfile) {
        if let Some(name) = &self.name {
            profile.name = name.clone();
        }
        if let Some(username) = &self.username {
            profile.username = Some(username.clone());
        }
        if let Some(bio) = &self.bio {
            profile.bio = bio.clone();
        }
    }
}
