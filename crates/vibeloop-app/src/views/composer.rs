//! The dream composer form.
//!
//! Pure form state until submission; the only collections it touches
//! are written through [`AppCore::compose_dream`], which also auto-saves
//! the new dream and asks the feed to come forward.

use std::sync::Arc;

use vibeloop_core::Mood;

use crate::core::AppCore;
use crate::error::AppError;
use crate::state::{Dream, DreamDraft};

pub struct ComposerView {
    core: Arc<AppCore>,
    mood: Option<String>,
    text: String,
    image: Option<String>,
}

impl ComposerView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            mood: None,
            text: String::new(),
            image: None,
        }
    }

    /// Pick a mood from the catalog. Unknown names are ignored so the
    /// form can only ever submit a catalog mood.
    pub fn select_mood(&mut self, name: &str) {
        if Mood::by_name(name).is_some() {
            self.mood = Some(name.to_string());
        }
    }

    pub fn selected_mood(&self) -> Option<&str> {
        self.mood.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Attach an image as a data-URI string.
    pub fn attach_image(&mut self, data_uri: impl Into<String>) {
        self.image = Some(data_uri.into());
    }

    pub fn can_submit(&self) -> bool {
        self.mood.is_some() && !self.text.trim().is_empty()
    }

    /// Create the dream. Validation failures stay in the form; the
    /// caller keeps the view and shows the message inline.
    pub fn submit(&mut self) -> Result<Dream, AppError> {
        let mood = self
            .mood
            .clone()
            .ok_or_else(|| AppError::validation("mood", "pick a mood first"))?;
        if self.text.trim().is_empty() {
            return Err(AppError::validation("text", "write something first"));
        }
        let dream = self.core.compose_dream(DreamDraft {
            mood,
            text: std::mem::take(&mut self.text),
            image: self.image.take(),
        });
        self.mood = None;
        Ok(dream)
    }
}
