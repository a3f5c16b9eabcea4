//! The onboarding flow.
//!
//! Four steps: welcome, personal, intentions, mood. Only the mood step
//! gates completion; a skipped name (and every other skipped field)
//! falls back to the signup defaults. Completion seals the record and
//! the session routes to the feed.

use std::sync::Arc;

use vibeloop_core::Mood;

use crate::core::AppCore;
use crate::error::AppError;
use crate::state::{OnboardingForm, OnboardingRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OnboardingStep {
    #[default]
    Welcome,
    Personal,
    Intentions,
    Mood,
}

pub struct OnboardingView {
    core: Arc<AppCore>,
    step: OnboardingStep,
    form: OnboardingForm,
}

impl OnboardingView {
    pub fn new(core: Arc<AppCore>) -> Self {
        Self {
            core,
            step: OnboardingStep::Welcome,
            form: OnboardingForm::default(),
        }
    }

    pub fn step(&self) -> OnboardingStep {
        self.step
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.form.name = name.into();
    }

    pub fn set_age_range(&mut self, id: impl Into<String>) {
        self.form.age_range = id.into();
    }

    pub fn toggle_seeking(&mut self, id: &str) {
        if let Some(pos) = self.form.seeking_for.iter().position(|s| s == id) {
            self.form.seeking_for.remove(pos);
        } else {
            self.form.seeking_for.push(id.to_string());
        }
    }

    pub fn set_expression_style(&mut self, id: impl Into<String>) {
        self.form.expression_style = id.into();
    }

    /// Pick the initial mood by its lowercase catalog id.
    pub fn select_mood(&mut self, id: &str) {
        if Mood::by_id(id).is_some() {
            self.form.mood_id = Some(id.to_string());
        }
    }

    /// Advance one step. Every field on the way is skippable; the
    /// defaults land at completion.
    pub fn next(&mut self) -> OnboardingStep {
        self.step = match self.step {
            OnboardingStep::Welcome => OnboardingStep::Personal,
            OnboardingStep::Personal => OnboardingStep::Intentions,
            OnboardingStep::Intentions | OnboardingStep::Mood => OnboardingStep::Mood,
        };
        self.step
    }

    pub fn back(&mut self) -> OnboardingStep {
        self.step = match self.step {
            OnboardingStep::Welcome | OnboardingStep::Personal => OnboardingStep::Welcome,
            OnboardingStep::Intentions => OnboardingStep::Personal,
            OnboardingStep::Mood => OnboardingStep::Intentions,
        };
        self.step
    }

    pub fn can_complete(&self) -> bool {
        self.form.mood_id.is_some()
    }

    /// Seal the record. The mood pick is the one gate; the error stays
    /// in the form as inline state so the step can keep prompting.
    pub fn complete(&self) -> Result<OnboardingRecord, AppError> {
        if self.form.mood_id.is_none() {
            return Err(AppError::validation("mood", "pick a mood first"));
        }
        Ok(self.core.complete_onboarding(self.form.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_mood_step_gates_completion() {
        let core = AppCore::in_memory();
        let mut flow = OnboardingView::new(core);

        // an empty name never blocks progression
        assert_eq!(flow.next(), OnboardingStep::Personal);
        assert_eq!(flow.next(), OnboardingStep::Intentions);
        assert_eq!(flow.next(), OnboardingStep::Mood);

        assert!(!flow.can_complete());
        let err = flow.complete().unwrap_err();
        assert!(matches!(err, AppError::Validation { field: "mood", .. }));
        // the flow is still live and completes once a mood is picked
        flow.select_mood("peaceful");
        assert!(flow.can_complete());
        assert!(flow.complete().is_ok());
    }

    #[test]
    fn skipped_name_falls_back_to_traveler() {
        let core = AppCore::in_memory();
        let mut flow = OnboardingView::new(core.clone());
        flow.next();
        flow.next();
        flow.next();
        flow.select_mood("calm");

        let record = flow.complete().unwrap();
        assert_eq!(record.user_name, "Traveler");
        assert_eq!(core.display_name(), "Traveler");
    }

    #[test]
    fn full_walkthrough_seals_the_record() {
        let core = AppCore::in_memory();
        let mut flow = OnboardingView::new(core.clone());

        flow.next();
        flow.set_name("Sam");
        flow.next();
        flow.set_age_range("25-34");
        flow.toggle_seeking("connection");
        flow.set_expression_style("words");
        flow.next();
        flow.select_mood("calm");

        let record = flow.complete().unwrap();
        assert!(record.has_onboarded);
        assert_eq!(record.user_name, "Sam");
        assert_eq!(record.age_range, "25-34");
        assert_eq!(record.seeking_for, vec!["connection"]);
        assert_eq!(record.initial_mood, "Calm");
        assert!(core.has_onboarded());
    }

    #[test]
    fn seeking_toggle_is_symmetric() {
        let core = AppCore::in_memory();
        let mut flow = OnboardingView::new(core);
        flow.toggle_seeking("healing");
        flow.toggle_seeking("creativity");
        flow.toggle_seeking("healing");
        assert_eq!(flow.form.seeking_for, vec!["creativity"]);
    }

    #[test]
    fn back_never_goes_before_welcome() {
        let core = AppCore::in_memory();
        let mut flow = OnboardingView::new(core);
        assert_eq!(flow.back(), OnboardingStep::Welcome);
        flow.next();
        assert_eq!(flow.back(), OnboardingStep::Welcome);
    }
}
