use serde::Serialize;

use super::{
    compose_greeting, compose_intention_line, compose_subheading, QuickLink, TimeContext,
    QUICK_LINKS,
};

/// Form state of a single page.
///
/// Drafts follow the inputs; `saved_name` and `intention` only change on
/// [`UserState::submit`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserState {
    pub name_draft: String,
    pub focus_draft: String,
    pub saved_name: String,
    pub intention: String,
}

impl UserState {
    pub fn set_name_draft(&mut self, value: impl Into<String>) {
        self.name_draft = value.into();
    }

    pub fn set_focus_draft(&mut self, value: impl Into<String>) {
        self.focus_draft = value.into();
    }

    /// Commits both drafts, trimmed. Blank drafts clear the committed values.
    pub fn submit(&mut self) {
        self.saved_name = self.name_draft.trim().to_string();
        self.intention = self.focus_draft.trim().to_string();
    }

    pub fn is_submitted(&self) -> bool {
        !self.saved_name.is_empty() || !self.intention.is_empty()
    }
}

/// Everything the page displays, recomputed from the current state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInView {
    pub greeting: String,
    pub subheading: String,
    pub intention_line: String,
    pub suggestion: &'static str,
    pub quick_links: &'static [QuickLink],
}

impl CheckInView {
    pub fn new(context: &TimeContext, state: &UserState) -> Self {
        Self {
            greeting: compose_greeting(&context.day_name, &state.name_draft, &state.saved_name),
            subheading: compose_subheading(context, &state.intention),
            intention_line: compose_intention_line(&state.intention),
            suggestion: context.suggestion(),
            quick_links: &QUICK_LINKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::{derive_time_context, INTENTION_NUDGE};

    fn monday() -> TimeContext {
        derive_time_context(datetime!(2024-03-04 10:00 UTC)).unwrap()
    }

    #[test]
    fn starts_unsubmitted() {
        let state = UserState::default();
        assert!(!state.is_submitted());

        let view = CheckInView::new(&monday(), &state);
        assert_eq!(view.greeting, "Hi, happy Monday!");
        assert_eq!(view.intention_line, INTENTION_NUDGE);
        assert_eq!(view.quick_links.len(), 3);
    }

    #[test]
    fn submit_trims_drafts() {
        let mut state = UserState::default();
        state.set_name_draft("  Sam  ");
        state.set_focus_draft(" write ");
        state.submit();

        assert_eq!(state.saved_name, "Sam");
        assert_eq!(state.intention, "write");
        assert!(state.is_submitted());

        let view = CheckInView::new(&monday(), &state);
        assert_eq!(view.greeting, "Hi Sam, happy Monday!");
        assert_eq!(
            view.intention_line,
            "Let's make a little progress on \"write\"."
        );
    }

    #[test]
    fn drafts_do_not_touch_committed_values() {
        let mut state = UserState::default();
        state.set_name_draft("Sam");
        state.set_focus_draft("write");
        state.submit();

        state.set_name_draft("Alex");
        state.set_focus_draft("read");

        assert_eq!(state.saved_name, "Sam");
        assert_eq!(state.intention, "write");
        assert_eq!(
            CheckInView::new(&monday(), &state).greeting,
            "Hi Sam, happy Monday!"
        );
    }

    #[test]
    fn blank_resubmission_resets_to_defaults() {
        let mut state = UserState::default();
        state.set_name_draft("Sam");
        state.set_focus_draft("write");
        state.submit();

        state.set_name_draft("   ");
        state.set_focus_draft("");
        state.submit();

        assert_eq!(state.saved_name, "");
        assert_eq!(state.intention, "");
        assert!(!state.is_submitted());

        let view = CheckInView::new(&monday(), &state);
        assert_eq!(view.greeting, "Hi, happy Monday!");
        assert_eq!(view.intention_line, INTENTION_NUDGE);

        // With nothing saved, typing shows up live again.
        state.set_name_draft("Robin");
        assert_eq!(
            CheckInView::new(&monday(), &state).greeting,
            "Hi Robin, happy Monday!"
        );
    }
}
