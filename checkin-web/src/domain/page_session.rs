use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{derive_time_context, CheckInView, TimeContext, UserState};

/// Random v4 id, so one visitor cannot reach another visitor's page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(Uuid);

impl PageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for PageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error)]
pub enum PageError {
    #[error("page not found: {0}")]
    NotFound(PageId),
    #[error("failed to format the page clock: {0}")]
    ClockFormat(#[from] time::error::Format),
}

/// One opened page: its time context is fixed at open, the form state is not.
#[derive(Debug, Clone)]
pub struct PageSession {
    pub id: PageId,
    pub time_context: TimeContext,
    pub state: UserState,
}

impl PageSession {
    pub fn open(id: PageId, now: OffsetDateTime) -> Result<Self, PageError> {
        Ok(Self {
            id,
            time_context: derive_time_context(now)?,
            state: UserState::default(),
        })
    }

    /// Applies whichever drafts are present, leaving the others untouched.
    pub fn update_drafts(&mut self, name: Option<String>, focus: Option<String>) {
        if let Some(name) = name {
            self.state.set_name_draft(name);
        }
        if let Some(focus) = focus {
            self.state.set_focus_draft(focus);
        }
    }

    /// Takes the posted form values as the current drafts and commits them.
    pub fn submit(&mut self, name: String, focus: String) {
        self.state.set_name_draft(name);
        self.state.set_focus_draft(focus);
        self.state.submit();
    }

    pub fn view(&self) -> CheckInView {
        CheckInView::new(&self.time_context, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn time_context_is_fixed_at_open() {
        let mut session = PageSession::open(PageId::new(), datetime!(2024-03-08 19:45 UTC)).unwrap();
        let before = session.time_context.clone();

        session.submit("Kim".to_string(), "rest".to_string());

        assert_eq!(session.time_context, before);
        assert_eq!(session.time_context.day_name, "Friday");
        assert_eq!(session.view().greeting, "Hi Kim, happy Friday!");
    }

    #[test]
    fn page_ids_are_random() {
        let first = PageId::new();
        let second = PageId::new();

        assert_ne!(first, second);
        assert_eq!(first.to_string().len(), 36);
        assert_ne!(first.to_string(), "1");
    }

    #[test]
    fn partial_draft_update() {
        let mut session = PageSession::open(PageId::new(), datetime!(2024-03-08 07:00 UTC)).unwrap();
        session.update_drafts(Some("Lee".to_string()), None);
        session.update_drafts(None, Some("walk".to_string()));

        assert_eq!(session.state.name_draft, "Lee");
        assert_eq!(session.state.focus_draft, "walk");
        assert_eq!(session.state.intention, "");
        assert_eq!(session.view().greeting, "Hi Lee, happy Friday!");
    }
}
