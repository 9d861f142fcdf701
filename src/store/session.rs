/// Ephemeral edit state: a draft for exactly one task, held apart from
/// the committed collection until it is saved or discarded.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    #[default]
    Idle,
    Editing { id: String, draft: String },
}

impl EditSession {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    /// Id of the task under edit, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            EditSession::Editing { id, .. } => Some(id),
            EditSession::Idle => None,
        }
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            EditSession::Idle => None,
        }
    }

    pub fn draft_mut(&mut self) -> Option<&mut String> {
        match self {
            EditSession::Editing { draft, .. } => Some(draft),
            EditSession::Idle => None,
        }
    }

    /// Begin editing `id` with the draft seeded to `seed`. Replaces any
    /// session already in progress; the old draft is dropped uncommitted.
    pub fn begin(&mut self, id: &str, seed: &str) {
        *self = EditSession::Editing {
            id: id.to_string(),
            draft: seed.to_string(),
        };
    }

    /// Drop the draft and return to idle
    pub fn reset(&mut self) {
        *self = EditSession::Idle;
    }

    /// End the session, yielding `(id, draft)` if one was active
    pub fn take(&mut self) -> Option<(String, String)> {
        match std::mem::take(self) {
            EditSession::Editing { id, draft } => Some((id, draft)),
            EditSession::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_seeds_the_draft() {
        let mut session = EditSession::default();
        assert!(!session.is_editing());

        session.begin("t-1", "water plants");
        assert!(session.is_editing());
        assert_eq!(session.target(), Some("t-1"));
        assert_eq!(session.draft(), Some("water plants"));
    }

    #[test]
    fn begin_replaces_an_active_session() {
        let mut session = EditSession::default();
        session.begin("t-1", "one");
        session.draft_mut().unwrap().push_str(" edited");

        session.begin("t-2", "two");
        assert_eq!(session.target(), Some("t-2"));
        assert_eq!(session.draft(), Some("two"));
    }

    #[test]
    fn take_yields_once_then_idle() {
        let mut session = EditSession::default();
        session.begin("t-1", "one");

        assert_eq!(
            session.take(),
            Some(("t-1".to_string(), "one".to_string()))
        );
        assert!(!session.is_editing());
        assert_eq!(session.take(), None);
    }

    #[test]
    fn reset_discards_without_yielding() {
        let mut session = EditSession::default();
        session.begin("t-1", "one");
        session.reset();
        assert_eq!(session.take(), None);
    }
}
