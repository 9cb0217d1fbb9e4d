//! # Interest edit workflow
//!
//! The edit dialog moves through `Idle → Editing → Saving → Idle`:
//!
//! - [`open`](InterestEditor::open) starts editing a user's interest with the
//!   current value as the editable text.
//! - [`begin_save`](InterestEditor::begin_save) validates the text locally.
//!   Blank text is rejected without leaving `Editing`, so no request goes out.
//!   Otherwise the editor enters `Saving` and returns the update to send.
//! - [`finish_save`](InterestEditor::finish_save) closes the dialog on success
//!   and tells the caller to refresh the list. On failure it returns to
//!   `Editing` with the text kept.
//! - [`cancel`](InterestEditor::cancel) discards everything.

use crate::error::{Error, Result};
use crate::models::{Interest, InterestId, User, UserId};

#[derive(Clone, Debug, PartialEq)]
pub struct EditSession {
    pub user_id: UserId,
    pub user_name: String,
    pub interest_id: InterestId,
    pub original: String,
    pub text: String,
}

/// The request produced by a valid save.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterestUpdate {
    pub user_id: UserId,
    pub interest_id: InterestId,
    pub interest_type: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum InterestEditor {
    #[default]
    Idle,
    Editing(EditSession),
    Saving(EditSession),
}

impl InterestEditor {
    pub fn open(&mut self, user: &User, interest: &Interest) -> Result<()> {
        let interest_id = interest.id.ok_or(Error::UnsavedInterest)?;
        *self = InterestEditor::Editing(EditSession {
            user_id: user.id,
            user_name: user.name.clone(),
            interest_id,
            original: interest.interest_type.clone(),
            text: interest.interest_type.clone(),
        });
        Ok(())
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            InterestEditor::Idle => None,
            InterestEditor::Editing(session) | InterestEditor::Saving(session) => Some(session),
        }
    }

    pub fn is_open(&self) -> bool {
        !matches!(self, InterestEditor::Idle)
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, InterestEditor::Saving(_))
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if let InterestEditor::Editing(session) = self {
            session.text = text.into();
        }
    }

    /// Validate and move to `Saving`.
    ///
    /// Returns `Ok(None)` when there is nothing to save (idle, or a save is
    /// already in flight).
    pub fn begin_save(&mut self) -> Result<Option<InterestUpdate>> {
        let InterestEditor::Editing(session) = self else {
            return Ok(None);
        };
        let text = session.text.trim();
        if text.is_empty() {
            return Err(Error::BlankInterest);
        }
        let update = InterestUpdate {
            user_id: session.user_id,
            interest_id: session.interest_id,
            interest_type: text.to_string(),
        };
        if let InterestEditor::Editing(session) = std::mem::take(self) {
            *self = InterestEditor::Saving(session);
        }
        Ok(Some(update))
    }

    /// Apply the outcome of the update request.
    ///
    /// `Ok(true)` means the interest was renamed and the list should be
    /// refreshed. `Ok(false)` means no save was in flight.
    pub fn finish_save(&mut self, result: Result<()>) -> Result<bool> {
        match std::mem::take(self) {
            InterestEditor::Saving(session) => {
                if let Err(err) = result {
                    *self = InterestEditor::Editing(session);
                    return Err(err);
                }
                Ok(true)
            }
            other => {
                *self = other;
                result.map(|_| false)
            }
        }
    }

    pub fn cancel(&mut self) {
        *self = InterestEditor::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::UserDirectory;
    use crate::memory::MemoryDirectory;
    use crate::query::SearchRequest;
    use crate::search::{run_request, SearchState};

    fn setup() -> (MemoryDirectory, User) {
        let dir = MemoryDirectory::new();
        let ann = dir.seed("Ann", "ann@x.com", None, &["reading", "running"]);
        (dir, ann)
    }

    /// Same sequence as the save button.
    async fn save(editor: &mut InterestEditor, dir: &MemoryDirectory) -> Result<bool> {
        let Some(update) = editor.begin_save()? else {
            return Ok(false);
        };
        let result = dir
            .update_interest(update.user_id, update.interest_id, &update.interest_type)
            .await;
        editor.finish_save(result)
    }

    #[test]
    fn test_open_fills_current_value() {
        let (_, ann) = setup();
        let mut editor = InterestEditor::default();
        editor.open(&ann, &ann.interests[1]).unwrap();

        let session = editor.session().unwrap();
        assert_eq!(session.text, "running");
        assert_eq!(session.user_id, ann.id);
        assert!(editor.is_open());
    }

    #[test]
    fn test_unsaved_interest_cannot_be_edited() {
        let (_, ann) = setup();
        let draft = Interest {
            id: None,
            interest_type: "draft".to_string(),
        };
        let mut editor = InterestEditor::default();
        assert_eq!(editor.open(&ann, &draft), Err(Error::UnsavedInterest));
        assert!(!editor.is_open());
    }

    #[tokio::test]
    async fn test_blank_text_never_reaches_the_directory() {
        let (dir, ann) = setup();
        let mut editor = InterestEditor::default();
        editor.open(&ann, &ann.interests[0]).unwrap();

        for blank in ["", "   ", "\t\n"] {
            editor.set_text(blank);
            assert_eq!(save(&mut editor, &dir).await, Err(Error::BlankInterest));
            assert!(matches!(editor, InterestEditor::Editing(_)));
        }
        assert_eq!(dir.request_count(), 0);
    }

    #[tokio::test]
    async fn test_successful_save_closes_and_refresh_shows_new_text() {
        let (dir, ann) = setup();
        let mut state = SearchState::new();
        run_request(&mut state, &dir, SearchRequest::Everyone)
            .await
            .unwrap();

        let mut editor = InterestEditor::default();
        editor.open(&ann, &ann.interests[0]).unwrap();
        editor.set_text("  writing ");
        assert_eq!(save(&mut editor, &dir).await, Ok(true));
        assert_eq!(editor, InterestEditor::Idle);

        let request = state.refresh_request();
        run_request(&mut state, &dir, request).await.unwrap();
        assert_eq!(state.results[0].interests_label(), "writing, running");
    }

    #[tokio::test]
    async fn test_failed_save_keeps_dialog_open() {
        let (dir, ann) = setup();
        let mut editor = InterestEditor::default();
        editor.open(&ann, &ann.interests[0]).unwrap();
        editor.set_text("writing");

        dir.fail_next(Error::Transport("offline".to_string()));
        assert!(save(&mut editor, &dir).await.is_err());
        assert_eq!(editor.session().unwrap().text, "writing");
        assert!(!editor.is_saving());
    }

    #[test]
    fn test_cancel_discards_edits() {
        let (dir, ann) = setup();
        let mut editor = InterestEditor::default();
        editor.open(&ann, &ann.interests[0]).unwrap();
        editor.set_text("something else");
        editor.cancel();

        assert_eq!(editor, InterestEditor::Idle);
        assert_eq!(dir.request_count(), 0);
        assert_eq!(dir.user(ann.id).unwrap().interests_label(), "reading, running");
    }

    #[test]
    fn test_text_is_frozen_while_saving() {
        let (_, ann) = setup();
        let mut editor = InterestEditor::default();
        editor.open(&ann, &ann.interests[0]).unwrap();
        editor.set_text("chess");

        let update = editor.begin_save().unwrap().unwrap();
        assert_eq!(update.interest_type, "chess");
        editor.set_text("ignored");
        assert_eq!(editor.session().unwrap().text, "chess");

        // A second save while in flight is a no-op
        assert_eq!(editor.begin_save(), Ok(None));
        assert_eq!(editor.finish_save(Ok(())), Ok(true));
        assert!(!editor.is_open());

        // A late result with nothing in flight asks for no refresh
        assert_eq!(editor.finish_save(Ok(())), Ok(false));
    }
}
