//! BufferPush - best-effort delivery of new text into the editor widget
//!
//! A push is created by a snippet switch and attempted right away. If the
//! widget is still mounting, the push asks for exactly one retry; a second
//! `NotReady` abandons it. A push tagged with an older revision than the
//! current state is superseded and never touches the widget, so a late
//! retry cannot clobber text written by a newer switch or a run.

use super::{EditorAdapter, EditorError, EditorHandle};
use crate::registry::SourceLanguage;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    /// Buffer and language set, widget refreshed
    Delivered,
    /// Widget not mounted; schedule the single retry
    RetryLater,
    /// A newer transition happened since this push was created
    Superseded,
    /// Gave up; the editor keeps showing stale content
    Abandoned(EditorError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferPush {
    handle: EditorHandle,
    text: String,
    language: SourceLanguage,
    revision: u64,
    attempted_once: bool,
}

impl BufferPush {
    pub fn new(
        handle: EditorHandle,
        text: impl Into<String>,
        language: SourceLanguage,
        revision: u64,
    ) -> Self {
        Self {
            handle,
            text: text.into(),
            language,
            revision,
            attempted_once: false,
        }
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn attempt<E: EditorAdapter + ?Sized>(
        &mut self,
        editors: &E,
        current_revision: u64,
    ) -> PushOutcome {
        if current_revision > self.revision {
            return PushOutcome::Superseded;
        }

        let result = editors
            .try_set_language(&self.handle, self.language)
            .and_then(|()| editors.try_set_buffer(&self.handle, &self.text));

        match result {
            Ok(()) => {
                editors.refresh(&self.handle);
                PushOutcome::Delivered
            }
            Err(EditorError::NotReady(_)) if !self.attempted_once => {
                self.attempted_once = true;
                PushOutcome::RetryLater
            }
            Err(err) => PushOutcome::Abandoned(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::fake::FakeEditors;

    fn handle() -> EditorHandle {
        EditorHandle::new("editor")
    }

    fn push(revision: u64) -> BufferPush {
        BufferPush::new(handle(), "new text", SourceLanguage::Script, revision)
    }

    #[test]
    fn delivers_to_mounted_widget() {
        let editors = FakeEditors::mounted(&handle(), "old");
        assert_eq!(push(3).attempt(&editors, 3), PushOutcome::Delivered);
        assert_eq!(editors.buffer(&handle()).as_deref(), Some("new text"));
        assert_eq!(editors.language(&handle()), Some(SourceLanguage::Script));
        assert_eq!(editors.refreshes(), 1);
    }

    #[test]
    fn retries_once_then_gives_up() {
        let editors = FakeEditors::unmounted();
        let mut push = push(1);
        assert_eq!(push.attempt(&editors, 1), PushOutcome::RetryLater);
        assert_eq!(
            push.attempt(&editors, 1),
            PushOutcome::Abandoned(EditorError::NotReady("editor".into()))
        );
        assert_eq!(editors.refreshes(), 0);
    }

    #[test]
    fn never_asks_for_a_second_retry() {
        let editors = FakeEditors::unmounted();
        let mut push = push(1);
        assert_eq!(push.attempt(&editors, 1), PushOutcome::RetryLater);
        for _ in 0..3 {
            assert!(matches!(push.attempt(&editors, 1), PushOutcome::Abandoned(_)));
        }
        assert_eq!(editors.buffer(&handle()), None);
    }

    #[test]
    fn retry_succeeds_after_late_mount() {
        let editors = FakeEditors::unmounted();
        let mut push = push(1);
        assert_eq!(push.attempt(&editors, 1), PushOutcome::RetryLater);
        editors.mount(&handle(), "");
        assert_eq!(push.attempt(&editors, 1), PushOutcome::Delivered);
        assert_eq!(editors.buffer(&handle()).as_deref(), Some("new text"));
    }

    #[test]
    fn newer_transition_supersedes() {
        let editors = FakeEditors::mounted(&handle(), "typed by user");
        let mut push = push(1);
        assert_eq!(push.attempt(&editors, 2), PushOutcome::Superseded);
        assert_eq!(editors.buffer(&handle()).as_deref(), Some("typed by user"));
    }
}
