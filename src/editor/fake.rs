//! In-memory editor widgets for tests

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use super::{EditorAdapter, EditorError, EditorHandle, EditorResult};
use crate::registry::SourceLanguage;

/// Widgets keyed by handle; a handle with no entry is "not mounted"
#[derive(Debug, Default)]
pub struct FakeEditors {
    buffers: RefCell<HashMap<EditorHandle, String>>,
    languages: RefCell<HashMap<EditorHandle, SourceLanguage>>,
    refreshes: Cell<usize>,
    reads: Cell<usize>,
}

impl FakeEditors {
    pub fn unmounted() -> Self {
        Self::default()
    }

    pub fn mounted(handle: &EditorHandle, text: &str) -> Self {
        let editors = Self::default();
        editors.mount(handle, text);
        editors
    }

    pub fn mount(&self, handle: &EditorHandle, text: &str) {
        self.buffers.borrow_mut().insert(handle.clone(), text.to_string());
    }

    pub fn unmount(&self, handle: &EditorHandle) {
        self.buffers.borrow_mut().remove(handle);
    }

    /// Simulate the user typing a whole new buffer
    pub fn type_text(&self, handle: &EditorHandle, text: &str) {
        let mut buffers = self.buffers.borrow_mut();
        let buffer = buffers.get_mut(handle).expect("type into a mounted editor");
        *buffer = text.to_string();
    }

    pub fn buffer(&self, handle: &EditorHandle) -> Option<String> {
        self.buffers.borrow().get(handle).cloned()
    }

    pub fn language(&self, handle: &EditorHandle) -> Option<SourceLanguage> {
        self.languages.borrow().get(handle).copied()
    }

    pub fn refreshes(&self) -> usize {
        self.refreshes.get()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    fn not_ready(handle: &EditorHandle) -> EditorError {
        EditorError::NotReady(handle.to_string())
    }
}

impl EditorAdapter for FakeEditors {
    fn try_set_buffer(&self, handle: &EditorHandle, text: &str) -> EditorResult<()> {
        let mut buffers = self.buffers.borrow_mut();
        let buffer = buffers.get_mut(handle).ok_or_else(|| Self::not_ready(handle))?;
        *buffer = text.to_string();
        Ok(())
    }

    fn try_get_buffer(&self, handle: &EditorHandle) -> EditorResult<String> {
        self.reads.set(self.reads.get() + 1);
        self.buffer(handle).ok_or_else(|| Self::not_ready(handle))
    }

    fn try_set_language(&self, handle: &EditorHandle, language: SourceLanguage) -> EditorResult<()> {
        if !self.buffers.borrow().contains_key(handle) {
            return Err(Self::not_ready(handle));
        }
        self.languages.borrow_mut().insert(handle.clone(), language);
        Ok(())
    }

    fn refresh(&self, handle: &EditorHandle) {
        if self.buffers.borrow().contains_key(handle) {
            self.refreshes.set(self.refreshes.get() + 1);
        }
    }
}
