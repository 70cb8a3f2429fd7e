/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
use std::collections::HashMap;

use crate::record::{FeedbackFile, RegistrationFile};

/// Persistence capability supplied by the host.
///
/// Saves overwrite any record already stored under the same id.
pub trait EntityStore {
    fn load_registration(&self, id: &str) -> Option<RegistrationFile>;
    fn save_registration(&mut self, record: RegistrationFile);
    fn feedback_file(&self, id: &str) -> Option<&FeedbackFile>;
    fn save_feedback_file(&mut self, record: FeedbackFile);
}

#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    registrations: HashMap<String, RegistrationFile>,
    feedback_files: HashMap<String, FeedbackFile>,
    saves: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration(&self, id: &str) -> Option<&RegistrationFile> {
        self.registrations.get(id)
    }

    /// Total number of save calls, across both record types.
    pub fn save_count(&self) -> usize {
        self.saves
    }

    pub fn feedback_files(&self) -> impl Iterator<Item = &FeedbackFile> {
        self.feedback_files.values()
    }
}

impl EntityStore for InMemoryStore {
    fn load_registration(&self, id: &str) -> Option<RegistrationFile> {
        self.registrations.get(id).cloned()
    }

    fn save_registration(&mut self, record: RegistrationFile) {
        self.saves += 1;
        self.registrations.insert(record.id.clone(), record);
    }

    fn feedback_file(&self, id: &str) -> Option<&FeedbackFile> {
        self.feedback_files.get(id)
    }

    fn save_feedback_file(&mut self, record: FeedbackFile) {
        self.saves += 1;
        self.feedback_files.insert(record.id().to_owned(), record);
    }
}
