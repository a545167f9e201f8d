//! View state for the users screen.
//!
//! Readers get accessors only. Every mutation is a crate-private transition
//! driven by the controller.

use crate::errors::ApiError;
use crate::models::{DraftField, User, UserDraft};

/// Whether submitting the form creates a new user or updates an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Edit(i64),
}

/// Everything the users screen shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    users: Vec<User>,
    draft: UserDraft,
    editing_id: Option<i64>,
    error: Option<String>,
    loading: bool,
}

impl ViewState {
    /// Users in server order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn mode(&self) -> Mode {
        match self.editing_id {
            Some(id) => Mode::Edit(id),
            None => Mode::Create,
        }
    }

    /// Name has at least two non-blank characters and email contains `@`.
    pub fn can_submit(&self) -> bool {
        self.draft.name.trim().chars().count() >= 2 && self.draft.email.contains('@')
    }

    pub(crate) fn begin_load(&mut self) {
        self.loading = true;
    }

    pub(crate) fn finish_load(&mut self, result: Result<Vec<User>, ApiError>) {
        match result {
            Ok(users) => self.users = users,
            Err(err) => self.fail(err),
        }
        self.loading = false;
    }

    pub(crate) fn set_field(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Name => self.draft.name = value.to_string(),
            DraftField::Email => self.draft.email = value.to_string(),
            DraftField::Age => self.draft.age = parse_age(value),
        }
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn apply_created(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                match self.users.iter_mut().find(|u| u.id == user.id) {
                    Some(existing) => {
                        tracing::warn!("Server returned existing id {} on create", user.id);
                        *existing = user;
                    }
                    None => self.users.push(user),
                }
                self.reset_form();
            }
            Err(err) => self.fail(err),
        }
    }

    pub(crate) fn apply_updated(&mut self, result: Result<User, ApiError>) {
        match result {
            Ok(user) => {
                if self.editing_id != Some(user.id) {
                    tracing::warn!(
                        "Update for {:?} returned user {}",
                        self.editing_id,
                        user.id
                    );
                }
                match self.users.iter_mut().find(|u| u.id == user.id) {
                    Some(existing) => *existing = user,
                    None => tracing::warn!("Updated user {} is not listed", user.id),
                }
                self.reset_form();
            }
            Err(err) => self.fail(err),
        }
    }

    /// Removes the user on success. An edit of the same id stays open.
    pub(crate) fn apply_deleted(&mut self, id: i64, result: Result<(), ApiError>) {
        match result {
            Ok(()) => self.users.retain(|u| u.id != id),
            Err(err) => self.fail(err),
        }
    }

    pub(crate) fn begin_edit(&mut self, user: &User) {
        self.editing_id = Some(user.id);
        self.draft = UserDraft::from(user);
    }

    pub(crate) fn reset_form(&mut self) {
        self.draft = UserDraft::default();
        self.editing_id = None;
    }

    fn fail(&mut self, err: ApiError) {
        self.error = Some(err.message().to_string());
    }
}

/// Empty input means no age; anything unparsable is treated the same.
fn parse_age(value: &str) -> Option<i32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.parse() {
        Ok(age) => Some(age),
        Err(e) => {
            tracing::debug!("Ignoring age input {:?}: {}", value, e);
            None
        }
    }
}
