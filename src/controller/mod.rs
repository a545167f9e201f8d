//! View-state controller.
//!
//! Owns the single [`ViewState`] of the users screen and is the only place it
//! changes. Subscribers are notified after every transition that actually
//! changed something.

use tokio::sync::watch;

use crate::client::UserApi;
use crate::models::{DraftField, User};
use crate::state::{Mode, ViewState};
use crate::view::{self, Intent, Screen};

pub struct Controller<A> {
    api: A,
    state: watch::Sender<ViewState>,
}

impl<A: UserApi> Controller<A> {
    pub fn new(api: A) -> Self {
        let (state, _) = watch::channel(ViewState::default());
        Self { api, state }
    }

    /// Receive a notification whenever the state changes.
    pub fn subscribe(&self) -> watch::Receiver<ViewState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> ViewState {
        self.state.borrow().clone()
    }

    /// Project the current state into a screen.
    pub fn render(&self) -> Screen {
        view::render(&self.state.borrow())
    }

    pub fn can_submit(&self) -> bool {
        self.state.borrow().can_submit()
    }

    fn update<F>(&self, transition: F)
    where
        F: FnOnce(&mut ViewState),
    {
        self.state.send_if_modified(|state| {
            let before = state.clone();
            transition(state);
            *state != before
        });
    }

    /// Fetch the user list. `loading` is cleared whether or not it succeeds.
    pub async fn initialize(&mut self) {
        self.update(ViewState::begin_load);

        let result = self.api.list_users().await;
        match &result {
            Ok(users) => tracing::info!("Loaded {} users", users.len()),
            Err(e) => tracing::warn!("Failed to load users: {}", e),
        }

        self.update(|state| state.finish_load(result));
    }

    /// Local draft edit; never touches the network.
    pub fn set_field(&mut self, field: DraftField, value: &str) {
        self.update(|state| state.set_field(field, value));
    }

    /// Create or update depending on the current mode. No-op while the draft
    /// is invalid.
    pub async fn submit(&mut self) {
        let (mode, draft) = {
            let state = self.state.borrow();
            if !state.can_submit() {
                tracing::debug!("Submit ignored, draft is incomplete");
                return;
            }
            (state.mode(), state.draft().clone())
        };

        self.update(ViewState::clear_error);

        match mode {
            Mode::Create => {
                let result = self.api.create_user(&draft).await;
                if let Ok(user) = &result {
                    tracing::info!("Created user {}", user.id);
                }
                self.update(|state| state.apply_created(result));
            }
            Mode::Edit(id) => {
                let result = self.api.update_user(id, &draft).await;
                if result.is_ok() {
                    tracing::info!("Updated user {}", id);
                }
                self.update(|state| state.apply_updated(result));
            }
        }
    }

    pub fn begin_edit(&mut self, user: &User) {
        tracing::debug!("Editing user {}", user.id);
        self.update(|state| state.begin_edit(user));
    }

    pub fn cancel_edit(&mut self) {
        self.update(ViewState::reset_form);
    }

    pub async fn delete(&mut self, id: i64) {
        self.update(ViewState::clear_error);

        let result = self.api.delete_user(id).await;
        if result.is_ok() {
            tracing::info!("Deleted user {}", id);
        }

        self.update(|state| state.apply_deleted(id, result));
    }

    /// Route an intent emitted by the screen.
    pub async fn dispatch(&mut self, intent: Intent) {
        match intent {
            Intent::Input(field, value) => self.set_field(field, &value),
            Intent::Submit => self.submit().await,
            Intent::BeginEdit(user) => self.begin_edit(&user),
            Intent::CancelEdit => self.cancel_edit(),
            Intent::Delete(id) => self.delete(id).await,
        }
    }
}
