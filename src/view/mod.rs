//! Presentation layer: a pure projection of [`ViewState`] into a screen.
//!
//! The screen carries both what to show and the intents each control emits,
//! so a front end never touches the state directly.

use std::fmt;

use crate::models::{DraftField, User};
use crate::state::{Mode, ViewState};

pub const TITLE: &str = "User App";
pub const SUBTITLE: &str = "Basic CRUD operations";
pub const LOADING_TEXT: &str = "Loading...";
pub const EMPTY_TEXT: &str = "No users yet";
pub const AGE_PLACEHOLDER: &str = "-";

/// A user action reported back to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Input(DraftField, String),
    Submit,
    BeginEdit(User),
    CancelEdit,
    Delete(i64),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub header: Header,
    pub form: FormView,
    pub users: UsersSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub title: &'static str,
    pub subtitle: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub heading: &'static str,
    pub inputs: [InputView; 3],
    pub submit: ButtonView,
    /// Only present in edit mode
    pub cancel: Option<ButtonView>,
    /// Last failure message, verbatim
    pub error: Option<String>,
}

/// A text input bound to one draft field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputView {
    pub field: DraftField,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub enabled: bool,
    pub intent: Intent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersSection {
    Loading,
    Empty,
    Rows(Vec<UserRow>),
}

/// One listed user, keyed by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub key: i64,
    pub name: String,
    pub email: String,
    /// Age, or [`AGE_PLACEHOLDER`] when unknown
    pub age: String,
    pub edit: Intent,
    pub delete: Intent,
}

impl Screen {
    /// Rows currently on screen; empty while loading.
    pub fn rows(&self) -> &[UserRow] {
        match &self.users {
            UsersSection::Rows(rows) => rows,
            UsersSection::Loading | UsersSection::Empty => &[],
        }
    }

    pub fn row(&self, id: i64) -> Option<&UserRow> {
        self.rows().iter().find(|row| row.key == id)
    }
}

/// Project the state into a screen.
pub fn render(state: &ViewState) -> Screen {
    Screen {
        header: Header {
            title: TITLE,
            subtitle: SUBTITLE,
        },
        form: render_form(state),
        users: render_users(state),
    }
}

fn render_form(state: &ViewState) -> FormView {
    let draft = state.draft();
    let input = |field: DraftField, value: String| InputView {
        field,
        label: field.label(),
        placeholder: field.placeholder(),
        value,
    };

    let (heading, submit_label, cancel) = match state.mode() {
        Mode::Create => ("Create User", "Create", None),
        Mode::Edit(_) => (
            "Edit User",
            "Update",
            Some(ButtonView {
                label: "Cancel",
                enabled: true,
                intent: Intent::CancelEdit,
            }),
        ),
    };

    FormView {
        heading,
        inputs: [
            input(DraftField::Name, draft.name.clone()),
            input(DraftField::Email, draft.email.clone()),
            input(
                DraftField::Age,
                draft.age.map(|age| age.to_string()).unwrap_or_default(),
            ),
        ],
        submit: ButtonView {
            label: submit_label,
            enabled: state.can_submit(),
            intent: Intent::Submit,
        },
        cancel,
        error: state.error().map(str::to_string),
    }
}

fn render_users(state: &ViewState) -> UsersSection {
    if state.loading() {
        return UsersSection::Loading;
    }
    if state.users().is_empty() {
        return UsersSection::Empty;
    }

    UsersSection::Rows(
        state
            .users()
            .iter()
            .map(|user| UserRow {
                key: user.id,
                name: user.name.clone(),
                email: user.email.clone(),
                age: user
                    .age
                    .map(|age| age.to_string())
                    .unwrap_or_else(|| AGE_PLACEHOLDER.to_string()),
                edit: Intent::BeginEdit(user.clone()),
                delete: Intent::Delete(user.id),
            })
            .collect(),
    )
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header.title)?;
        writeln!(f, "{}", self.header.subtitle)?;
        writeln!(f)?;

        writeln!(f, "== {} ==", self.form.heading)?;
        for input in &self.form.inputs {
            if input.value.is_empty() {
                writeln!(f, "  {:<6} ({})", input.label, input.placeholder)?;
            } else {
                writeln!(f, "  {:<6} {}", input.label, input.value)?;
            }
        }
        write!(f, "  [{}]", self.form.submit.label)?;
        if !self.form.submit.enabled {
            write!(f, " (disabled)")?;
        }
        if let Some(cancel) = &self.form.cancel {
            write!(f, " [{}]", cancel.label)?;
        }
        writeln!(f)?;
        if let Some(error) = &self.form.error {
            writeln!(f, "  ! {}", error)?;
        }
        writeln!(f)?;

        writeln!(f, "== Users ==")?;
        match &self.users {
            UsersSection::Loading => writeln!(f, "  {}", LOADING_TEXT),
            UsersSection::Empty => writeln!(f, "  {}", EMPTY_TEXT),
            UsersSection::Rows(rows) => {
                for row in rows {
                    writeln!(
                        f,
                        "  #{} {} <{}> Age: {}  [Edit] [Delete]",
                        row.key, row.name, row.email, row.age
                    )?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;

    fn user(id: i64, name: &str, age: Option<i32>) -> User {
        User {
            id,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            age,
        }
    }

    fn loaded(users: Vec<User>) -> ViewState {
        let mut state = ViewState::default();
        state.finish_load(Ok(users));
        state
    }

    #[test]
    fn test_create_mode_form() {
        let screen = render(&ViewState::default());

        assert_eq!(screen.header.title, "User App");
        assert_eq!(screen.form.heading, "Create User");
        assert_eq!(screen.form.submit.label, "Create");
        assert!(!screen.form.submit.enabled);
        assert!(screen.form.cancel.is_none());
        assert!(screen.form.error.is_none());
        assert!(screen.form.inputs.iter().all(|input| input.value.is_empty()));
    }

    #[test]
    fn test_edit_mode_form() {
        let mut state = loaded(vec![user(2, "Old", Some(20))]);
        state.begin_edit(&user(2, "Old", Some(20)));

        let screen = render(&state);

        assert_eq!(screen.form.heading, "Edit User");
        assert_eq!(screen.form.submit.label, "Update");
        assert!(screen.form.submit.enabled);
        let cancel = screen.form.cancel.expect("cancel visible in edit mode");
        assert_eq!(cancel.label, "Cancel");
        assert_eq!(cancel.intent, Intent::CancelEdit);
        assert_eq!(screen.form.inputs[0].value, "Old");
        assert_eq!(screen.form.inputs[1].value, "old@example.com");
        assert_eq!(screen.form.inputs[2].value, "20");
    }

    #[test]
    fn test_loading_hides_everything_else() {
        let mut state = loaded(vec![user(1, "Ann", None)]);
        state.begin_load();

        let screen = render(&state);

        assert_eq!(screen.users, UsersSection::Loading);
        assert!(screen.rows().is_empty());
        assert!(screen.to_string().contains("Loading..."));
    }

    #[test]
    fn test_empty_state_message() {
        let screen = render(&loaded(Vec::new()));

        assert_eq!(screen.users, UsersSection::Empty);
        assert!(screen.to_string().contains("No users yet"));
    }

    #[test]
    fn test_rows_keyed_by_id_with_age_placeholder() {
        let screen = render(&loaded(vec![user(7, "Keep", Some(40)), user(8, "Anon", None)]));

        let rows = screen.rows();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].key, 7);
        assert_eq!(rows[0].age, "40");
        assert_eq!(rows[1].age, "-");
        assert_eq!(rows[1].edit, Intent::BeginEdit(user(8, "Anon", None)));
        assert_eq!(rows[1].delete, Intent::Delete(8));
        assert_eq!(screen.row(8).map(|row| row.name.as_str()), Some("Anon"));
        assert!(screen.row(9).is_none());
    }

    #[test]
    fn test_error_line_shows_exact_text() {
        let mut state = ViewState::default();
        state.finish_load(Err(ApiError::new("Load failed")));

        let screen = render(&state);

        assert_eq!(screen.form.error.as_deref(), Some("Load failed"));
        assert!(screen.to_string().contains("! Load failed"));
    }

    #[test]
    fn test_render_is_pure() {
        let state = loaded(vec![user(1, "Ann", Some(3))]);
        assert_eq!(render(&state), render(&state));
    }
}
