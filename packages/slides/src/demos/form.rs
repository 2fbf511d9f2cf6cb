use crate::{timing::sleep, SlideFrame};
use dioxus::prelude::*;
use hookdeck_shell::Navigator;
use std::time::Duration;
use thiserror::Error;

const SOURCE: &str = r#"
let mut state = use_signal(|| FormState::Idle);

rsx! {
    form {
        onsubmit: move |evt: FormEvent| async move {
            evt.prevent_default();
            state.set(FormState::Pending);
            let form = SignupForm { name: name(), email: email(), password: password() };
            let result = submit(form).await;
            state.set(match result {
                Ok(signup) => FormState::Done(signup),
                Err(err) => FormState::Failed(err),
            });
        },
        input { value: "{name}", oninput: move |evt| name.set(evt.value()) }
        // ...email and password the same way
        button { disabled: state() == FormState::Pending, "Sign up" }
    }
}
"#;

pub const MIN_PASSWORD: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("\"{0}\" is not an email address")]
    InvalidEmail(String),
    #[error("passwords need at least {MIN_PASSWORD} characters")]
    PasswordTooShort,
    #[error("the name {0} is already taken")]
    NameTaken(String),
}

/// Raw field values as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// A form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signup {
    pub name: String,
    pub email: String,
}

impl SignupForm {
    /// Checks the fields in order and reports the first problem.
    pub fn validate(&self) -> Result<Signup, FormError> {
        let name = self.name.trim();
        let email = self.email.trim();

        if name.is_empty() {
            return Err(FormError::Missing("name"));
        }
        if email.is_empty() {
            return Err(FormError::Missing("email"));
        }
        if self.password.is_empty() {
            return Err(FormError::Missing("password"));
        }

        let valid_email = email
            .split_once('@')
            .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
        if !valid_email {
            return Err(FormError::InvalidEmail(email.to_string()));
        }
        if self.password.chars().count() < MIN_PASSWORD {
            return Err(FormError::PasswordTooShort);
        }

        Ok(Signup {
            name: name.to_string(),
            email: email.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Pending,
    Done(Signup),
    Failed(FormError),
}

/// Validates locally, then asks the "server", which knows one taken name.
async fn submit(form: SignupForm) -> Result<Signup, FormError> {
    let signup = form.validate()?;
    sleep(Duration::from_millis(900)).await;
    if signup.name.eq_ignore_ascii_case("admin") {
        return Err(FormError::NameTaken(signup.name));
    }
    Ok(signup)
}

pub fn slide(_: Navigator) -> Element {
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut state = use_signal(|| FormState::Idle);

    let pending = state() == FormState::Pending;

    let status = match state() {
        FormState::Idle => rsx! {},
        FormState::Pending => rsx! { p { class: "loading", "Submitting..." } },
        FormState::Done(signup) => rsx! {
            p { class: "success", "Welcome, {signup.name}! A confirmation went to {signup.email}." }
        },
        FormState::Failed(err) => rsx! { p { class: "error", "{err}" } },
    };

    rsx! {
        SlideFrame {
            title: "Form Actions",
            hook: "async onsubmit",
            narration: "The submit handler is an async action. The form tracks pending, success and failure itself, and disables the button while the action runs.",
            source: SOURCE,
            form {
                class: "signup",
                onsubmit: move |evt: FormEvent| async move {
                    evt.prevent_default();
                    state.set(FormState::Pending);
                    let form = SignupForm {
                        name: name(),
                        email: email(),
                        password: password(),
                    };
                    let next = match submit(form).await {
                        Ok(signup) => FormState::Done(signup),
                        Err(err) => FormState::Failed(err),
                    };
                    state.set(next);
                },
                label { "Name"
                    input { value: "{name}", disabled: pending, oninput: move |evt| name.set(evt.value()) }
                }
                label { "Email"
                    input { value: "{email}", disabled: pending, oninput: move |evt| email.set(evt.value()) }
                }
                label { "Password"
                    input {
                        r#type: "password",
                        value: "{password}",
                        disabled: pending,
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button { r#type: "submit", disabled: pending, "Sign up" }
            }
            {status}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(name: &str, email: &str, password: &str) -> SignupForm {
        SignupForm {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    #[test]
    fn accepts_a_complete_form() {
        assert_eq!(
            form(" Ada ", "ada@example.com", "analytical").validate(),
            Ok(Signup {
                name: "Ada".into(),
                email: "ada@example.com".into(),
            })
        );
    }

    #[test]
    fn reports_the_first_problem() {
        assert_eq!(form("", "", "").validate(), Err(FormError::Missing("name")));
        assert_eq!(form("Ada", "  ", "x").validate(), Err(FormError::Missing("email")));
        assert_eq!(
            form("Ada", "ada.example.com", "").validate(),
            Err(FormError::Missing("password"))
        );
        assert_eq!(
            form("Ada", "@example.com", "analytical").validate(),
            Err(FormError::InvalidEmail("@example.com".into()))
        );
        assert_eq!(
            form("Ada", "ada@localhost", "analytical").validate(),
            Err(FormError::InvalidEmail("ada@localhost".into()))
        );
        assert_eq!(
            form("Ada", "ada@example.com", "short").validate(),
            Err(FormError::PasswordTooShort)
        );
    }

    #[test]
    fn error_messages_read_well() {
        assert_eq!(FormError::Missing("email").to_string(), "email is required");
        assert_eq!(
            FormError::PasswordTooShort.to_string(),
            "passwords need at least 8 characters"
        );
    }
}
