//! Login/signup form state
//!
//! Holds the mode, the two text buffers and the password visibility flag.
//! Buffers survive mode switches. Submission goes through [`submit`], which
//! guards against double submits and drops results for forms that are gone.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::{debug, warn};

use super::auth::{AuthError, AuthSession, Authenticator, Credentials};

/// Which variant of the form is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    #[default]
    Login,
    Signup,
}

/// Optional parts of the form, derived from the mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSet {
    /// First/last name inputs (uncontrolled)
    pub name_fields: bool,
    pub remember_me: bool,
    pub forgot_password: bool,
    /// Buttons under "Or continue with"
    pub social_providers: &'static [SocialProvider],
}

/// Third-party sign-in buttons. Not connected to any provider yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialProvider {
    Google,
    Facebook,
}

impl SocialProvider {
    pub const ALL: &'static [SocialProvider] = &[SocialProvider::Google, SocialProvider::Facebook];

    pub fn label(self) -> &'static str {
        match self {
            SocialProvider::Google => "Google",
            SocialProvider::Facebook => "Facebook",
        }
    }

    /// Icon file under /icons
    pub fn icon(self) -> &'static str {
        match self {
            SocialProvider::Google => "google",
            SocialProvider::Facebook => "facebook",
        }
    }
}

impl AuthMode {
    pub fn field_set(self) -> FieldSet {
        match self {
            AuthMode::Login => FieldSet {
                name_fields: false,
                remember_me: true,
                forgot_password: true,
                social_providers: SocialProvider::ALL,
            },
            AuthMode::Signup => FieldSet {
                name_fields: true,
                remember_me: false,
                forgot_password: false,
                social_providers: SocialProvider::ALL,
            },
        }
    }

    pub fn heading(self) -> &'static str {
        match self {
            AuthMode::Login => "Welcome back",
            AuthMode::Signup => "Create an account",
        }
    }

    pub fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Login => "Sign in",
            AuthMode::Signup => "Create account",
        }
    }

    /// Prompt and link label leading to the other mode
    pub fn switch_prompt(self) -> (&'static str, &'static str, AuthMode) {
        match self {
            AuthMode::Login => ("New to PhotoApp? ", "Create an account", AuthMode::Signup),
            AuthMode::Signup => ("Already have an account? ", "Log in", AuthMode::Login),
        }
    }
}

/// What `begin_submit` decided
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    Authenticate(Credentials),
    AlreadyPending,
    SignupUnavailable,
}

/// Result of one call to [`submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Succeeded(AuthSession),
    Failed(AuthError),
    AlreadyPending,
    SignupUnavailable,
}

/// Per-form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthFormState {
    mode: AuthMode,
    email: String,
    password: String,
    password_visible: bool,
    pending: bool,
    error: Option<AuthError>,
}

impl AuthFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn password_visible(&self) -> bool {
        self.password_visible
    }

    /// A login request is outstanding
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Failure of the last completed submit, if any
    pub fn error(&self) -> Option<&AuthError> {
        self.error.as_ref()
    }

    pub fn field_set(&self) -> FieldSet {
        self.mode.field_set()
    }

    /// Leaves the buffers and visibility flag alone.
    pub fn switch_mode(&mut self, target: AuthMode) {
        if self.mode != target {
            debug!(?target, "auth form mode switched");
        }
        self.mode = target;
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// `type` attribute of the password input
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible {
            "text"
        } else {
            "password"
        }
    }

    /// Start a submit; only one login may be in flight.
    pub fn begin_submit(&mut self) -> SubmitDecision {
        if self.pending {
            return SubmitDecision::AlreadyPending;
        }

        match self.mode {
            AuthMode::Signup => SubmitDecision::SignupUnavailable,
            AuthMode::Login => {
                self.pending = true;
                self.error = None;
                SubmitDecision::Authenticate(Credentials {
                    email: self.email.clone(),
                    password: self.password.clone(),
                })
            }
        }
    }

    /// Finish the outstanding submit. Mode and buffers are not touched.
    pub fn complete_submit(&mut self, result: &Result<AuthSession, AuthError>) {
        self.pending = false;
        self.error = result.as_ref().err().cloned();
    }
}

/// Owner of a form's state that may disappear while a submit is in flight
pub trait FormStore {
    /// Run `f` against the state, or return `None` if it no longer exists.
    fn try_update_form<R>(&self, f: impl FnOnce(&mut AuthFormState) -> R) -> Option<R>;
}

impl FormStore for Rc<RefCell<AuthFormState>> {
    fn try_update_form<R>(&self, f: impl FnOnce(&mut AuthFormState) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

impl FormStore for Weak<RefCell<AuthFormState>> {
    fn try_update_form<R>(&self, f: impl FnOnce(&mut AuthFormState) -> R) -> Option<R> {
        self.upgrade().map(|state| f(&mut state.borrow_mut()))
    }
}

/// Submit the form once.
///
/// Calls the authenticator at most once, with the buffers as they were when
/// the submit began. Returns `None` when the form was dropped, either before
/// the submit started or while it was waiting on the authenticator.
pub async fn submit<S, A>(store: &S, authenticator: &A) -> Option<SubmitOutcome>
where
    S: FormStore,
    A: Authenticator,
{
    let credentials = match store.try_update_form(AuthFormState::begin_submit)? {
        SubmitDecision::Authenticate(credentials) => credentials,
        SubmitDecision::AlreadyPending => {
            debug!("submit ignored, login already in flight");
            return Some(SubmitOutcome::AlreadyPending);
        }
        SubmitDecision::SignupUnavailable => {
            debug!("signup submit is not implemented");
            return Some(SubmitOutcome::SignupUnavailable);
        }
    };

    debug!(email = %credentials.email, "authenticating");
    let result = authenticator.authenticate(&credentials).await;

    if store
        .try_update_form(|state| state.complete_submit(&result))
        .is_none()
    {
        debug!("auth form dropped before login resolved");
        return None;
    }

    Some(match result {
        Ok(session) => SubmitOutcome::Succeeded(session),
        Err(err) => {
            warn!(error = %err, "login failed");
            SubmitOutcome::Failed(err)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::Cell;

    /// Records calls and answers with a fixed result
    struct RecordingAuthenticator {
        calls: RefCell<Vec<Credentials>>,
        result: Result<AuthSession, AuthError>,
    }

    impl RecordingAuthenticator {
        fn answering(result: Result<AuthSession, AuthError>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl Authenticator for RecordingAuthenticator {
        async fn authenticate(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
            self.calls.borrow_mut().push(credentials.clone());
            self.result.clone()
        }
    }

    fn session() -> AuthSession {
        AuthSession {
            token: "token-1".to_string(),
            email: "u@test.com".to_string(),
        }
    }

    fn filled_form(email: &str, password: &str) -> Rc<RefCell<AuthFormState>> {
        let mut state = AuthFormState::new();
        state.set_email(email);
        state.set_password(password);
        Rc::new(RefCell::new(state))
    }

    #[test]
    fn test_initial_state() {
        let state = AuthFormState::new();
        assert_eq!(state.mode(), AuthMode::Login);
        assert_eq!(state.email(), "");
        assert_eq!(state.password(), "");
        assert!(!state.password_visible());
        assert!(!state.is_pending());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_mode_switch_preserves_buffers() {
        let mut state = AuthFormState::new();
        state.set_email("a@b.com");
        state.set_password("x");
        state.toggle_password_visibility();

        state.switch_mode(AuthMode::Signup);
        assert_eq!(state.email(), "a@b.com");
        state.switch_mode(AuthMode::Login);

        assert_eq!(state.mode(), AuthMode::Login);
        assert_eq!(state.email(), "a@b.com");
        assert_eq!(state.password(), "x");
        assert!(state.password_visible());
    }

    #[test]
    fn test_buffers_accept_anything() {
        let mut state = AuthFormState::new();
        state.set_email("not an email");
        state.set_password("");
        assert_eq!(state.email(), "not an email");
        assert_eq!(state.password(), "");
    }

    #[test]
    fn test_password_visibility_toggle() {
        let mut state = AuthFormState::new();
        assert_eq!(state.password_input_type(), "password");
        state.toggle_password_visibility();
        assert_eq!(state.password_input_type(), "text");
        state.toggle_password_visibility();
        assert_eq!(state.password_input_type(), "password");
    }

    #[test]
    fn test_field_set_per_mode() {
        let login = AuthMode::Login.field_set();
        assert!(!login.name_fields);
        assert!(login.remember_me);
        assert!(login.forgot_password);

        let signup = AuthMode::Signup.field_set();
        assert!(signup.name_fields);
        assert!(!signup.remember_me);
        assert!(!signup.forgot_password);
    }

    #[test]
    fn test_social_sign_in_offered_in_both_modes() {
        for mode in [AuthMode::Login, AuthMode::Signup] {
            let labels: Vec<_> = mode
                .field_set()
                .social_providers
                .iter()
                .map(|provider| provider.label())
                .collect();
            assert_eq!(labels, ["Google", "Facebook"]);
        }
        assert_ne!(SocialProvider::Google.icon(), SocialProvider::Facebook.icon());
    }

    #[test]
    fn test_switch_prompt_points_to_other_mode() {
        assert_eq!(AuthMode::Login.switch_prompt().2, AuthMode::Signup);
        assert_eq!(AuthMode::Signup.switch_prompt().2, AuthMode::Login);
        assert_ne!(AuthMode::Login.heading(), AuthMode::Signup.heading());
    }

    #[test]
    fn test_begin_submit_guards_second_call() {
        let mut state = AuthFormState::new();
        state.set_email("u@test.com");

        assert!(matches!(
            state.begin_submit(),
            SubmitDecision::Authenticate(_)
        ));
        assert_eq!(state.begin_submit(), SubmitDecision::AlreadyPending);

        state.complete_submit(&Ok(session()));
        assert!(matches!(
            state.begin_submit(),
            SubmitDecision::Authenticate(_)
        ));
    }

    #[test]
    fn test_submit_calls_authenticator_once_with_exact_values() {
        let form = filled_form("u@test.com", "pw");
        let auth = RecordingAuthenticator::answering(Ok(session()));

        let outcome = block_on(submit(&form, &auth));

        assert_eq!(outcome, Some(SubmitOutcome::Succeeded(session())));
        assert_eq!(
            *auth.calls.borrow(),
            vec![Credentials {
                email: "u@test.com".to_string(),
                password: "pw".to_string(),
            }]
        );
        assert!(!form.borrow().is_pending());
    }

    #[test]
    fn test_failed_submit_leaves_form_unchanged() {
        let form = filled_form("u@test.com", "pw");
        let failure = AuthError::Rejected("invalid credentials".to_string());
        let auth = RecordingAuthenticator::answering(Err(failure.clone()));

        let outcome = block_on(submit(&form, &auth));

        assert_eq!(outcome, Some(SubmitOutcome::Failed(failure.clone())));
        let state = form.borrow();
        assert_eq!(state.mode(), AuthMode::Login);
        assert_eq!(state.email(), "u@test.com");
        assert_eq!(state.password(), "pw");
        assert_eq!(state.error(), Some(&failure));
        assert!(!state.is_pending());
    }

    #[test]
    fn test_signup_submit_never_calls_authenticator() {
        let form = filled_form("u@test.com", "pw");
        form.borrow_mut().switch_mode(AuthMode::Signup);
        let auth = RecordingAuthenticator::answering(Ok(session()));

        let outcome = block_on(submit(&form, &auth));

        assert_eq!(outcome, Some(SubmitOutcome::SignupUnavailable));
        assert!(auth.calls.borrow().is_empty());
        assert!(!form.borrow().is_pending());
    }

    /// Resolves only when the test sends a result
    struct GatedAuthenticator {
        calls: Cell<usize>,
        gate: RefCell<Option<oneshot::Receiver<Result<AuthSession, AuthError>>>>,
    }

    impl Authenticator for GatedAuthenticator {
        async fn authenticate(&self, _credentials: &Credentials) -> Result<AuthSession, AuthError> {
            self.calls.set(self.calls.get() + 1);
            let gate = self.gate.borrow_mut().take();
            match gate {
                Some(receiver) => receiver
                    .await
                    .unwrap_or_else(|_| Err(AuthError::Transport("cancelled".to_string()))),
                None => Err(AuthError::Transport("gate already used".to_string())),
            }
        }
    }

    #[test]
    fn test_second_submit_while_outstanding_is_ignored() {
        let form = filled_form("u@test.com", "pw");
        let (sender, receiver) = oneshot::channel();
        let auth = GatedAuthenticator {
            calls: Cell::new(0),
            gate: RefCell::new(Some(receiver)),
        };

        block_on(async {
            let first = submit(&form, &auth);
            let second = async {
                let outcome = submit(&form, &auth).await;
                // Edits stay possible while the login is in flight.
                form.borrow_mut().set_email("typed@later.com");
                let _ = sender.send(Ok(session()));
                outcome
            };

            let (first, second) = futures::join!(first, second);
            assert_eq!(second, Some(SubmitOutcome::AlreadyPending));
            assert_eq!(first, Some(SubmitOutcome::Succeeded(session())));
        });

        assert_eq!(auth.calls.get(), 1);
        assert_eq!(form.borrow().email(), "typed@later.com");
    }

    #[test]
    fn test_result_after_drop_is_discarded() {
        let form = filled_form("u@test.com", "pw");
        let weak = Rc::downgrade(&form);
        let (sender, receiver) = oneshot::channel();
        let auth = GatedAuthenticator {
            calls: Cell::new(0),
            gate: RefCell::new(Some(receiver)),
        };

        let outcome = block_on(async {
            let pending = submit(&weak, &auth);
            let unmount = async {
                drop(form);
                let _ = sender.send(Err(AuthError::InvalidCredentials));
            };
            let (outcome, ()) = futures::join!(pending, unmount);
            outcome
        });

        assert_eq!(outcome, None);
        assert_eq!(auth.calls.get(), 1);
        assert!(weak.upgrade().is_none());
    }

    #[test]
    fn test_submit_on_dropped_form_does_nothing() {
        let form = filled_form("u@test.com", "pw");
        let weak = Rc::downgrade(&form);
        drop(form);
        let auth = RecordingAuthenticator::answering(Ok(session()));

        assert_eq!(block_on(submit(&weak, &auth)), None);
        assert!(auth.calls.borrow().is_empty());
    }
}
