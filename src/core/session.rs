/// The single fixed credential pair. Not configurable by design.
const USERNAME: &str = "user";
const PASSWORD: &str = "pass";

const INVALID_CREDENTIALS: &str = "Invalid username or password";

/// In-memory session gate. Nothing here is ever persisted.
#[derive(Debug, Default)]
pub struct Session {
    pub username: String,
    pub password: String,
    logged_in: bool,
    error: Option<String>,
}

impl Session {
    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Check the entered credentials against the fixed pair.
    /// Success clears any previous error; failure leaves the gate closed.
    pub fn login(&mut self) {
        if self.username == USERNAME && self.password == PASSWORD {
            self.logged_in = true;
            self.error = None;
        } else {
            self.logged_in = false;
            self.error = Some(INVALID_CREDENTIALS.to_string());
        }
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.username.clear();
        self.password.clear();
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn correct_pair_opens_the_gate() {
        let mut session = Session::default();
        session.username = "user".to_string();
        session.password = "pass".to_string();
        session.login();
        assert!(session.logged_in());
        assert!(session.error().is_none());
    }

    #[test]
    fn wrong_pair_sets_error() {
        let mut session = Session::default();
        session.username = "user".to_string();
        session.password = "wrong".to_string();
        session.login();
        assert!(!session.logged_in());
        assert!(!session.error().unwrap().is_empty());
    }

    #[test]
    fn retry_after_failure_clears_error() {
        let mut session = Session::default();
        session.login();
        assert!(session.error().is_some());
        session.username = "user".to_string();
        session.password = "pass".to_string();
        session.login();
        assert!(session.logged_in());
        assert!(session.error().is_none());
    }

    #[test]
    fn logout_resets_everything() {
        let mut session = Session::default();
        session.username = "user".to_string();
        session.password = "pass".to_string();
        session.login();
        session.logout();
        assert!(!session.logged_in());
        assert!(session.username.is_empty());
        assert!(session.password.is_empty());
    }
}
