use crate::parser::markers::{INVALID_PASSWORD, UNKNOWN_ACCOUNT};

/// Whether the page returned by the login form is a successful login.
///
/// Only the two known failure messages are recognised; any other page is
/// taken as a success.
pub fn login_was_valid(page: &str) -> bool {
    let page = page.to_ascii_lowercase();

    ![INVALID_PASSWORD, UNKNOWN_ACCOUNT]
        .iter()
        .any(|phrase| page.contains(&phrase.to_ascii_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_failures() {
        assert!(!login_was_valid("Error Invalid Password"));
        assert!(!login_was_valid("<div class=\"alert\">ERROR INVALID PASSWORD</div>"));
        assert!(!login_was_valid("error specified account does not exist"));
    }

    #[test]
    fn test_anything_else_is_success() {
        assert!(login_was_valid("Welcome back"));
        assert!(login_was_valid(""));
        assert!(login_was_valid("Error Too Many Attempts"));
    }
}
