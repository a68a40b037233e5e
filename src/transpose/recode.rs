use serde::{Deserialize, Serialize};

/// Computes a new status code for a sample from its individual id
///
/// `None` leaves the current status untouched.
pub trait StatusRule {
    fn status_for(&self, individual_id: &str) -> Option<String>;
}

impl<F> StatusRule for F
where
    F: Fn(&str) -> Option<String>,
{
    fn status_for(&self, individual_id: &str) -> Option<String> {
        self(individual_id)
    }
}

/// Recode status by the parity of a numeric individual id
///
/// The rule is evaluated in order:
///
/// 1. an id equal to `except_id` keeps its status
/// 2. an even id gets `even_code`
/// 3. an odd id gets `odd_code`
///
/// Ids that are not integers keep their status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParityRule {
    pub even_code: String,
    pub odd_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub except_id: Option<String>,
}

impl ParityRule {
    pub fn new(even_code: impl Into<String>, odd_code: impl Into<String>) -> Self {
        Self {
            even_code: even_code.into(),
            odd_code: odd_code.into(),
            except_id: None,
        }
    }

    #[must_use]
    pub fn with_except_id(mut self, except_id: impl Into<String>) -> Self {
        self.except_id = Some(except_id.into());
        self
    }
}

impl StatusRule for ParityRule {
    fn status_for(&self, individual_id: &str) -> Option<String> {
        if self.except_id.as_deref() == Some(individual_id) {
            return None;
        }

        match is_even(individual_id) {
            Some(true) => Some(self.even_code.clone()),
            Some(false) => Some(self.odd_code.clone()),
            None => {
                tracing::debug!(individual_id, "Non-numeric individual id, status unchanged");
                None
            }
        }
    }
}

/// Parity of a decimal integer of any length, `None` if `s` is not one
fn is_even(s: &str) -> Option<bool> {
    let digits = s.strip_prefix(['-', '+']).unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.bytes().last().map(|b| (b - b'0') % 2 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule() -> ParityRule {
        ParityRule::new("2", "1").with_except_id("27")
    }

    #[test]
    fn test_even_id() {
        assert_eq!(rule().status_for("4"), Some("2".to_string()));
    }

    #[test]
    fn test_excepted_id() {
        assert_eq!(rule().status_for("27"), None);
    }

    #[test]
    fn test_odd_id() {
        assert_eq!(rule().status_for("5"), Some("1".to_string()));
        // Odd, but only "27" itself is excepted
        assert_eq!(rule().status_for("127"), Some("1".to_string()));
    }

    #[test]
    fn test_without_except_id() {
        let rule = ParityRule::new("case", "control");
        assert_eq!(rule.status_for("27"), Some("control".to_string()));
    }

    #[test]
    fn test_non_numeric_id_unchanged() {
        assert_eq!(rule().status_for("IND4"), None);
        assert_eq!(rule().status_for(""), None);
        assert_eq!(rule().status_for("-"), None);
    }

    #[test]
    fn test_is_even() {
        assert_eq!(is_even("0"), Some(true));
        assert_eq!(is_even("-3"), Some(false));
        assert_eq!(is_even("+10"), Some(true));
        assert_eq!(is_even("123456789012345678901234567890"), Some(true));
        assert_eq!(is_even("1.5"), None);
    }

    #[test]
    fn test_closure_rule() {
        let rule = |id: &str| id.starts_with("CASE").then(|| "2".to_string());
        assert_eq!(rule.status_for("CASE7"), Some("2".to_string()));
        assert_eq!(rule.status_for("CTRL7"), None);
    }
}
