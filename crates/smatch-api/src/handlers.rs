//! Request handlers.

pub mod applications;
pub mod assessments;
pub mod health;
pub mod jobs;
pub mod users;

pub use applications::*;
pub use assessments::*;
pub use health::*;
pub use jobs::*;
pub use users::*;

/// Required-field check: absent and empty-string fields are both
/// treated as missing.
pub(crate) fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::non_empty;

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty(None), None);
        assert_eq!(non_empty(Some(String::new())), None);
        assert_eq!(non_empty(Some("x".to_string())), Some("x".to_string()));
    }
}
