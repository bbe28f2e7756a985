//! Admin dashboard route handlers.
//!
//! Every handler here takes the `RequireAdmin` extractor; unauthenticated
//! requests are redirected to `/login` before any side effect runs.
//! Mutations redirect back to `/admin` on completion.

pub mod dashboard;
pub mod projects;
pub mod works;

/// Map a form's image field to the repository's optional-image policy:
/// blank input means "no value provided", anything else is trimmed.
pub(crate) fn blank_to_none(image: &str) -> Option<String> {
    let trimmed = image.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_to_none() {
        assert_eq!(blank_to_none(""), None);
        assert_eq!(blank_to_none("   "), None);
        assert_eq!(
            blank_to_none(" /img/a.png "),
            Some("/img/a.png".to_string())
        );
    }
}
