use crate::error::{AbookError, AbookResult};

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> AbookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(AbookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_blank_accepts_valid_string() {
        assert_eq!(non_blank("Alice", "name").unwrap(), "Alice");
    }

    #[test]
    fn non_blank_trims_whitespace() {
        assert_eq!(non_blank("  Alice  ", "name").unwrap(), "Alice");
    }

    #[test]
    fn non_blank_rejects_empty() {
        assert!(non_blank("", "name").is_err());
    }

    #[test]
    fn non_blank_rejects_whitespace_only() {
        assert!(non_blank("   ", "name").is_err());
    }

}
