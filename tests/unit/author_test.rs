//! Tests for the author model

use masthead::models::{Author, ValidationError};

// =============================================================================
// NAME VALIDATION TESTS
// =============================================================================

#[test]
fn test_author_new_valid_name() {
    let author = Author::new("Joe").unwrap();
    assert_eq!(author.name(), "Joe");
}

#[test]
fn test_author_name_reads_back_unchanged() {
    // Surrounding whitespace is kept as long as the name is not all whitespace
    let author = Author::new("  Joe  ").unwrap();
    assert_eq!(author.name(), "  Joe  ");
}

#[test]
fn test_author_new_empty_name_rejected() {
    assert_eq!(Author::new("").unwrap_err(), ValidationError::EmptyAuthorName);
}

#[test]
fn test_author_new_whitespace_name_rejected() {
    assert_eq!(Author::new("   \t\n").unwrap_err(), ValidationError::EmptyAuthorName);
}

#[test]
fn test_author_error_message() {
    let err = Author::new("").unwrap_err();
    assert_eq!(err.to_string(), "author name must be a non-empty string");
}

// =============================================================================
// ARTICLE LIST TESTS
// =============================================================================

#[test]
fn test_author_starts_with_no_articles() {
    let author = Author::new("Joe").unwrap();
    assert!(author.article_ids().is_empty());
}
