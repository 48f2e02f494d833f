//! Tests for the magazine model

use masthead::models::{Magazine, ValidationError};

// =============================================================================
// NAME LENGTH TESTS
// =============================================================================

#[test]
fn test_magazine_new_valid() {
    let magazine = Magazine::new("Info Daily", "Technology").unwrap();
    assert_eq!(magazine.name(), "Info Daily");
    assert_eq!(magazine.category(), "Technology");
}

#[test]
fn test_magazine_name_length_boundaries() {
    // 2 and 16 characters are valid, 1 and 17 are not
    assert!(Magazine::new("ab", "Tech").is_ok());
    assert!(Magazine::new("a".repeat(16), "Tech").is_ok());
    assert_eq!(
        Magazine::new("a", "Tech").unwrap_err(),
        ValidationError::MagazineNameLength { got: 1 }
    );
    assert_eq!(
        Magazine::new("a".repeat(17), "Tech").unwrap_err(),
        ValidationError::MagazineNameLength { got: 17 }
    );
}

#[test]
fn test_magazine_name_length_counts_characters_not_bytes() {
    // 16 two-byte characters, 32 bytes
    let name = "é".repeat(16);
    assert_eq!(name.len(), 32);
    assert!(Magazine::new(name, "Tech").is_ok());
}

#[test]
fn test_magazine_empty_name_rejected() {
    assert_eq!(
        Magazine::new("", "Tech").unwrap_err(),
        ValidationError::MagazineNameLength { got: 0 }
    );
}

#[test]
fn test_magazine_name_error_message() {
    let err = Magazine::new("a", "Tech").unwrap_err();
    assert_eq!(err.to_string(), "magazine name must be 2 to 16 characters, got 1");
}

// =============================================================================
// CATEGORY TESTS
// =============================================================================

#[test]
fn test_magazine_empty_category_rejected() {
    assert_eq!(
        Magazine::new("Info Daily", "").unwrap_err(),
        ValidationError::EmptyCategory
    );
}

#[test]
fn test_magazine_whitespace_category_rejected() {
    assert_eq!(
        Magazine::new("Info Daily", "  \t").unwrap_err(),
        ValidationError::EmptyCategory
    );
}

// =============================================================================
// ARTICLE LIST TESTS
// =============================================================================

#[test]
fn test_magazine_starts_with_no_articles() {
    let magazine = Magazine::new("Info Daily", "Technology").unwrap();
    assert!(magazine.article_ids().is_empty());
}
