//! Tests for the reference book codec
//!
//! These tests verify:
//! - Fixed-width marshal/unmarshal round trips
//! - Title padding and truncation
//! - Slice width validation

use shelfdb::book::{Book, BookId, BOOK_SIZE, BOOK_TITLE_SIZE};
use shelfdb::{FixedCodec, ShelfError};

// =============================================================================
// Book Codec Tests
// =============================================================================

#[test]
fn test_book_round_trip() {
    let book = Book::new("Game of Thrones", 1996);

    let bytes = book.marshal().unwrap();
    assert_eq!(bytes.len(), BOOK_SIZE);

    let mut decoded = Book::default();
    decoded.unmarshal(&bytes).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn test_book_empty_title_round_trip() {
    let book = Book::new("", 0);

    let mut decoded = Book::default();
    decoded.unmarshal(&book.marshal().unwrap()).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn test_book_title_is_nul_padded() {
    let bytes = Book::new("Dune", 1965).marshal().unwrap();

    assert_eq!(&bytes[..4], b"Dune");
    assert!(bytes[4..BOOK_TITLE_SIZE].iter().all(|&b| b == 0));
}

#[test]
fn test_book_long_title_truncated() {
    let long = "x".repeat(BOOK_TITLE_SIZE * 2);
    let bytes = Book::new(long, 2024).marshal().unwrap();
    assert_eq!(bytes.len(), BOOK_SIZE);

    // At most 127 title bytes survive; the terminator slot stays NUL.
    assert_eq!(bytes[BOOK_TITLE_SIZE - 1], 0);

    let mut decoded = Book::default();
    decoded.unmarshal(&bytes).unwrap();
    assert_eq!(decoded.title.len(), BOOK_TITLE_SIZE - 1);
    assert_eq!(decoded.year, 2024);
}

#[test]
fn test_book_unmarshal_wrong_width_fails() {
    let mut book = Book::default();

    let err = book.unmarshal(&[0u8; BOOK_SIZE - 1]).unwrap_err();
    assert!(matches!(err, ShelfError::InvalidSliceSize));

    let err = book.unmarshal(&[0u8; BOOK_SIZE + 1]).unwrap_err();
    assert!(matches!(err, ShelfError::InvalidSliceSize));
}

// =============================================================================
// BookId Codec Tests
// =============================================================================

#[test]
fn test_book_id_round_trip() {
    let id = BookId::random();

    let bytes = id.marshal().unwrap();
    assert_eq!(bytes.len(), 16);

    let mut decoded = BookId::default();
    decoded.unmarshal(&bytes).unwrap();
    assert_eq!(decoded, id);
}

#[test]
fn test_book_id_unmarshal_wrong_width_fails() {
    let mut id = BookId::default();

    let err = id.unmarshal(&[0u8; 15]).unwrap_err();
    assert!(matches!(err, ShelfError::InvalidSliceSize));
}

#[test]
fn test_book_ids_are_distinct() {
    let a = BookId::random();
    let b = BookId::random();
    assert_ne!(a, b);
}
