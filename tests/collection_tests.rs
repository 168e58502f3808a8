//! Tests for the collection
//!
//! These tests verify:
//! - Keyed put/get/remove over a domain record type
//! - Update-in-place semantics (no data storage growth)
//! - "item not found" on absent keys
//! - Reset and reopen behavior
//! - The documented dead-slot limitation after removals

use std::fs;

use shelfdb::book::{Book, BookId, BOOK_ID_SIZE, BOOK_SIZE};
use shelfdb::{Collection, Config, FixedCodec, Result, ShelfError};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn book_config(dir: &TempDir) -> Config {
    Config::builder()
        .data_dir(dir.path().join("books"))
        .id_size(BOOK_ID_SIZE as u16)
        .item_size(BOOK_SIZE as u16)
        .build()
}

/// Collection seeded with the four classic books
fn setup_collection() -> (TempDir, Collection, Vec<BookId>, Vec<Book>) {
    let temp_dir = TempDir::new().unwrap();
    let mut collection = Collection::open(book_config(&temp_dir)).unwrap();

    let books = vec![
        Book::new("Game of Thrones", 1996),
        Book::new("Harry Potter", 1997),
        Book::new("Lord of the Rings", 1954),
        Book::new("The Little Prince", 1943),
    ];

    let mut ids = Vec::new();
    for book in &books {
        let id = BookId::random();
        collection.put(&id, book).unwrap();
        ids.push(id);
    }

    (temp_dir, collection, ids, books)
}

fn get_book(collection: &mut Collection, id: &BookId) -> Book {
    let mut book = Book::default();
    collection.get(id, &mut book).unwrap();
    book
}

// =============================================================================
// Put / Get Tests
// =============================================================================

#[test]
fn test_put_get_round_trip() {
    let (_temp, mut collection, ids, books) = setup_collection();

    for (id, expected) in ids.iter().zip(&books) {
        assert_eq!(&get_book(&mut collection, id), expected);
    }
}

#[test]
fn test_count_after_seeding() {
    let (_temp, collection, _, _) = setup_collection();

    assert_eq!(collection.count().unwrap(), 4);
}

#[test]
fn test_get_absent_id_fails() {
    let (_temp, mut collection, _, _) = setup_collection();

    let mut book = Book::default();
    let err = collection.get(&BookId::random(), &mut book).unwrap_err();
    assert!(matches!(err, ShelfError::ItemNotFound));
}

#[test]
fn test_update_overwrites_in_place() {
    let (_temp, mut collection, ids, _) = setup_collection();

    let updated = Book::new("Harry Potter and the Order of the Phoenix", 2003);
    collection.put(&ids[1], &updated).unwrap();

    assert_eq!(collection.count().unwrap(), 4);
    assert_eq!(get_book(&mut collection, &ids[1]), updated);
}

#[test]
fn test_update_does_not_grow_data_file() {
    let (temp, mut collection, ids, _) = setup_collection();
    let data_path = temp.path().join("books").join("data");

    let before = fs::metadata(&data_path).unwrap().len();
    collection
        .put(&ids[0], &Book::new("A Game of Thrones", 1996))
        .unwrap();
    let after = fs::metadata(&data_path).unwrap().len();

    assert_eq!(before, after);
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_then_get_fails() {
    let (_temp, mut collection, ids, books) = setup_collection();

    collection.remove(&ids[2]).unwrap();

    assert_eq!(collection.count().unwrap(), 3);

    let mut book = Book::default();
    let err = collection.get(&ids[2], &mut book).unwrap_err();
    assert!(matches!(err, ShelfError::ItemNotFound));

    // The remaining three still resolve correctly.
    for (i, id) in ids.iter().enumerate() {
        if i != 2 {
            assert_eq!(get_book(&mut collection, id), books[i]);
        }
    }
}

#[test]
fn test_remove_absent_id_is_noop() {
    let (_temp, mut collection, _, _) = setup_collection();

    collection.remove(&BookId::random()).unwrap();
    assert_eq!(collection.count().unwrap(), 4);
}

#[test]
fn test_removed_data_slot_is_not_reclaimed() {
    let (temp, mut collection, ids, _) = setup_collection();
    let data_path = temp.path().join("books").join("data");

    let before = fs::metadata(&data_path).unwrap().len();
    collection.remove(&ids[0]).unwrap();
    let after = fs::metadata(&data_path).unwrap().len();

    // The key entry is gone but the data slot stays behind as dead space.
    assert_eq!(before, after);

    // A subsequent insert appends past the dead slot.
    collection
        .put(&BookId::random(), &Book::new("Dune", 1965))
        .unwrap();
    let grown = fs::metadata(&data_path).unwrap().len();
    assert_eq!(grown, after + BOOK_SIZE as u64);
}

// =============================================================================
// Reset / Lifecycle Tests
// =============================================================================

#[test]
fn test_reset_empties_both_storages() {
    let (temp, mut collection, ids, _) = setup_collection();

    collection.reset().unwrap();

    assert_eq!(collection.count().unwrap(), 0);

    let mut book = Book::default();
    for id in &ids {
        let err = collection.get(id, &mut book).unwrap_err();
        assert!(matches!(err, ShelfError::ItemNotFound));
    }

    let dir = temp.path().join("books");
    assert_eq!(fs::metadata(dir.join("data")).unwrap().len(), 0);
    assert_eq!(fs::metadata(dir.join("key")).unwrap().len(), 0);
}

#[test]
fn test_reopen_preserves_records() {
    let temp_dir = TempDir::new().unwrap();
    let id = BookId::random();
    let book = Book::new("The Little Prince", 1943);

    {
        let mut collection = Collection::open(book_config(&temp_dir)).unwrap();
        collection.put(&id, &book).unwrap();
        collection.close().unwrap();
    }

    let mut collection = Collection::open(book_config(&temp_dir)).unwrap();
    assert_eq!(collection.count().unwrap(), 1);
    assert_eq!(get_book(&mut collection, &id), book);
}

#[test]
fn test_close_succeeds() {
    let (_temp, collection, _, _) = setup_collection();

    collection.close().unwrap();
}

// =============================================================================
// Boundary Validation Tests
// =============================================================================

/// A record that marshals to the wrong width
struct Postcard(Vec<u8>);

impl FixedCodec for Postcard {
    fn marshal(&self) -> Result<Vec<u8>> {
        Ok(self.0.clone())
    }

    fn unmarshal(&mut self, buf: &[u8]) -> Result<()> {
        self.0 = buf.to_vec();
        Ok(())
    }
}

#[test]
fn test_put_wrong_record_width_fails() {
    let (_temp, mut collection, _, _) = setup_collection();

    let err = collection
        .put(&BookId::random(), &Postcard(vec![0u8; 10]))
        .unwrap_err();
    assert!(matches!(err, ShelfError::InvalidSliceSize));
    assert_eq!(collection.count().unwrap(), 4);
}

// =============================================================================
// End-to-End Scenario
// =============================================================================

#[test]
fn test_full_catalog_scenario() {
    let (_temp, mut collection, ids, books) = setup_collection();

    // Seeded catalog resolves completely.
    assert_eq!(collection.count().unwrap(), 4);
    for (id, expected) in ids.iter().zip(&books) {
        assert_eq!(&get_book(&mut collection, id), expected);
    }

    // Update the second book; count is unchanged.
    let updated = Book::new("Harry Potter and the Order of the Phoenix", 2003);
    collection.put(&ids[1], &updated).unwrap();
    assert_eq!(collection.count().unwrap(), 4);
    assert_eq!(get_book(&mut collection, &ids[1]), updated);

    // Remove the third; it stops resolving, the rest survive.
    collection.remove(&ids[2]).unwrap();
    assert_eq!(collection.count().unwrap(), 3);

    let mut book = Book::default();
    assert!(matches!(
        collection.get(&ids[2], &mut book).unwrap_err(),
        ShelfError::ItemNotFound
    ));
    assert_eq!(get_book(&mut collection, &ids[0]), books[0]);
    assert_eq!(get_book(&mut collection, &ids[1]), updated);
    assert_eq!(get_book(&mut collection, &ids[3]), books[3]);
}
