//! shelfdb Demo Binary
//!
//! Seeds a collection with a few books and reads them back.

use clap::Parser;
use shelfdb::book::{Book, BookId, BOOK_ID_SIZE, BOOK_SIZE};
use shelfdb::{Collection, Config};
use tracing_subscriber::{fmt, EnvFilter};

/// shelfdb demo
#[derive(Parser, Debug)]
#[command(name = "shelfdb-demo")]
#[command(about = "Seed an embedded record store with books and read them back")]
#[command(version)]
struct Args {
    /// Data directory
    #[arg(short, long, default_value = "./shelfdb_data")]
    data_dir: String,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,shelfdb=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("shelfdb demo v{}", shelfdb::VERSION);
    tracing::info!("Data directory: {}", args.data_dir);

    if let Err(e) = run(&args) {
        tracing::error!("Demo failed: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> shelfdb::Result<()> {
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .id_size(BOOK_ID_SIZE as u16)
        .item_size(BOOK_SIZE as u16)
        .build();

    let mut collection = Collection::open(config)?;

    // Start from a clean slate so reruns print the same catalog.
    collection.reset()?;

    let books = [
        Book::new("Game of Thrones", 1996),
        Book::new("Harry Potter", 1997),
        Book::new("Lord of the Rings", 1954),
        Book::new("The Little Prince", 1943),
    ];

    let mut ids = Vec::new();
    for book in &books {
        let id = BookId::random();
        collection.put(&id, book)?;
        ids.push(id);
    }

    tracing::info!("Seeded {} books", collection.count()?);

    let mut book = Book::default();
    for id in &ids {
        collection.get(id, &mut book)?;
        println!("{}  {} ({})", id, book.title, book.year);
    }

    // Update one record in place, then drop another.
    collection.put(
        &ids[1],
        &Book::new("Harry Potter and the Order of the Phoenix", 2003),
    )?;
    collection.remove(&ids[2])?;

    println!("--- after update + remove ---");
    for id in &ids {
        match collection.get(id, &mut book) {
            Ok(()) => println!("{}  {} ({})", id, book.title, book.year),
            Err(shelfdb::ShelfError::ItemNotFound) => println!("{}  <removed>", id),
            Err(e) => return Err(e),
        }
    }

    tracing::info!("{} books remain", collection.count()?);
    collection.close()
}
