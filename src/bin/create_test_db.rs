use std::error::Error;
use std::path::Path;
use std::process::exit;

use clap::Parser;
use rusqlite::Connection;

use shopfront::{
    CategoryName, ItemImages, NewCategory, NewItem, NewUser, create_category, create_item,
    create_user, initialize_db,
};

/// A utility for creating a test database for the JSON API server of shopfront.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to save the SQLite database to.
    #[arg(long, short)]
    output_path: String,
}

/// Create and populate a database for manual testing.
fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let output_path = Path::new(&args.output_path);

    match output_path.extension() {
        None => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        Some(extension) if extension.is_empty() => {
            eprintln!("Output path must include a file extension (e.g., 'my_database.db').");
            exit(1);
        }
        _ => {}
    }

    if output_path.is_file() {
        eprintln!("File already exists at {output_path:#?}!");
        exit(1);
    }

    println!("Creating database at {output_path:#?}");
    let conn = Connection::open(output_path)?;

    initialize_db(&conn)?;

    println!("Creating test category...");
    let category = create_category(
        NewCategory {
            name: CategoryName::new("Electronics")?,
            is_active: true,
        },
        &conn,
    )?;

    println!("Creating test items...");
    create_item(
        NewItem {
            name: "Phone".to_owned(),
            description: "Smart phone".to_owned(),
            price: 299.99,
            images: ItemImages::new(vec!["p1.jpg".to_owned(), "p2.jpg".to_owned()])?,
            category_id: category.id,
        },
        &conn,
    )?;
    create_item(
        NewItem {
            name: "Headphones".to_owned(),
            description: "Noise cancelling headphones".to_owned(),
            price: 149.5,
            images: ItemImages::default(),
            category_id: category.id,
        },
        &conn,
    )?;

    println!("Creating test user...");
    create_user(
        NewUser {
            name: "Test User".to_owned(),
            email: "test@example.com".to_owned(),
            cart: String::new(),
        },
        &conn,
    )?;

    println!("Success!");

    Ok(())
}
