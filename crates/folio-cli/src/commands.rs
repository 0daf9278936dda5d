use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use colored::Colorize;
use folio_sdk::{open_catalog, Book, FolioConfig};
use tracing::debug;

use crate::cli::*;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let path = catalog_path(cli.catalog.as_deref(), &cli.config)?;
    debug!(path = %path.display(), "using catalog");
    let catalog = open_catalog(path);
    let format = cli.format;

    match cli.command {
        Command::List(_) => print_books(&catalog.get_all().await?, &format),
        Command::Add(args) => {
            let book = Book::new(args.title, args.author, args.pages);
            let summary = describe(&book);
            catalog.add(book).await?;
            println!("{} Added {}", "✓".green().bold(), summary);
            Ok(())
        }
        Command::Search(args) => print_books(&catalog.search(&args.key).await?, &format),
        Command::Sorted(_) => print_books(&catalog.get_sorted().await?, &format),
        Command::Import(args) => {
            let books = read_books(&args.file)?;
            let count = books.len();
            catalog.replace_all(books).await?;
            println!("{} Imported {} books from {}", "✓".green().bold(), count, args.file.display());
            Ok(())
        }
        Command::Clear(args) => {
            if !args.yes {
                bail!("refusing to empty the catalog without --yes");
            }
            catalog.replace_all(Vec::new()).await?;
            println!("{} Catalog cleared.", "✓".green().bold());
            Ok(())
        }
    }
}

/// Flag (or `FOLIO_CATALOG`) first, then the config file, then the default.
fn catalog_path(flag: Option<&Path>, config: &Path) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }
    let config = FolioConfig::load(config)?;
    Ok(config.catalog.path)
}

fn read_books(file: &Path) -> anyhow::Result<Vec<Book>> {
    let text = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    serde_json::from_str(&text).with_context(|| format!("{} is not a JSON array of books", file.display()))
}

fn print_books(books: &[Book], format: &OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(books)?),
        OutputFormat::Text if books.is_empty() => println!("{}", "No books.".dimmed()),
        OutputFormat::Text => {
            for book in books {
                println!("{}", describe(book));
            }
        }
    }
    Ok(())
}

fn describe(book: &Book) -> String {
    format!(
        "{} by {} ({} pages)",
        format!("\"{}\"", book.title).bold(),
        book.author.cyan(),
        book.pages
    )
}
