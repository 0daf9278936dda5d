use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use folio_sdk::DEFAULT_CONFIG_PATH;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Folio — a book catalog kept in a single JSON document",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Catalog document to use (overrides the config file)
    #[arg(long, global = true, env = "FOLIO_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Config file naming the catalog document
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Command {
    /// List every book in stored order
    List(ListArgs),
    /// Append a book to the catalog
    Add(AddArgs),
    /// Find books whose title contains a key, ignoring case
    Search(SearchArgs),
    /// List books by author, then title
    Sorted(SortedArgs),
    /// Replace the catalog with books from a JSON file
    Import(ImportArgs),
    /// Remove every book from the catalog
    Clear(ClearArgs),
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct AddArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub author: String,
    #[arg(long, default_value = "0")]
    pub pages: u16,
}

#[derive(Args)]
pub struct SearchArgs {
    pub key: String,
}

#[derive(Args)]
pub struct SortedArgs {}

#[derive(Args)]
pub struct ImportArgs {
    /// JSON array of `{"title", "author", "pages"}` objects
    pub file: PathBuf,
}

#[derive(Args)]
pub struct ClearArgs {
    /// Confirm that the whole catalog should be emptied
    #[arg(long)]
    pub yes: bool,
}
