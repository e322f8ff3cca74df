pub mod check;
pub mod classify;
pub mod config;
pub mod demo;
pub mod ingest;
pub mod post;
pub mod refdata;
pub mod render;

use std::path::Path;

use clap::{Parser, Subcommand};

use crate::error::Result;
use crate::models::Document;

pub(crate) fn load_document(path: &str) -> Result<Document> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub(crate) fn save_document(path: &Path, doc: &Document) -> Result<()> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(())
}

#[derive(Parser)]
#[command(name = "otto", about = "AI-assisted invoice intake and review for small admin offices.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the intake pipeline on one or more intake sheets (JSON).
    Ingest {
        /// Paths to intake sheet JSON files
        files: Vec<String>,
        /// Directory to write resulting document JSON files into
        #[arg(long)]
        out: Option<String>,
    },
    /// Classify raw document text without building a document.
    Classify {
        /// Raw extracted text
        #[arg(long)]
        text: String,
        /// Original file name
        #[arg(long, default_value = "document.pdf")]
        file: String,
    },
    /// Re-run self-healing validation on a saved document.
    Check {
        /// Path to a document JSON file
        file: String,
        /// Write the healed document back to the same file
        #[arg(long)]
        apply: bool,
    },
    /// Validate a saved document and post it to the ledger.
    Post {
        /// Path to a document JSON file
        file: String,
    },
    /// List the reference dataset.
    Refdata {
        #[command(subcommand)]
        command: RefdataCommands,
    },
    /// Run the canned two-document sample batch end to end.
    Demo,
    /// Show or change settings (user name, refdata override).
    Config {
        /// Set the user name
        #[arg(long)]
        user: Option<String>,
        /// Path to a reference-data JSON override
        #[arg(long)]
        refdata: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum RefdataCommands {
    /// List suppliers and collection accounts.
    Suppliers,
    /// List GL accounts.
    Accounts,
    /// List VAT codes.
    Vat,
}
