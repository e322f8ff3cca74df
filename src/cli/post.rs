use std::path::Path;

use crate::cli::{load_document, render, save_document};
use crate::error::Result;
use crate::ledger::{post_document, ConsoleLedger};

pub fn run(file: &str) -> Result<()> {
    let mut doc = load_document(file)?;
    let mut sink = ConsoleLedger;

    match post_document(&mut sink, &mut doc) {
        Ok(()) => {
            save_document(Path::new(file), &doc)?;
            Ok(())
        }
        Err(e) => {
            // Keep the diagnostics on file so the reviewer sees them.
            render::print_audit_entries(&doc.audit_log);
            for error in &doc.validation_errors {
                println!("  ! {error}");
            }
            save_document(Path::new(file), &doc)?;
            Err(e)
        }
    }
}
