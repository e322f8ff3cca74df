use std::path::Path;

use colored::Colorize;

use crate::cli::{load_document, render, save_document};
use crate::error::Result;
use crate::reconciler::reconcile;

pub fn run(file: &str, apply: bool) -> Result<()> {
    let mut doc = load_document(file)?;
    let outcome = reconcile(&doc);

    render::print_audit_entries(&outcome.log);
    if outcome.is_valid {
        println!("{}", "Document reconciles.".green());
    } else {
        println!("{}", "Document does not reconcile. Manual review required.".yellow());
    }

    if apply {
        doc.lines = outcome.healed_lines;
        doc.audit_log.extend(outcome.log);
        save_document(Path::new(file), &doc)?;
        println!("Updated {file}");
    }
    Ok(())
}
