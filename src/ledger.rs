use colored::Colorize;

use crate::error::{OttoError, Result};
use crate::fmt::money;
use crate::models::{DocStatus, Document};
use crate::reconciler::reconcile;

/// Destination for finished documents. The real ledger system sits
/// behind this seam; connectivity failures are its problem, not the
/// pipeline's.
pub trait LedgerSink {
    fn post(&mut self, doc: &Document, audit_note: &str) -> Result<()>;
}

/// Sink that prints the posting summary to stdout.
pub struct ConsoleLedger;

impl LedgerSink for ConsoleLedger {
    fn post(&mut self, doc: &Document, audit_note: &str) -> Result<()> {
        println!(
            "{} {} ({}) for {} to {}",
            "Posted".green().bold(),
            doc.id,
            doc.file_name,
            money(doc.total_amount),
            doc.supplier_name
        );
        println!("{audit_note}");
        Ok(())
    }
}

/// Human-readable note summarizing what was booked, attached to the
/// posting for the audit file.
pub fn audit_note(doc: &Document) -> String {
    let fixes = doc
        .audit_log
        .iter()
        .filter(|e| e.kind == crate::models::AuditKind::Fix)
        .count();
    format!(
        "Booked {} line(s) totalling {} against supplier {} (confidence {:.0}%, {} automatic correction(s)).",
        doc.lines.len(),
        money(doc.total_amount),
        doc.supplier_name,
        doc.confidence * 100.0,
        fixes
    )
}

/// Validate and hand a document to the sink. Refuses documents that do
/// not reconcile or carry referential errors; the caller keeps the
/// document for further editing.
pub fn post_document(sink: &mut dyn LedgerSink, doc: &mut Document) -> Result<()> {
    if !doc.validation_errors.is_empty() {
        return Err(OttoError::NotPostable(format!(
            "{} unresolved validation error(s)",
            doc.validation_errors.len()
        )));
    }
    let outcome = reconcile(doc);
    doc.lines = outcome.healed_lines;
    doc.audit_log.extend(outcome.log);
    if !outcome.is_valid {
        return Err(OttoError::NotPostable(
            "lines do not reconcile with the document total".to_string(),
        ));
    }
    sink.post(doc, &audit_note(doc))?;
    doc.status = DocStatus::Posted;
    Ok(())
}
