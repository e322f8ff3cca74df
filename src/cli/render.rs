use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::fmt::{money, percent};
use crate::models::{AuditEntry, AuditKind, DocStatus, Document};

fn status_label(status: DocStatus) -> String {
    match status {
        DocStatus::Processing => "PROCESSING".dimmed().to_string(),
        DocStatus::Ready => "READY".green().to_string(),
        DocStatus::Review => "REVIEW".yellow().to_string(),
        DocStatus::Posted => "POSTED".blue().to_string(),
    }
}

fn kind_label(kind: AuditKind) -> String {
    match kind {
        AuditKind::Info => "INFO".normal().to_string(),
        AuditKind::Warning => "WARNING".yellow().bold().to_string(),
        AuditKind::Fix => "FIX".cyan().to_string(),
        AuditKind::Success => "SUCCESS".green().to_string(),
    }
}

pub fn print_document(doc: &Document) {
    println!(
        "{} {} [{}] {} match",
        doc.id.bold(),
        doc.file_name,
        status_label(doc.status),
        percent(doc.confidence)
    );
    println!(
        "  {:?} from {} | date {} | ref {} | total {}",
        doc.doc_type,
        doc.supplier_name,
        if doc.invoice_date.is_empty() { "-" } else { &doc.invoice_date },
        if doc.ref_number.is_empty() { "-" } else { &doc.ref_number },
        money(doc.total_amount)
    );

    let mut table = Table::new();
    table.set_header(vec!["#", "Description", "GL", "VAT", "Amount", "Spread"]);
    for (idx, line) in doc.lines.iter().enumerate() {
        table.add_row(vec![
            Cell::new(idx + 1),
            Cell::new(&line.description),
            Cell::new(&line.gl_account),
            Cell::new(&line.vat_code),
            Cell::new(money(line.amount)),
            Cell::new(if line.is_spread { "yes" } else { "" }),
        ]);
    }
    println!("{table}");

    for error in &doc.validation_errors {
        println!("  {} {}", "!".red().bold(), error.red());
    }
}

pub fn print_audit_entries(entries: &[AuditEntry]) {
    for entry in entries {
        println!("  [{}] {} {}", entry.timestamp, kind_label(entry.kind), entry.message);
        if let Some(details) = &entry.details {
            println!("      {}", details.dimmed());
        }
    }
}
