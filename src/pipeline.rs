use chrono::Local;

use crate::classifier::classify;
use crate::describer::{compose_subject, shorten};
use crate::models::{AuditEntry, AuditKind, DocStatus, Document, Intake, LineItem};
use crate::refdata::ReferenceData;
use crate::spread::is_spread_candidate;

/// Documents at or above this confidence land in READY; anything
/// below (or with referential errors) needs human review first.
const READY_CONFIDENCE: f64 = 0.9;

/// Assemble a full `Document` from an intake snapshot.
///
/// Runs the classifier on the raw text, composes the header subject on
/// the first line, shortens the remaining line descriptions, flags
/// spread candidates, and checks every line's GL and VAT code against
/// the reference set. `seq` disambiguates documents ingested in the
/// same second within a batch.
pub fn ingest(refdata: &ReferenceData, intake: &Intake, seq: usize) -> Document {
    let classification = classify(refdata, &intake.file_name, &intake.raw_text);

    let lines: Vec<LineItem> = intake
        .lines
        .iter()
        .enumerate()
        .map(|(idx, raw)| {
            let description = if idx == 0 {
                compose_subject(
                    classification.doc_type,
                    &classification.supplier_name,
                    &raw.description,
                )
            } else {
                shorten(&raw.description)
            };
            let original_description = if description != raw.description {
                Some(raw.description.clone())
            } else {
                None
            };
            LineItem {
                id: format!("L{}", idx + 1),
                description,
                gl_account: raw.gl_account.clone(),
                vat_code: raw.vat_code.clone(),
                amount: raw.amount,
                is_spread: is_spread_candidate(&raw.description),
                original_description,
            }
        })
        .collect();

    let mut doc = Document {
        id: format!("DOC-{}-{}", Local::now().format("%Y%m%d%H%M%S"), seq + 1),
        file_name: intake.file_name.clone(),
        doc_type: classification.doc_type,
        status: DocStatus::Processing,
        confidence: classification.confidence,
        supplier_id: classification.supplier_id,
        supplier_name: classification.supplier_name,
        invoice_date: intake.invoice_date.clone(),
        ref_number: intake.ref_number.clone(),
        total_amount: intake.total_amount,
        lines,
        audit_log: vec![],
        validation_errors: vec![],
    };

    doc.validation_errors = refdata.validate_references(&doc);
    doc.audit_log.push(AuditEntry::with_details(
        AuditKind::Info,
        format!(
            "Classified '{}' as {:?} and routed to {}.",
            doc.file_name, doc.doc_type, doc.supplier_name
        ),
        format!("Confidence {:.0}%.", doc.confidence * 100.0),
    ));

    doc.status = if doc.confidence >= READY_CONFIDENCE && doc.validation_errors.is_empty() {
        DocStatus::Ready
    } else {
        DocStatus::Review
    };
    doc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocType, IntakeLine};

    fn intake_line(desc: &str, gl: &str, vat: &str, amount: f64) -> IntakeLine {
        IntakeLine {
            description: desc.to_string(),
            gl_account: gl.to_string(),
            vat_code: vat.to_string(),
            amount,
        }
    }

    fn fuel_intake() -> Intake {
        Intake {
            file_name: "scan_batch_001_p1.pdf".to_string(),
            raw_text: "Shell Station Den Haag Fuel Receipt".to_string(),
            invoice_date: "2023-10-24".to_string(),
            ref_number: String::new(),
            total_amount: 45.00,
            lines: vec![
                intake_line("Brandstof V-Power", "4300", "VHC", 37.19),
                intake_line("Koffie Grande", "4600", "VLC", 7.81),
            ],
        }
    }

    #[test]
    fn header_line_gets_subject_rest_get_shortened() {
        let refdata = ReferenceData::builtin();
        let doc = ingest(&refdata, &fuel_intake(), 0);
        assert_eq!(doc.doc_type, DocType::Receipt);
        assert_eq!(doc.lines[0].description, "Shell: Brandstof V-Power");
        assert_eq!(doc.lines[1].description, "Koffie Grande");
        assert_eq!(doc.lines[0].original_description.as_deref(), Some("Brandstof V-Power"));
        assert!(doc.lines[1].original_description.is_none());
        assert_eq!(doc.lines[0].id, "L1");
        assert_eq!(doc.lines[1].id, "L2");
    }

    #[test]
    fn confident_clean_document_is_ready() {
        let refdata = ReferenceData::builtin();
        let doc = ingest(&refdata, &fuel_intake(), 0);
        assert_eq!(doc.status, DocStatus::Ready);
        assert!(doc.validation_errors.is_empty());
        assert_eq!(doc.audit_log.len(), 1);
        assert_eq!(doc.audit_log[0].kind, AuditKind::Info);
    }

    #[test]
    fn low_confidence_lands_in_review() {
        let refdata = ReferenceData::builtin();
        let intake = Intake {
            file_name: "invoice.pdf".to_string(),
            raw_text: "Firma Jansen factuur nr 12".to_string(),
            invoice_date: "2023-10-20".to_string(),
            ref_number: "F-12".to_string(),
            total_amount: 100.0,
            lines: vec![intake_line("Advies", "4900", "VHC", 100.0)],
        };
        let doc = ingest(&refdata, &intake, 0);
        assert_eq!(doc.status, DocStatus::Review);
        assert_eq!(doc.confidence, 0.65);
        assert_eq!(doc.supplier_id, crate::refdata::FALLBACK_SUPPLIER_ID);
    }

    #[test]
    fn unknown_codes_force_review_and_errors() {
        let refdata = ReferenceData::builtin();
        let mut intake = fuel_intake();
        intake.lines[1].gl_account = "9999".to_string();
        let doc = ingest(&refdata, &intake, 0);
        assert_eq!(doc.status, DocStatus::Review);
        assert_eq!(doc.validation_errors.len(), 1);
        assert!(doc.validation_errors[0].contains("Line #2"));
    }

    #[test]
    fn spread_candidates_are_flagged() {
        let refdata = ReferenceData::builtin();
        let intake = Intake {
            file_name: "invoice_kpn.pdf".to_string(),
            raw_text: "KPN Zakelijk Invoice #2993 Internet Services".to_string(),
            invoice_date: "2023-10-20".to_string(),
            ref_number: "INV-2023-998".to_string(),
            total_amount: 121.00,
            lines: vec![intake_line("Internet Services Q4 2023", "4100", "VHC", 100.0)],
        };
        let doc = ingest(&refdata, &intake, 0);
        assert!(doc.lines[0].is_spread);
        assert_eq!(doc.lines[0].description, "Internet Services Q4 2023");
    }

    #[test]
    fn long_line_descriptions_are_shortened() {
        let refdata = ReferenceData::builtin();
        let mut intake = fuel_intake();
        intake.lines[1].description = "x".repeat(60);
        let doc = ingest(&refdata, &intake, 0);
        assert_eq!(doc.lines[1].description.chars().count(), 45);
        assert!(doc.lines[1].description.ends_with("..."));
        assert_eq!(
            doc.lines[1].original_description.as_deref().map(|s| s.len()),
            Some(60)
        );
    }

    #[test]
    fn sequence_number_lands_in_document_id() {
        let refdata = ReferenceData::builtin();
        let a = ingest(&refdata, &fuel_intake(), 0);
        let b = ingest(&refdata, &fuel_intake(), 1);
        assert!(a.id.ends_with("-1"));
        assert!(b.id.ends_with("-2"));
    }
}
