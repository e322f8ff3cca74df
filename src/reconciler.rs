use crate::models::{AuditEntry, AuditKind, Document, LineItem};

/// Anything below a cent counts as reconciled.
const RECONCILED_EPSILON: f64 = 0.01;
/// Largest discrepancy the reconciler will silently correct.
const AUTO_FIX_LIMIT: f64 = 0.05;
/// Tolerance for the VAT-exclusive hypothesis test on large gaps.
const VAT_HYPOTHESIS_EPSILON: f64 = 0.10;

/// Outcome of a reconciliation run. The input document is never
/// touched; the caller decides whether to apply `healed_lines` and
/// append `log` to the document's audit trail.
pub struct ReconcileOutcome {
    pub healed_lines: Vec<LineItem>,
    pub log: Vec<AuditEntry>,
    pub is_valid: bool,
    pub adjusted_total: f64,
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Best-guess cause for a discrepancy too large to auto-correct.
///
/// The VAT test hardcodes the 21% high rate rather than deriving it
/// from the lines' actual VAT codes; known approximation, kept as-is.
fn analyze_discrepancy(sum: f64, total: f64, diff: f64) -> &'static str {
    if (sum * 1.21 - total).abs() < VAT_HYPOTHESIS_EPSILON {
        "Lines may have been entered VAT-exclusive while the total is VAT-inclusive."
    } else if diff > 0.0 {
        "Total exceeds the sum of lines. Missing lines or shipping costs?"
    } else {
        "Line sum exceeds the total. Was a discount applied?"
    }
}

/// Compare the sum of line amounts against the document total and heal
/// within bounds.
///
/// Within a cent the document passes as-is. Up to five cents the
/// difference is folded into the largest line (rounding noise from an
/// upstream system). Beyond that no fix is attempted: the outcome
/// carries a WARNING with a cause hypothesis and `is_valid = false`,
/// which callers use to block posting until a human edits the lines.
/// There is no failure mode; every input yields an outcome.
pub fn reconcile(doc: &Document) -> ReconcileOutcome {
    let mut healed_lines = doc.lines.clone();
    let mut log = Vec::new();
    let adjusted_total = doc.total_amount;

    let sum: f64 = healed_lines.iter().map(|l| l.amount).sum();
    let diff = doc.total_amount - sum;
    let abs_diff = diff.abs();

    if abs_diff < RECONCILED_EPSILON {
        log.push(AuditEntry::new(
            AuditKind::Success,
            "Validation passed: lines reconcile with the document total.",
        ));
        return ReconcileOutcome {
            healed_lines,
            log,
            is_valid: true,
            adjusted_total,
        };
    }

    if abs_diff <= AUTO_FIX_LIMIT && !healed_lines.is_empty() {
        // First strictly-largest line absorbs the rounding difference.
        let largest_idx = healed_lines
            .iter()
            .enumerate()
            .fold(0, |max_idx, (idx, line)| {
                if line.amount > healed_lines[max_idx].amount {
                    idx
                } else {
                    max_idx
                }
            });

        let old_amount = healed_lines[largest_idx].amount;
        let new_amount = round2(old_amount + diff);
        healed_lines[largest_idx].amount = new_amount;

        log.push(AuditEntry::with_details(
            AuditKind::Fix,
            format!("Rounding difference detected ({diff:.2})."),
            format!(
                "Correction on line #{}: amount adjusted from {:.2} to {:.2} to match the document total.",
                largest_idx + 1,
                old_amount,
                new_amount
            ),
        ));
        return ReconcileOutcome {
            healed_lines,
            log,
            is_valid: true,
            adjusted_total,
        };
    }

    let analysis = analyze_discrepancy(sum, doc.total_amount, diff);
    log.push(AuditEntry::with_details(
        AuditKind::Warning,
        format!("Large discrepancy detected ({diff:.2})."),
        format!("Validation failed. {analysis} Self-healing aborted. Manual review required."),
    ));
    ReconcileOutcome {
        healed_lines,
        log,
        is_valid: false,
        adjusted_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DocStatus, DocType};

    fn line(id: &str, amount: f64) -> LineItem {
        LineItem {
            id: id.to_string(),
            description: format!("line {id}"),
            gl_account: "4100".to_string(),
            vat_code: "VHC".to_string(),
            amount,
            is_spread: false,
            original_description: None,
        }
    }

    fn doc(total: f64, amounts: &[f64]) -> Document {
        Document {
            id: "DOC-T1".to_string(),
            file_name: "test.pdf".to_string(),
            doc_type: DocType::Invoice,
            status: DocStatus::Review,
            confidence: 0.99,
            supplier_id: "SUP005".to_string(),
            supplier_name: "KPN Zakelijk".to_string(),
            invoice_date: "2023-10-20".to_string(),
            ref_number: String::new(),
            total_amount: total,
            lines: amounts
                .iter()
                .enumerate()
                .map(|(i, a)| line(&format!("L{}", i + 1), *a))
                .collect(),
            audit_log: vec![],
            validation_errors: vec![],
        }
    }

    #[test]
    fn exact_match_passes_with_success_entry() {
        let d = doc(100.00, &[60.00, 40.00]);
        let outcome = reconcile(&d);
        assert!(outcome.is_valid);
        assert_eq!(outcome.log.len(), 1);
        assert_eq!(outcome.log[0].kind, AuditKind::Success);
        assert_eq!(outcome.healed_lines[0].amount, 60.00);
        assert_eq!(outcome.healed_lines[1].amount, 40.00);
        assert_eq!(outcome.adjusted_total, 100.00);
    }

    #[test]
    fn sub_cent_difference_still_passes() {
        let d = doc(100.00, &[60.001, 39.995]);
        let outcome = reconcile(&d);
        assert!(outcome.is_valid);
        assert_eq!(outcome.log[0].kind, AuditKind::Success);
    }

    #[test]
    fn small_difference_folded_into_largest_line() {
        let d = doc(100.00, &[60.00, 39.97]);
        let outcome = reconcile(&d);
        assert!(outcome.is_valid);
        assert_eq!(outcome.healed_lines[0].amount, 60.03);
        assert_eq!(outcome.healed_lines[1].amount, 39.97);
        assert_eq!(outcome.log.len(), 1);
        assert_eq!(outcome.log[0].kind, AuditKind::Fix);
        let details = outcome.log[0].details.as_deref().unwrap();
        assert!(details.contains("line #1"));
        assert!(details.contains("60.00"));
        assert!(details.contains("60.03"));
        assert!(outcome.log[0].message.contains("0.03"));
    }

    #[test]
    fn negative_difference_also_fixed() {
        // Lines overshoot the total by 4 cents.
        let d = doc(100.00, &[60.04, 40.00]);
        let outcome = reconcile(&d);
        assert!(outcome.is_valid);
        assert_eq!(outcome.healed_lines[0].amount, 60.00);
        assert_eq!(outcome.log[0].kind, AuditKind::Fix);
    }

    #[test]
    fn tie_on_largest_line_picks_first() {
        let d = doc(100.03, &[50.00, 50.00]);
        let outcome = reconcile(&d);
        assert_eq!(outcome.healed_lines[0].amount, 50.03);
        assert_eq!(outcome.healed_lines[1].amount, 50.00);
        assert!(outcome.log[0].details.as_deref().unwrap().contains("line #1"));
    }

    #[test]
    fn large_difference_blocks_with_warning() {
        let d = doc(100.00, &[30.00, 20.00]);
        let outcome = reconcile(&d);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.log.len(), 1);
        assert_eq!(outcome.log[0].kind, AuditKind::Warning);
        assert!(outcome.log[0]
            .details
            .as_deref()
            .unwrap()
            .contains("Total exceeds the sum of lines"));
        // No line was touched.
        assert_eq!(outcome.healed_lines[0].amount, 30.00);
        assert_eq!(outcome.healed_lines[1].amount, 20.00);
    }

    #[test]
    fn discount_hypothesis_when_lines_exceed_total() {
        let d = doc(50.00, &[60.00, 40.00]);
        let outcome = reconcile(&d);
        assert!(!outcome.is_valid);
        assert!(outcome.log[0]
            .details
            .as_deref()
            .unwrap()
            .contains("Was a discount applied?"));
    }

    #[test]
    fn vat_exclusive_hypothesis_wins_over_missing_lines() {
        // 100.00 * 1.21 == 121.00: the VAT branch must fire, not the
        // generic "missing lines" branch, even though diff > 0.
        let d = doc(121.00, &[100.00]);
        let outcome = reconcile(&d);
        assert!(!outcome.is_valid);
        assert!(outcome.log[0]
            .details
            .as_deref()
            .unwrap()
            .contains("VAT-exclusive"));
    }

    #[test]
    fn input_document_is_not_mutated() {
        let d = doc(100.00, &[60.00, 39.97]);
        let _ = reconcile(&d);
        assert_eq!(d.lines[0].amount, 60.00);
        assert!(d.audit_log.is_empty());
    }

    #[test]
    fn boundary_five_cents_is_still_fixed() {
        let d = doc(100.00, &[60.00, 39.95]);
        let outcome = reconcile(&d);
        assert!(outcome.is_valid);
        assert_eq!(outcome.log[0].kind, AuditKind::Fix);
        assert_eq!(outcome.healed_lines[0].amount, 60.05);
    }

    #[test]
    fn empty_line_list_cannot_be_healed() {
        let d = doc(0.03, &[]);
        let outcome = reconcile(&d);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.log[0].kind, AuditKind::Warning);
        assert!(outcome.healed_lines.is_empty());
    }

    #[test]
    fn just_over_five_cents_is_not_fixed() {
        let d = doc(100.00, &[60.00, 39.94]);
        let outcome = reconcile(&d);
        assert!(!outcome.is_valid);
        assert_eq!(outcome.log[0].kind, AuditKind::Warning);
    }
}
