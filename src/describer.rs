use crate::models::DocType;

/// Hard display limit the external ledger system imposes on booking
/// descriptions.
pub const MAX_DESCRIPTION_LEN: usize = 45;

/// Shorten an ordinary line description to the 45-character display
/// limit: first 42 characters plus "..." when over, unchanged when not.
pub fn shorten(text: &str) -> String {
    if text.chars().count() <= MAX_DESCRIPTION_LEN {
        return text.to_string();
    }
    let head: String = text.chars().take(MAX_DESCRIPTION_LEN - 3).collect();
    format!("{head}...")
}

/// Build the booking subject for a document's header line.
///
/// Receipts get a short supplier alias prefix so the collection-account
/// booking still names the vendor. The alias is derived from the
/// collection-account name itself (the detected brand is discarded
/// after routing), so "tankbonnen" yields "Shell" regardless of which
/// fuel brand was on the receipt. Invoices pass the description
/// through. Subjects hard-cut at 45 characters, no ellipsis; that is a
/// different policy than `shorten` and both are intentional.
pub fn compose_subject(doc_type: DocType, supplier_name: &str, raw_desc: &str) -> String {
    let subject = match doc_type {
        DocType::Receipt => {
            let alias = if supplier_name.contains("tank") {
                "Shell"
            } else if supplier_name.contains("supermarkt") {
                "AH"
            } else if supplier_name.contains("horeca") {
                "Lunch"
            } else {
                "Div"
            };
            format!("{alias}: {raw_desc}")
        }
        _ => raw_desc.to_string(),
    };

    if subject.chars().count() > MAX_DESCRIPTION_LEN {
        subject.chars().take(MAX_DESCRIPTION_LEN).collect()
    } else {
        subject
    }
}
