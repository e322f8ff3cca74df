use crate::models::{DocType, SupplierCategory};
use crate::refdata::ReferenceData;

/// Classifier output: a partial document descriptor the pipeline
/// merges into a full `Document`.
#[derive(Debug, Clone)]
pub struct Classification {
    pub doc_type: DocType,
    pub supplier_id: String,
    pub supplier_name: String,
    pub confidence: f64,
}

/// Confidence for an exact supplier-name match on an invoice.
const CONFIDENCE_SUPPLIER_MATCH: f64 = 0.99;
/// Confidence when nothing matched and the fallback supplier is used.
const CONFIDENCE_FALLBACK: f64 = 0.65;

/// Substrings that mark a text as a point-of-sale receipt.
const RECEIPT_KEYWORDS: &[&str] = &["bon", "receipt", "kassa"];

struct ReceiptRoute {
    keywords: &'static [&'static str],
    category: SupplierCategory,
    confidence: f64,
}

/// Ordered routing cascade for receipts. First route whose keyword
/// matches wins; order is significant (fuel outranks horeca outranks
/// supermarket).
const RECEIPT_ROUTES: &[ReceiptRoute] = &[
    ReceiptRoute {
        keywords: &["shell", "esso", "tank"],
        category: SupplierCategory::Fuel,
        confidence: 0.95,
    },
    ReceiptRoute {
        keywords: &["cafe", "restaurant", "lunch"],
        category: SupplierCategory::Horeca,
        confidence: 0.92,
    },
    ReceiptRoute {
        keywords: &["ah", "jumbo", "albert heijn"],
        category: SupplierCategory::Supermarket,
        confidence: 0.98,
    },
];

/// Catch-all collection account for receipts no route claims.
const RECEIPT_OTHER_CONFIDENCE: f64 = 0.85;

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| text.contains(k))
}

/// Classify a document from its filename and raw extracted text and
/// route it to a supplier or collection account.
///
/// Best-effort by construction: there is no failure case. An absent
/// match degrades confidence and routes to the fallback supplier
/// rather than erroring.
pub fn classify(refdata: &ReferenceData, _file_name: &str, raw_text: &str) -> Classification {
    let text = raw_text.to_lowercase();
    let is_receipt = contains_any(&text, RECEIPT_KEYWORDS);

    let fallback = refdata.fallback_supplier();
    let mut result = Classification {
        doc_type: if is_receipt { DocType::Receipt } else { DocType::Invoice },
        supplier_id: fallback.id.clone(),
        supplier_name: fallback.name.clone(),
        confidence: CONFIDENCE_FALLBACK,
    };

    if is_receipt {
        let (category, confidence) = RECEIPT_ROUTES
            .iter()
            .find(|route| contains_any(&text, route.keywords))
            .map(|route| (route.category, route.confidence))
            .unwrap_or((SupplierCategory::Other, RECEIPT_OTHER_CONFIDENCE));
        if let Some(account) = refdata.collection_account(category) {
            result.supplier_id = account.id.clone();
            result.supplier_name = account.name.clone();
            result.confidence = confidence;
        }
    } else {
        let found = refdata
            .suppliers
            .iter()
            .find(|s| text.contains(&s.name.to_lowercase()));
        if let Some(supplier) = found.filter(|s| s.id != fallback.id) {
            result.supplier_id = supplier.id.clone();
            result.supplier_name = supplier.name.clone();
            result.confidence = CONFIDENCE_SUPPLIER_MATCH;
        }
    }

    result
}
