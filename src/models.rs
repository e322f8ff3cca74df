use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SupplierCategory {
    Fuel,
    Horeca,
    Supermarket,
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    pub id: String,
    pub name: String,
    pub is_collection_account: bool,
    pub category: Option<SupplierCategory>,
    pub default_gl: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlAccount {
    pub code: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VatCode {
    pub code: String,
    pub rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocType {
    Invoice,
    Receipt,
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocStatus {
    Processing,
    Ready,
    Review,
    Posted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditKind {
    Info,
    Warning,
    Fix,
    Success,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineItem {
    pub id: String,
    pub description: String,
    pub gl_account: String,
    pub vat_code: String,
    pub amount: f64,
    #[serde(default)]
    pub is_spread: bool,
    pub original_description: Option<String>,
}

/// Append-only audit trail entry. Timestamps are formatted local-time
/// strings; consumers order entries by position, not by parsing them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub kind: AuditKind,
    pub message: String,
    pub details: Option<String>,
}

impl AuditEntry {
    pub fn new(kind: AuditKind, message: impl Into<String>) -> Self {
        Self {
            timestamp: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            kind,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        kind: AuditKind,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            details: Some(details.into()),
            ..Self::new(kind, message)
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub file_name: String,
    pub doc_type: DocType,
    pub status: DocStatus,
    pub confidence: f64,
    pub supplier_id: String,
    pub supplier_name: String,
    pub invoice_date: String,
    pub ref_number: String,
    pub total_amount: f64,
    pub lines: Vec<LineItem>,
    pub audit_log: Vec<AuditEntry>,
    pub validation_errors: Vec<String>,
}

/// Raw line as delivered by the (out-of-scope) extraction layer,
/// before description shortening and spread detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeLine {
    pub description: String,
    pub gl_account: String,
    pub vat_code: String,
    pub amount: f64,
}

/// Intake sheet: the snapshot a scanner/upload front-end hands to the
/// pipeline. `raw_text` stands in for OCR output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Intake {
    pub file_name: String,
    pub raw_text: String,
    #[serde(default)]
    pub invoice_date: String,
    #[serde(default)]
    pub ref_number: String,
    pub total_amount: f64,
    pub lines: Vec<IntakeLine>,
}
