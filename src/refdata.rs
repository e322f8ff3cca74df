use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::{Document, GlAccount, Supplier, SupplierCategory, VatCode};

/// Supplier id of the "still to be created" placeholder every
/// unmatched invoice routes to.
pub const FALLBACK_SUPPLIER_ID: &str = "SUP999";

/// Read-only reference dataset (suppliers, GL accounts, VAT codes).
/// Constructed once at startup and passed by reference into the core
/// functions, so tests can substitute synthetic sets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReferenceData {
    pub suppliers: Vec<Supplier>,
    pub gl_accounts: Vec<GlAccount>,
    pub vat_codes: Vec<VatCode>,
}

impl ReferenceData {
    /// Built-in dataset mirroring the office's ledger administration:
    /// four collection accounts, two regular suppliers, one fallback.
    pub fn builtin() -> Self {
        let supplier = |id: &str, name: &str, coll: bool, cat: Option<SupplierCategory>, gl: Option<&str>| Supplier {
            id: id.to_string(),
            name: name.to_string(),
            is_collection_account: coll,
            category: cat,
            default_gl: gl.map(String::from),
        };
        let gl = |code: &str, description: &str| GlAccount {
            code: code.to_string(),
            description: description.to_string(),
        };
        let vat = |code: &str, rate: f64| VatCode {
            code: code.to_string(),
            rate,
        };

        Self {
            suppliers: vec![
                supplier("VC_FUEL", "xxxxx verzamelcrediteur tankbonnen", true, Some(SupplierCategory::Fuel), None),
                supplier("VC_SUPER", "xxxxx verzamelcrediteur supermarktbonnen", true, Some(SupplierCategory::Supermarket), None),
                supplier("VC_HORECA", "xxxxx verzamelcrediteur horeca", true, Some(SupplierCategory::Horeca), None),
                supplier("VC_OTHER", "xxxxx verzamelcrediteur overige bonnen", true, Some(SupplierCategory::Other), None),
                supplier("SUP005", "KPN Zakelijk", false, None, Some("4100")),
                supplier("SUP006", "Coolblue Coolbusiness", false, None, Some("4500")),
                supplier(FALLBACK_SUPPLIER_ID, "xxxxx Nog aan te maken leveranciers", false, None, None),
            ],
            gl_accounts: vec![
                gl("4000", "Kantoorkosten"),
                gl("4100", "Huisvestingskosten"),
                gl("4200", "Verkoopkosten"),
                gl("4300", "Autokosten en transport"),
                gl("4500", "Inventaris en inrichting"),
                gl("4600", "Representatiekosten"),
                gl("4900", "Algemene kosten"),
            ],
            vat_codes: vec![
                vat("VHE", 21.0),
                vat("VLE", 9.0),
                vat("VHC", 21.0),
                vat("VLC", 9.0),
                vat("VNU", 0.0),
            ],
        }
    }

    /// Load a reference dataset from a JSON file (settings may point at
    /// an office-specific override).
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn supplier_by_id(&self, id: &str) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    pub fn fallback_supplier(&self) -> &Supplier {
        self.supplier_by_id(FALLBACK_SUPPLIER_ID)
            .unwrap_or(&self.suppliers[0])
    }

    pub fn collection_account(&self, category: SupplierCategory) -> Option<&Supplier> {
        self.suppliers
            .iter()
            .find(|s| s.is_collection_account && s.category == Some(category))
    }

    pub fn gl_account(&self, code: &str) -> Option<&GlAccount> {
        self.gl_accounts.iter().find(|g| g.code == code)
    }

    pub fn vat_code(&self, code: &str) -> Option<&VatCode> {
        self.vat_codes.iter().find(|v| v.code == code)
    }

    /// Referential check over a document's lines: every GL account and
    /// VAT code must exist in this dataset. A miss is a data-entry
    /// error surfaced to the user, never auto-corrected.
    pub fn validate_references(&self, doc: &Document) -> Vec<String> {
        let mut errors = Vec::new();
        for (idx, line) in doc.lines.iter().enumerate() {
            if self.gl_account(&line.gl_account).is_none() {
                errors.push(format!(
                    "Line #{}: unknown GL account '{}'",
                    idx + 1,
                    line.gl_account
                ));
            }
            if self.vat_code(&line.vat_code).is_none() {
                errors.push(format!(
                    "Line #{}: unknown VAT code '{}'",
                    idx + 1,
                    line.vat_code
                ));
            }
        }
        errors
    }
}
