use crate::classifier;
use crate::error::Result;
use crate::fmt::percent;
use crate::settings::load_reference_data;

pub fn run(text: &str, file: &str) -> Result<()> {
    let refdata = load_reference_data();
    let c = classifier::classify(&refdata, file, text);
    println!("Type:       {:?}", c.doc_type);
    println!("Supplier:   {} ({})", c.supplier_name, c.supplier_id);
    println!("Confidence: {}", percent(c.confidence));
    Ok(())
}
