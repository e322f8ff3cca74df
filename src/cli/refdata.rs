use comfy_table::{Cell, Table};

use crate::error::Result;
use crate::settings::load_reference_data;

pub fn suppliers() -> Result<()> {
    let refdata = load_reference_data();
    let mut table = Table::new();
    table.set_header(vec!["ID", "Name", "Collection", "Category", "Default GL"]);
    for s in &refdata.suppliers {
        table.add_row(vec![
            Cell::new(&s.id),
            Cell::new(&s.name),
            Cell::new(if s.is_collection_account { "yes" } else { "" }),
            Cell::new(s.category.map(|c| format!("{c:?}")).unwrap_or_default()),
            Cell::new(s.default_gl.clone().unwrap_or_default()),
        ]);
    }
    println!("Suppliers\n{table}");
    Ok(())
}

pub fn accounts() -> Result<()> {
    let refdata = load_reference_data();
    let mut table = Table::new();
    table.set_header(vec!["Code", "Description"]);
    for g in &refdata.gl_accounts {
        table.add_row(vec![Cell::new(&g.code), Cell::new(&g.description)]);
    }
    println!("GL accounts\n{table}");
    Ok(())
}

pub fn vat() -> Result<()> {
    let refdata = load_reference_data();
    let mut table = Table::new();
    table.set_header(vec!["Code", "Rate"]);
    for v in &refdata.vat_codes {
        table.add_row(vec![Cell::new(&v.code), Cell::new(format!("{}%", v.rate))]);
    }
    println!("VAT codes\n{table}");
    Ok(())
}
