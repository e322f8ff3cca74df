use crate::cli::render;
use crate::error::Result;
use crate::models::{Intake, IntakeLine};
use crate::pipeline;
use crate::reconciler::reconcile;
use crate::settings::load_reference_data;

struct DemoLine {
    description: &'static str,
    gl_account: &'static str,
    vat_code: &'static str,
    amount: f64,
}

struct DemoDoc {
    file_name: &'static str,
    raw_text: &'static str,
    invoice_date: &'static str,
    ref_number: &'static str,
    total_amount: f64,
    lines: &'static [DemoLine],
}

/// Sample batch: a fuel receipt that reconciles cleanly and a KPN
/// invoice whose lines were entered VAT-exclusive against a
/// VAT-inclusive total, so validation blocks it.
const DEMO_DOCS: &[DemoDoc] = &[
    DemoDoc {
        file_name: "scan_batch_001_p1.pdf",
        raw_text: "Shell Station Den Haag Fuel Receipt",
        invoice_date: "2023-10-24",
        ref_number: "",
        total_amount: 45.00,
        lines: &[
            DemoLine { description: "Brandstof V-Power", gl_account: "4300", vat_code: "VHC", amount: 37.19 },
            DemoLine { description: "Koffie Grande", gl_account: "4600", vat_code: "VLC", amount: 7.81 },
        ],
    },
    DemoDoc {
        file_name: "scan_batch_001_p2.pdf",
        raw_text: "KPN Zakelijk Invoice #2993 Internet Services",
        invoice_date: "2023-10-20",
        ref_number: "INV-2023-998",
        total_amount: 121.00,
        lines: &[
            DemoLine { description: "Internet Services Q4 2023", gl_account: "4100", vat_code: "VHC", amount: 100.00 },
        ],
    },
];

pub fn run() -> Result<()> {
    let refdata = load_reference_data();

    for (seq, demo) in DEMO_DOCS.iter().enumerate() {
        let intake = Intake {
            file_name: demo.file_name.to_string(),
            raw_text: demo.raw_text.to_string(),
            invoice_date: demo.invoice_date.to_string(),
            ref_number: demo.ref_number.to_string(),
            total_amount: demo.total_amount,
            lines: demo
                .lines
                .iter()
                .map(|l| IntakeLine {
                    description: l.description.to_string(),
                    gl_account: l.gl_account.to_string(),
                    vat_code: l.vat_code.to_string(),
                    amount: l.amount,
                })
                .collect(),
        };

        let mut doc = pipeline::ingest(&refdata, &intake, seq);
        let outcome = reconcile(&doc);
        doc.lines = outcome.healed_lines;
        doc.audit_log.extend(outcome.log);

        render::print_document(&doc);
        render::print_audit_entries(&doc.audit_log);
        println!();
    }
    Ok(())
}
