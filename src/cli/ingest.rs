use std::path::{Path, PathBuf};

use crate::cli::{render, save_document};
use crate::error::{OttoError, Result};
use crate::models::Intake;
use crate::pipeline;
use crate::reconciler::reconcile;
use crate::settings::load_reference_data;

pub fn run(files: &[String], out: Option<&str>) -> Result<()> {
    if files.is_empty() {
        return Err(OttoError::InvalidIntake("no intake files given".to_string()));
    }
    let refdata = load_reference_data();

    for (seq, file) in files.iter().enumerate() {
        let content = std::fs::read_to_string(file)?;
        let intake: Intake = serde_json::from_str(&content)
            .map_err(|e| OttoError::InvalidIntake(format!("{file}: {e}")))?;

        let mut doc = pipeline::ingest(&refdata, &intake, seq);
        let outcome = reconcile(&doc);
        doc.lines = outcome.healed_lines;
        doc.audit_log.extend(outcome.log);

        render::print_document(&doc);
        render::print_audit_entries(&doc.audit_log);
        println!();

        if let Some(dir) = out {
            std::fs::create_dir_all(dir)?;
            let path = output_path(dir, &doc.id);
            save_document(&path, &doc)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

fn output_path(dir: &str, doc_id: &str) -> PathBuf {
    Path::new(dir).join(format!("{doc_id}.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_path_uses_document_id() {
        let p = output_path("/tmp/docs", "DOC-20231024120000-1");
        assert_eq!(p.to_str().unwrap(), "/tmp/docs/DOC-20231024120000-1.json");
    }

    #[test]
    fn missing_files_is_an_error() {
        assert!(run(&[], None).is_err());
    }
}
