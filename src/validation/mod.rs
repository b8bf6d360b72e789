//! Validation for the sprite registry and generated catalogs.
//!
//! Runs a suite of checks and reports errors and warnings. Used by
//! `outpost-assets validate`.

mod checks;
mod warning;

pub use checks::{
    check_blank_sprites, check_catalog, check_category, check_imageset, check_palette_refs,
};
pub use warning::{Diagnostic, Severity, ValidationResult};

use std::path::Path;

use crate::output::{plural, Printer};

/// Check the registry itself, without touching disk.
pub fn validate_sprites() -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(check_palette_refs());
    result.merge(check_blank_sprites());

    result
}

/// Check the registry and the catalog written under `root`.
pub fn validate_catalog(root: &Path) -> ValidationResult {
    let mut result = validate_sprites();
    result.merge(check_catalog(root));
    result
}

/// Print diagnostics and a summary line.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.is_error());
        eprintln!("{}[{}]: {}", label, d.code, d.message);
        if let Some(path) = &d.path {
            eprintln!("  {} {}", printer.dim("-->"), path.display());
        }
        if let Some(help) = &d.help {
            eprintln!("  {} {}", printer.dim("help:"), help);
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.has_warnings() {
        printer.warning("Passed", &format!("with {}", warnings));
    } else {
        printer.success("Passed", "catalog is complete");
    }
}
