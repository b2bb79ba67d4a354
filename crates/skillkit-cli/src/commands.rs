//! Subcommand implementations
//!
//! Each command prints one human-readable line per unit or artifact and a
//! summary, then returns whether everything passed. Failures of one artifact
//! never stop the others from being processed.

use anyhow::{Context, Result};
use skillkit_render::plan::README_LABEL;
use skillkit_render::{
    check_marketplace, cursor_plugin_artifact, DriftStatus, GenerationPlan, MarketplaceCheck,
    PlannedArtifact, RenderedArtifact, RepoLayout,
};
use skillkit_skills::SkillValidator;
use std::path::PathBuf;
use tracing::info;

/// Print marketplace findings; returns false when the descriptor could not be read
fn report_marketplace(check: &MarketplaceCheck) -> bool {
    match check {
        MarketplaceCheck::Checked(report) => {
            for warning in report.warnings() {
                println!("WARNING: {warning}");
            }
            true
        }
        MarketplaceCheck::Unavailable(reason) => {
            println!("WARNING: {reason}");
            false
        }
    }
}

/// Compare one artifact with disk and print the result; returns true when up to date
fn report_drift(artifact: &RenderedArtifact, fix_command: &str) -> bool {
    match artifact.check() {
        Ok(DriftStatus::UpToDate) => {
            println!("OK: {} is up to date", artifact.label);
            true
        }
        Ok(DriftStatus::OutOfDate) => {
            println!(
                "FAIL: {} is out of date. Run: {fix_command}",
                artifact.label
            );
            false
        }
        Ok(DriftStatus::Missing) => {
            println!("FAIL: {} does not exist", artifact.path.display());
            false
        }
        Err(e) => {
            println!("FAIL: {e}");
            false
        }
    }
}

/// Verb printed after a successful write
fn write_verb(artifact: &RenderedArtifact) -> &'static str {
    if artifact.label == README_LABEL {
        "Updated"
    } else {
        "Generated"
    }
}

/// Write one artifact and print the result; returns true on success
fn report_write(artifact: &RenderedArtifact) -> bool {
    match artifact.write() {
        Ok(()) => {
            println!("{} {}", write_verb(artifact), artifact.path.display());
            true
        }
        Err(e) => {
            println!("FAIL: {e}");
            false
        }
    }
}

/// `skillkit generate [--check]`
pub fn generate(layout: &RepoLayout, check: bool) -> Result<bool> {
    let plan = GenerationPlan::build(layout).context("Failed to scan skills")?;

    if plan.skills.is_empty() {
        println!("ERROR: No skills found");
        return Ok(false);
    }
    println!("Found {} skills", plan.skills.len());

    for warning in &plan.warnings {
        println!("WARNING: {warning}");
    }

    let marketplace_readable = report_marketplace(&check_marketplace(layout, &plan.skills));

    let mut failures = 0;
    for planned in &plan.artifacts {
        let ok = match planned {
            PlannedArtifact::Unavailable { reason, .. } => {
                println!("FAIL: {reason}");
                false
            }
            PlannedArtifact::Ready(artifact) if check => {
                report_drift(artifact, "skillkit generate")
            }
            PlannedArtifact::Ready(artifact) => report_write(artifact),
        };
        if !ok {
            failures += 1;
        }
    }

    if check && !marketplace_readable {
        failures += 1;
    }

    info!("generate finished with {} failure(s)", failures);
    Ok(failures == 0)
}

/// True when every folder is a direct child of the skills folder
///
/// The marketplace is then compared with the whole catalog, not just the
/// folders named on the command line.
fn covers_catalog(layout: &RepoLayout, dirs: &[PathBuf]) -> bool {
    let Ok(skills) = layout.skills_path().canonicalize() else {
        return false;
    };
    dirs.iter().all(|dir| {
        dir.canonicalize()
            .is_ok_and(|dir| dir.parent() == Some(skills.as_path()))
    })
}

/// `skillkit validate [DIR...]`
pub fn validate(layout: &RepoLayout, dirs: &[PathBuf]) -> Result<bool> {
    let validator = SkillValidator::new()?;

    let full_scan = dirs.is_empty();
    let targets = if full_scan {
        layout
            .scanner()
            .unit_dirs()
            .context("Failed to list skill folders")?
    } else {
        dirs.to_vec()
    };

    let mut validated = 0;
    let mut errors = 0;

    for dir in &targets {
        if !dir.is_dir() {
            println!("Skipping {} (not a directory)", dir.display());
            continue;
        }

        let report = validator.validate_dir(dir);
        validated += 1;
        errors += report.issues.len();
        println!("{report}");
    }

    if (full_scan || covers_catalog(layout, dirs)) && layout.marketplace_path().is_file() {
        let records = layout
            .scanner()
            .collect()
            .context("Failed to scan skills")?;
        report_marketplace(&check_marketplace(layout, &records));
    }

    println!("\n{validated} skills validated, {errors} errors");
    Ok(errors == 0)
}

/// `skillkit cursor-plugin [--check]`
pub fn cursor_plugin(layout: &RepoLayout, check: bool) -> Result<bool> {
    let source = layout.claude_plugin_path();
    if !source.is_file() {
        println!("ERROR: {} not found", source.display());
        return Ok(false);
    }

    let artifact = cursor_plugin_artifact(layout)?;
    let ok = if check {
        report_drift(&artifact, "skillkit cursor-plugin")
    } else {
        report_write(&artifact)
    };
    Ok(ok)
}
