use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::{Input, Select};

use crate::data::model::DatasetKind;
use crate::data::{loader, summary};
use crate::eval::{self, FairnessMetric, SimulatedScorer};
use crate::paths::Layout;
use crate::report::export;
use crate::state::SessionState;

// ---------------------------------------------------------------------------
// Main menu
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAction {
    LoadDataset,
    UploadImage,
    SelectMetric,
    RunEvaluation,
    Visualise,
    ExportReport,
    About,
    Exit,
}

const MAIN_MENU: [(MainAction, &str); 8] = [
    (MainAction::LoadDataset, "Load Dataset"),
    (MainAction::UploadImage, "Upload Image"),
    (MainAction::SelectMetric, "Select Fairness Metric"),
    (MainAction::RunEvaluation, "Run Bias Evaluation"),
    (MainAction::Visualise, "Visualise Results"),
    (MainAction::ExportReport, "Export Report"),
    (MainAction::About, "About / Help"),
    (MainAction::Exit, "Exit"),
];

pub fn main_menu() -> Result<MainAction> {
    banner("Bias-Aware Facial Recognition Evaluation Tool");
    let items: Vec<&str> = MAIN_MENU.iter().map(|(_, label)| *label).collect();
    let choice = Select::new()
        .with_prompt("Choose an action")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(MAIN_MENU[choice].0)
}

fn banner(title: &str) {
    println!("{}", "=".repeat(60));
    println!("{title:^60}");
    println!("{}", "=".repeat(60));
}

fn pause() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to return to the main menu")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Menu actions
// ---------------------------------------------------------------------------

/// Load one of the known datasets; on success the demographic summary CSV
/// is written alongside. Failures leave the previous session state intact.
pub fn load_dataset(state: &mut SessionState, layout: &Layout) -> Result<()> {
    banner("Load Available Datasets");
    let mut items: Vec<&str> = DatasetKind::ALL.iter().map(|k| k.name()).collect();
    items.push("Cancel");

    let choice = Select::new()
        .with_prompt("Select dataset to load")
        .items(&items)
        .default(0)
        .interact()?;
    if choice == DatasetKind::ALL.len() {
        println!("Dataset loading cancelled.");
        return pause();
    }
    let kind = DatasetKind::ALL[choice];

    match loader::load(kind, layout) {
        Ok(loaded) => {
            let message = loaded.status_message();
            log::info!("{message}");
            println!("{message}");

            let report = summary::summarize(&loaded.table);
            let path = layout.summary_csv(kind.name());
            match summary::write_summary_csv(&report, &path) {
                Ok(()) => println!("Demographic summary saved to {}", path.display()),
                Err(e) => log::error!("Failed to write summary: {e:#}"),
            }

            state.set_dataset(loaded.table);
        }
        Err(e) => {
            log::error!("Failed to load dataset: {e}");
            println!("Error: {e}");
        }
    }
    pause()
}

/// Copy a user-named test image into `uploads/`, keeping its file name.
pub fn upload_image(layout: &Layout) -> Result<()> {
    banner("Upload Image");
    let source: String = Input::new()
        .with_prompt("Path to the image to upload")
        .interact_text()?;
    let source = PathBuf::from(source.trim());

    if !source.is_file() {
        println!("File not found: {}", source.display());
        return pause();
    }
    let Some(file_name) = source.file_name() else {
        println!("Not a file path: {}", source.display());
        return pause();
    };

    let uploads = layout.uploads_dir();
    fs::create_dir_all(&uploads)
        .with_context(|| format!("creating uploads directory {}", uploads.display()))?;
    let dest = uploads.join(file_name);
    fs::copy(&source, &dest)
        .with_context(|| format!("copying {} to {}", source.display(), dest.display()))?;

    log::info!("Uploaded {} to {}", source.display(), dest.display());
    println!("Image uploaded and saved to {}", dest.display());
    pause()
}

pub fn select_metric(state: &mut SessionState) -> Result<()> {
    banner("Select Fairness Metric");
    let items: Vec<&str> = FairnessMetric::ALL.iter().map(|m| m.label()).collect();
    let choice = Select::new()
        .with_prompt("Select fairness metric")
        .items(&items)
        .default(0)
        .interact()?;

    state.set_metric(FairnessMetric::ALL[choice]);
    println!("You selected: {}", state.metric);
    pause()
}

pub fn run_evaluation(state: &mut SessionState) -> Result<()> {
    banner("Run Bias Evaluation");
    let Some(table) = &state.dataset else {
        println!("No dataset loaded. Load a dataset first.");
        return pause();
    };
    if table.is_empty() {
        println!("The loaded dataset has no records; nothing to evaluate.");
        return pause();
    }

    println!("Running bias evaluation on: {}", table.kind);
    println!("Metric: {}", state.metric);
    println!("Note: accuracies below are simulated placeholders.");
    println!();

    let mut scorer = SimulatedScorer::new();
    let result = eval::evaluate(table, state.metric, &mut scorer);
    for group in &result.groups {
        println!(
            "Group: {:<12} size: {:<6} simulated accuracy: {:.1}%",
            group.group, group.size, group.accuracy
        );
    }

    state.set_evaluation(result);
    pause()
}

/// Terminal rendering of the last evaluation; the PNG/PDF artifacts come
/// from Export Report.
pub fn visualise(state: &SessionState) -> Result<()> {
    banner("Visualise Results");
    let Some(result) = &state.last_evaluation else {
        println!("No evaluation results yet. Run a bias evaluation first.");
        return pause();
    };

    println!("{} - {}", result.dataset, result.metric);
    println!();
    for group in &result.groups {
        let bar = "#".repeat((group.accuracy / 2.0).round() as usize);
        println!("{:>12} | {:<50} {:.1}%", group.group, bar, group.accuracy);
    }
    pause()
}

pub fn export_report(state: &SessionState, layout: &Layout) -> Result<()> {
    banner("Export Report");
    let Some(result) = &state.last_evaluation else {
        println!("No evaluation results to export. Run a bias evaluation first.");
        return pause();
    };

    match export::export_all(result, layout) {
        Ok(paths) => {
            println!("Report exported successfully!");
            println!("  CSV: {}", paths.csv.display());
            println!("  PNG: {}", paths.png.display());
            println!("  PDF: {}", paths.pdf.display());
        }
        Err(e) => {
            log::error!("Export failed: {e:#}");
            println!("Error: {e:#}");
        }
    }
    pause()
}

pub fn about() -> Result<()> {
    banner("About / Help");
    println!(
        "\nThis tool helps evaluate fairness in facial recognition systems.\n\
         It loads demographic-labeled datasets (UTKFace, FairFace), summarizes\n\
         their age/gender/race distributions, and generates per-group reports\n\
         as CSV, PNG and PDF under reports/.\n\n\
         The evaluation step is a stub: per-group accuracies are simulated,\n\
         not computed from a model.\n"
    );
    pause()
}
