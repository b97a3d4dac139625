//! Generate `datasets/utkface_labels.csv` from a UTKFace image folder.
//!
//! UTKFace encodes its labels in the filename convention
//! `<age>_<gender>_<race>_<timestamp>.jpg`; this scans the folder, parses
//! those fields, and writes one CSV row per parseable image.

use std::path::Path;
use std::process::ExitCode;

use serde::Serialize;

const IMAGE_FOLDER: &str = "datasets/UTKFace";
const OUTPUT_CSV: &str = "datasets/utkface_labels.csv";

#[derive(Debug, PartialEq, Eq, Serialize)]
struct LabelRow {
    image_path: String,
    age: u32,
    gender: u8,
    race: u8,
}

/// Parse the `<age>_<gender>_<race>_*` convention from one file name.
/// Returns None for names that do not follow it.
fn parse_filename(name: &str) -> Option<LabelRow> {
    if !name.to_ascii_lowercase().ends_with(".jpg") {
        return None;
    }
    let mut parts = name.split('_');
    let age = parts.next()?.parse().ok()?;
    let gender = parts.next()?.parse().ok()?;
    let race = parts.next()?.parse().ok()?;
    // The trailing timestamp part must exist, but its content is ignored.
    parts.next()?;

    Some(LabelRow {
        image_path: name.to_string(),
        age,
        gender,
        race,
    })
}

fn run() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let folder = Path::new(IMAGE_FOLDER);
    if !folder.is_dir() {
        eprintln!("Image folder not found: {IMAGE_FOLDER}");
        return Ok(ExitCode::FAILURE);
    }

    let mut rows = Vec::new();
    for entry in std::fs::read_dir(folder)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else { continue };

        if name.to_ascii_lowercase().ends_with(".jpg") {
            match parse_filename(name) {
                Some(row) => rows.push(row),
                None => eprintln!("Skipping unexpected filename: {name}"),
            }
        }
    }

    if rows.is_empty() {
        eprintln!("No valid filenames found in {IMAGE_FOLDER}");
        return Ok(ExitCode::FAILURE);
    }
    rows.sort_by(|a, b| a.image_path.cmp(&b.image_path));

    let mut writer = csv::Writer::from_path(OUTPUT_CSV)?;
    let count = rows.len();
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;

    println!("Output written to {OUTPUT_CSV} ({count} records)");
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_filenames_parse() {
        let row = parse_filename("26_0_2_20170116174525125.jpg").unwrap();
        assert_eq!(row.age, 26);
        assert_eq!(row.gender, 0);
        assert_eq!(row.race, 2);
        assert_eq!(row.image_path, "26_0_2_20170116174525125.jpg");
    }

    #[test]
    fn malformed_filenames_are_skipped() {
        // Too few underscore-separated parts.
        assert_eq!(parse_filename("26_0_20170116174525125.jpg"), None);
        // Non-numeric labels.
        assert_eq!(parse_filename("old_0_2_20170116174525125.jpg"), None);
        // Not a jpg.
        assert_eq!(parse_filename("26_0_2_20170116174525125.png"), None);
    }
}
