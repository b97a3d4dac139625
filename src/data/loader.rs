use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{DatasetKind, DatasetTable, Gender, LabelRecord, Race, RawAge};
use crate::paths::Layout;

// ---------------------------------------------------------------------------
// Soft-failure contract
// ---------------------------------------------------------------------------

/// Why a dataset could not be loaded. Every variant is non-fatal: the CLI
/// prints the message and keeps whatever dataset was loaded before.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{dataset}: labels file not found at {}", .path.display())]
    LabelsFileMissing {
        dataset: &'static str,
        path: PathBuf,
    },

    #[error("{dataset}: images folder not found at {}", .path.display())]
    ImagesDirMissing {
        dataset: &'static str,
        path: PathBuf,
    },

    #[error("{dataset}: labels file is missing required column(s): {}", .columns.join(", "))]
    MissingColumns {
        dataset: &'static str,
        columns: Vec<String>,
    },

    #[error("{dataset}: failed to parse labels file: {source}")]
    Parse {
        dataset: &'static str,
        #[source]
        source: csv::Error,
    },
}

/// A successfully loaded dataset plus the missing-image count from the
/// cross-check against the image folder.
#[derive(Debug)]
pub struct LoadedDataset {
    pub table: DatasetTable,
    /// Referenced images absent from the image folder. Loading still
    /// succeeds; the count is surfaced as a warning.
    pub missing_images: usize,
}

impl LoadedDataset {
    /// Human-readable status line for the CLI, warning included.
    pub fn status_message(&self) -> String {
        let mut msg = format!(
            "{} dataset loaded successfully ({} records).",
            self.table.kind,
            self.table.len()
        );
        if self.missing_images > 0 {
            msg.push_str(&format!(
                " Warning: {} referenced image(s) missing from the {} image folder.",
                self.missing_images, self.table.kind
            ));
        }
        msg
    }
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load one of the known datasets from the workspace layout.
///
/// Validates that the labels file and image folder exist, parses the CSV,
/// normalizes dataset-specific column names to the canonical schema, and
/// counts referenced images that are absent on disk.
pub fn load(kind: DatasetKind, layout: &Layout) -> Result<LoadedDataset, LoadError> {
    let labels_path = layout.labels_file(kind);
    if !labels_path.is_file() {
        return Err(LoadError::LabelsFileMissing {
            dataset: kind.name(),
            path: labels_path,
        });
    }

    let images_dir = layout.images_dir(kind);
    if !images_dir.is_dir() {
        return Err(LoadError::ImagesDirMissing {
            dataset: kind.name(),
            path: images_dir,
        });
    }

    let table = parse_labels(kind, &labels_path)?;
    let missing_images = count_missing_images(&table, &images_dir);

    Ok(LoadedDataset {
        table,
        missing_images,
    })
}

// ---------------------------------------------------------------------------
// CSV parsing + column normalization
// ---------------------------------------------------------------------------

/// Required columns: an image-path equivalent, `gender`, and `race`;
/// `age` is optional. FairFace names its path column `file`, which is
/// normalized to `image_path` here so downstream consumers see one schema.
fn parse_labels(kind: DatasetKind, path: &Path) -> Result<DatasetTable, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|source| LoadError::Parse {
        dataset: kind.name(),
        source,
    })?;

    let headers: Vec<String> = reader
        .headers()
        .map_err(|source| LoadError::Parse {
            dataset: kind.name(),
            source,
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    let path_idx = headers.iter().position(|h| h == "image_path" || h == "file");
    let gender_idx = headers.iter().position(|h| h == "gender");
    let race_idx = headers.iter().position(|h| h == "race");
    let age_idx = headers.iter().position(|h| h == "age");

    let (path_idx, gender_idx, race_idx) = match (path_idx, gender_idx, race_idx) {
        (Some(p), Some(g), Some(r)) => (p, g, r),
        _ => {
            let mut columns = Vec::new();
            if path_idx.is_none() {
                columns.push("image_path".to_string());
            }
            if gender_idx.is_none() {
                columns.push("gender".to_string());
            }
            if race_idx.is_none() {
                columns.push("race".to_string());
            }
            return Err(LoadError::MissingColumns {
                dataset: kind.name(),
                columns,
            });
        }
    };

    let mut records = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| LoadError::Parse {
            dataset: kind.name(),
            source,
        })?;

        records.push(LabelRecord {
            image_path: record.get(path_idx).unwrap_or("").trim().to_string(),
            age: age_idx.and_then(|i| RawAge::parse(record.get(i).unwrap_or(""))),
            gender: Gender::parse(record.get(gender_idx).unwrap_or("")),
            race: Race::parse(record.get(race_idx).unwrap_or("")),
        });
    }

    Ok(DatasetTable::new(kind, records, age_idx.is_some()))
}

/// Count referenced images absent from the image folder. The individual
/// paths are not enumerated, only counted.
fn count_missing_images(table: &DatasetTable, images_dir: &Path) -> usize {
    table
        .records
        .iter()
        .filter(|r| !images_dir.join(&r.image_path).is_file())
        .count()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn workspace() -> (tempfile::TempDir, Layout) {
        let dir = tempfile::tempdir().unwrap();
        let layout = Layout::new(dir.path());
        fs::create_dir_all(layout.datasets_dir()).unwrap();
        (dir, layout)
    }

    fn write_labels(layout: &Layout, kind: DatasetKind, contents: &str) {
        fs::write(layout.labels_file(kind), contents).unwrap();
    }

    fn write_image(layout: &Layout, kind: DatasetKind, name: &str) {
        let path = layout.images_dir(kind).join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"jpg").unwrap();
    }

    #[test]
    fn missing_labels_file_fails_softly() {
        let (_dir, layout) = workspace();
        let err = load(DatasetKind::UtkFace, &layout).unwrap_err();
        assert!(matches!(err, LoadError::LabelsFileMissing { .. }));
        assert!(err.to_string().contains("labels file not found"));
    }

    #[test]
    fn missing_images_dir_reports_images_folder_not_found() {
        let (_dir, layout) = workspace();
        write_labels(
            &layout,
            DatasetKind::UtkFace,
            "image_path,age,gender,race\na.jpg,26,0,0\n",
        );
        let err = load(DatasetKind::UtkFace, &layout).unwrap_err();
        assert!(err.to_string().contains("images folder not found"));
    }

    #[test]
    fn missing_required_columns_are_named() {
        let (_dir, layout) = workspace();
        write_labels(&layout, DatasetKind::UtkFace, "image_path,age,race\na.jpg,26,0\n");
        fs::create_dir_all(layout.images_dir(DatasetKind::UtkFace)).unwrap();

        let err = load(DatasetKind::UtkFace, &layout).unwrap_err();
        match &err {
            LoadError::MissingColumns { columns, .. } => {
                assert_eq!(columns, &["gender".to_string()]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
        assert!(err.to_string().contains("gender"));
    }

    #[test]
    fn success_message_has_no_missing_warning_when_all_images_exist() {
        let (_dir, layout) = workspace();
        write_labels(
            &layout,
            DatasetKind::UtkFace,
            "image_path,age,gender,race\na.jpg,26,0,0\nb.jpg,31,1,2\n",
        );
        write_image(&layout, DatasetKind::UtkFace, "a.jpg");
        write_image(&layout, DatasetKind::UtkFace, "b.jpg");

        let loaded = load(DatasetKind::UtkFace, &layout).unwrap();
        assert_eq!(loaded.missing_images, 0);
        assert!(!loaded.status_message().contains("missing"));
        assert!(loaded.status_message().contains("2 records"));
    }

    #[test]
    fn missing_images_are_counted_not_fatal() {
        let (_dir, layout) = workspace();
        write_labels(
            &layout,
            DatasetKind::UtkFace,
            "image_path,age,gender,race\na.jpg,26,0,0\nb.jpg,31,1,2\nc.jpg,4,0,4\n",
        );
        write_image(&layout, DatasetKind::UtkFace, "a.jpg");

        let loaded = load(DatasetKind::UtkFace, &layout).unwrap();
        assert_eq!(loaded.missing_images, 2);
        assert!(loaded.status_message().contains('2'));
        assert_eq!(loaded.table.len(), 3);
    }

    #[test]
    fn fairface_file_column_is_normalized_to_image_path() {
        let (_dir, layout) = workspace();
        write_labels(
            &layout,
            DatasetKind::FairFace,
            "file,age,gender,race\nval/1.jpg,3-9,Female,East Asian\nval/2.jpg,60+,Male,White\n",
        );
        write_image(&layout, DatasetKind::FairFace, "val/1.jpg");
        write_image(&layout, DatasetKind::FairFace, "val/2.jpg");

        let loaded = load(DatasetKind::FairFace, &layout).unwrap();
        let table = &loaded.table;
        assert_eq!(table.records[0].image_path, "val/1.jpg");
        assert_eq!(table.records[0].gender, Gender::Female);
        assert_eq!(table.records[0].age, Some(RawAge::Range("3-9".to_string())));
        assert_eq!(
            table.records[0].race,
            Race::Other("East Asian".to_string())
        );
        assert_eq!(loaded.missing_images, 0);
    }

    #[test]
    fn age_column_is_optional() {
        let (_dir, layout) = workspace();
        write_labels(
            &layout,
            DatasetKind::UtkFace,
            "image_path,gender,race\na.jpg,0,0\n",
        );
        write_image(&layout, DatasetKind::UtkFace, "a.jpg");

        let loaded = load(DatasetKind::UtkFace, &layout).unwrap();
        assert!(!loaded.table.has_age);
        assert_eq!(loaded.table.records[0].age, None);
    }

    #[test]
    fn malformed_csv_is_a_parse_error() {
        let (_dir, layout) = workspace();
        write_labels(
            &layout,
            DatasetKind::UtkFace,
            "image_path,age,gender,race\na.jpg,26,0\n",
        );
        fs::create_dir_all(layout.images_dir(DatasetKind::UtkFace)).unwrap();

        let err = load(DatasetKind::UtkFace, &layout).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }));
    }
}
