use std::fmt;

// ---------------------------------------------------------------------------
// RawAge – one age cell, resolved at load time
// ---------------------------------------------------------------------------

/// An age label as it appears in the source CSV.
///
/// UTKFace stores plain integer years; FairFace stores pre-binned string
/// ranges such as `"3-9"` or `"60+"`. The variant is decided once by the
/// loader so downstream code never re-inspects the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAge {
    Years(u32),
    Range(String),
}

impl RawAge {
    /// Parse a raw CSV field. Empty fields mean "no age recorded".
    pub fn parse(raw: &str) -> Option<RawAge> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<u32>() {
            Ok(years) => Some(RawAge::Years(years)),
            Err(_) => Some(RawAge::Range(raw.to_string())),
        }
    }
}

impl fmt::Display for RawAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawAge::Years(y) => write!(f, "{y}"),
            RawAge::Range(r) => write!(f, "{r}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Gender / Race – total code→label mappings with fallback variants
// ---------------------------------------------------------------------------

/// Gender label. Numeric codes follow the UTKFace convention
/// (0 = male, 1 = female); unmapped codes are carried as [`Gender::Coded`]
/// and display as the code's string form rather than failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
    /// A numeric code outside the known mapping.
    Coded(i64),
    /// A string label other than the canonical ones (FairFace pass-through).
    Other(String),
}

impl Gender {
    pub fn from_code(code: i64) -> Gender {
        match code {
            0 => Gender::Male,
            1 => Gender::Female,
            other => Gender::Coded(other),
        }
    }

    /// Parse a raw CSV field: numeric codes via [`Gender::from_code`],
    /// known strings to their variants, anything else passed through.
    pub fn parse(raw: &str) -> Gender {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(code) => Gender::from_code(code),
            Err(_) => match raw {
                "Male" => Gender::Male,
                "Female" => Gender::Female,
                other => Gender::Other(other.to_string()),
            },
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => write!(f, "Male"),
            Gender::Female => write!(f, "Female"),
            Gender::Coded(code) => write!(f, "{code}"),
            Gender::Other(s) => write!(f, "{s}"),
        }
    }
}

/// Race label. Numeric codes follow the UTKFace convention
/// (0 White, 1 Black, 2 Asian, 3 Indian, 4 Others); same fallback rule
/// as [`Gender`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Race {
    White,
    Black,
    Asian,
    Indian,
    Others,
    Coded(i64),
    Other(String),
}

impl Race {
    pub fn from_code(code: i64) -> Race {
        match code {
            0 => Race::White,
            1 => Race::Black,
            2 => Race::Asian,
            3 => Race::Indian,
            4 => Race::Others,
            other => Race::Coded(other),
        }
    }

    pub fn parse(raw: &str) -> Race {
        let raw = raw.trim();
        match raw.parse::<i64>() {
            Ok(code) => Race::from_code(code),
            Err(_) => match raw {
                "White" => Race::White,
                "Black" => Race::Black,
                "Asian" => Race::Asian,
                "Indian" => Race::Indian,
                "Others" => Race::Others,
                other => Race::Other(other.to_string()),
            },
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Race::White => write!(f, "White"),
            Race::Black => write!(f, "Black"),
            Race::Asian => write!(f, "Asian"),
            Race::Indian => write!(f, "Indian"),
            Race::Others => write!(f, "Others"),
            Race::Coded(code) => write!(f, "{code}"),
            Race::Other(s) => write!(f, "{s}"),
        }
    }
}

// ---------------------------------------------------------------------------
// DatasetKind – which labeled dataset the table came from
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    UtkFace,
    FairFace,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::UtkFace, DatasetKind::FairFace];

    /// Display name, also the image folder name under `datasets/`.
    pub fn name(self) -> &'static str {
        match self {
            DatasetKind::UtkFace => "UTKFace",
            DatasetKind::FairFace => "FairFace",
        }
    }

    /// Labels CSV file name under `datasets/`.
    pub fn labels_file_name(self) -> &'static str {
        match self {
            DatasetKind::UtkFace => "utkface_labels.csv",
            DatasetKind::FairFace => "fairface_labels.csv",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// LabelRecord – one row of the labels CSV
// ---------------------------------------------------------------------------

/// One labeled image (one row of the source CSV, after normalization).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// Path of the image relative to the dataset's image folder.
    pub image_path: String,
    /// Age label, if the source CSV has an age column.
    pub age: Option<RawAge>,
    pub gender: Gender,
    pub race: Race,
}

// ---------------------------------------------------------------------------
// DatasetTable – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full normalized table: every loader produces this one schema
/// regardless of dataset origin.
#[derive(Debug, Clone)]
pub struct DatasetTable {
    pub kind: DatasetKind,
    pub records: Vec<LabelRecord>,
    /// Whether the source CSV carried an age column at all.
    pub has_age: bool,
}

impl DatasetTable {
    pub fn new(kind: DatasetKind, records: Vec<LabelRecord>, has_age: bool) -> Self {
        DatasetTable {
            kind,
            records,
            has_age,
        }
    }

    /// Number of labeled images.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gender_codes_map_to_labels() {
        assert_eq!(Gender::from_code(0), Gender::Male);
        assert_eq!(Gender::from_code(1), Gender::Female);
        assert_eq!(Gender::from_code(2), Gender::Coded(2));
    }

    #[test]
    fn unmapped_gender_code_displays_as_its_string_form() {
        assert_eq!(Gender::parse("2").to_string(), "2");
    }

    #[test]
    fn gender_strings_pass_through() {
        assert_eq!(Gender::parse("Male"), Gender::Male);
        assert_eq!(Gender::parse("Female"), Gender::Female);
        assert_eq!(
            Gender::parse("Nonbinary"),
            Gender::Other("Nonbinary".to_string())
        );
    }

    #[test]
    fn race_codes_map_to_labels() {
        let labels: Vec<String> = (0..5).map(|c| Race::from_code(c).to_string()).collect();
        assert_eq!(labels, ["White", "Black", "Asian", "Indian", "Others"]);
        assert_eq!(Race::from_code(7).to_string(), "7");
    }

    #[test]
    fn race_strings_pass_through_unchanged() {
        assert_eq!(
            Race::parse("East Asian"),
            Race::Other("East Asian".to_string())
        );
    }

    #[test]
    fn table_len_and_emptiness_track_records() {
        let empty = DatasetTable::new(DatasetKind::UtkFace, Vec::new(), true);
        assert!(empty.is_empty());
        assert_eq!(empty.len(), 0);

        let one = DatasetTable::new(
            DatasetKind::UtkFace,
            vec![LabelRecord {
                image_path: "a.jpg".to_string(),
                age: Some(RawAge::Years(26)),
                gender: Gender::Male,
                race: Race::White,
            }],
            true,
        );
        assert!(!one.is_empty());
        assert_eq!(one.len(), 1);
    }

    #[test]
    fn raw_age_resolves_numeric_and_range_once() {
        assert_eq!(RawAge::parse("26"), Some(RawAge::Years(26)));
        assert_eq!(RawAge::parse("3-9"), Some(RawAge::Range("3-9".to_string())));
        assert_eq!(RawAge::parse("60+"), Some(RawAge::Range("60+".to_string())));
        assert_eq!(RawAge::parse("  "), None);
    }
}
