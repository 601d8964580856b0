//! This loader reads the static calendar documents from the data root.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use serde::{de::DeserializeOwned, Deserialize};

use crate::{
    error::{CalendarError, Result},
    group::TaxGroup,
};

static MONTHS_PATH: &str = "calendar/months.yml";
static ESV_FILE: &str = "esv.yml";
static TAX_GROUP1_2_FILE: &str = "tax_group1_2.yml";
static TAX_GROUP3_FILE: &str = "tax_group3.yml";

/// Month number to display title.
pub type MonthTitles = BTreeMap<u32, String>;

/// One deadline as it is written in a calendar document.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DeadlineRecord {
    /// `DD.MM.YYYY`
    pub end_date: String,
    /// The type tag of the record, `esv` or `tax`.
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub amount: f64,
    pub amount_max_group1: f64,
    pub amount_max_group2: f64,
    pub amount_percents_pdv: u32,
    pub amount_percents_no_pdv: u32,
}

/// The calendar documents of one year below a data root.
#[derive(Debug, Clone)]
pub struct CalendarSource {
    data_root: PathBuf,
    year: i32,
}

impl CalendarSource {
    pub fn new(data_root: impl Into<PathBuf>, year: i32) -> Self {
        Self {
            data_root: data_root.into(),
            year,
        }
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Read the month titles.
    pub fn month_titles(&self) -> Result<MonthTitles> {
        read_yaml(&self.data_root.join(MONTHS_PATH))
    }

    /// Read the deadlines which apply to a group.
    ///
    /// ESV deadlines come first, followed by the single tax deadlines of the group.
    pub fn deadline_records(&self, group: TaxGroup) -> Result<Vec<DeadlineRecord>> {
        let mut records: Vec<DeadlineRecord> = read_yaml(&self.schedule_path(ESV_FILE))?;
        let tax_file = match group {
            TaxGroup::One | TaxGroup::Two => TAX_GROUP1_2_FILE,
            TaxGroup::Three => TAX_GROUP3_FILE,
        };
        records.extend(read_yaml::<Vec<DeadlineRecord>>(
            &self.schedule_path(tax_file),
        )?);
        Ok(records)
    }

    fn schedule_path(&self, file: &str) -> PathBuf {
        self.data_root
            .join("calendar")
            .join(self.year.to_string())
            .join("fop_single")
            .join(file)
    }
}

fn read_yaml<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!(path = %path.display(), "reading calendar document");
    let content = fs::read_to_string(path).map_err(|source| CalendarError::DataUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| CalendarError::DataMalformed {
        path: path.to_path_buf(),
        source,
    })
}
