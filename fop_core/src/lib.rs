//! This crate builds the tax payment calendar for Ukrainian sole proprietors (FOP) on the single tax.
//!
//! The deadlines are read from static YAML documents below a data root and are grouped into calendar months.
//! The server and the CLI both go through [`get_calendar`].

pub mod calendar;
pub mod data_loader;
pub mod error;
pub mod group;

pub use calendar::{combine, CalendarResult, Month, ResolvedDeadline};
pub use data_loader::{CalendarSource, DeadlineRecord, MonthTitles};
pub use error::{CalendarError, Result};
pub use group::TaxGroup;

/// Get the calendar for a taxpayer group.
///
/// `with_pdv` only matters for group 3, where it selects the VAT-inclusive rate.
pub fn get_calendar(
    source: &CalendarSource,
    group: TaxGroup,
    with_pdv: bool,
) -> Result<CalendarResult> {
    let month_titles = source.month_titles()?;
    let records = source.deadline_records(group)?;
    combine(&month_titles, &records, group, with_pdv)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::{get_calendar, CalendarSource, TaxGroup};

    fn shipped_source() -> CalendarSource {
        let data_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data");
        CalendarSource::new(data_root, 2019)
    }

    /// Test the shipped 2019 data for every group and VAT mode.
    ///
    /// This test is offline.
    #[test]
    fn test_get_calendar_shipped_data() {
        let source = shipped_source();
        for group in [TaxGroup::One, TaxGroup::Two, TaxGroup::Three] {
            for with_pdv in [false, true] {
                let calendar = get_calendar(&source, group, with_pdv).unwrap();
                assert_eq!(calendar.group, group.number());
                let numbers: Vec<u32> = calendar.data.iter().map(|month| month.number).collect();
                assert_eq!(numbers, (1..=12).collect::<Vec<u32>>());
                for month in &calendar.data {
                    assert!(!month.title.is_empty());
                    assert!(month
                        .items
                        .windows(2)
                        .all(|pair| pair[0].end_date <= pair[1].end_date));
                }
            }
        }
    }

    #[test]
    fn test_get_calendar_group3_rates() {
        let source = shipped_source();
        let without_pdv = get_calendar(&source, TaxGroup::Three, false).unwrap();
        let with_pdv = get_calendar(&source, TaxGroup::Three, true).unwrap();
        let percents = |calendar: &crate::CalendarResult| -> Vec<u32> {
            calendar
                .data
                .iter()
                .flat_map(|month| month.items.iter())
                .filter(|item| item.amount_percents != 0)
                .map(|item| item.amount_percents)
                .collect()
        };
        assert_eq!(percents(&without_pdv), vec![5, 5, 5, 5]);
        assert_eq!(percents(&with_pdv), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_get_calendar_missing_year() {
        let source = CalendarSource::new(shipped_source().data_root().to_path_buf(), 1999);
        let err = get_calendar(&source, TaxGroup::One, false).unwrap_err();
        assert!(matches!(err, crate::CalendarError::DataUnavailable { .. }));
    }
}
