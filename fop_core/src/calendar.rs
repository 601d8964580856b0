//! This module combines deadline records into calendar months.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};

use crate::{
    data_loader::{DeadlineRecord, MonthTitles},
    error::{CalendarError, Result},
    group::TaxGroup,
};

static DATE_FORMAT: &str = "%d.%m.%Y";

/// The calendar of one taxpayer group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarResult {
    #[serde(skip_serializing_if = "is_zero")]
    pub group: u8,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Month>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Month {
    #[serde(skip_serializing_if = "is_zero")]
    pub number: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<ResolvedDeadline>,
}

/// A deadline with the amounts of the requested group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedDeadline {
    #[serde(serialize_with = "serialize_midnight_utc")]
    pub end_date: NaiveDate,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(skip_serializing_if = "is_zero_amount")]
    pub amount: f64,
    #[serde(skip_serializing_if = "is_zero_amount")]
    pub amount_max: f64,
    #[serde(skip_serializing_if = "is_zero")]
    pub amount_percents: u32,
}

impl ResolvedDeadline {
    /// Resolve a record for a group.
    ///
    /// Groups 1 and 2 get their maximum amount, group 3 gets the rate of its VAT mode.
    pub fn resolve(record: &DeadlineRecord, group: TaxGroup, with_pdv: bool) -> Result<Self> {
        let end_date = parse_date(&record.end_date)?;
        let amount_max = match group {
            TaxGroup::One => record.amount_max_group1,
            TaxGroup::Two => record.amount_max_group2,
            TaxGroup::Three => 0.0,
        };
        let amount_percents = match (group, with_pdv) {
            (TaxGroup::Three, true) => record.amount_percents_pdv,
            (TaxGroup::Three, false) => record.amount_percents_no_pdv,
            _ => 0,
        };
        Ok(Self {
            end_date,
            title: record.title.clone(),
            amount: record.amount,
            amount_max,
            amount_percents,
        })
    }
}

/// Combine deadline records into the months of `month_titles`.
///
/// Fails without partial output if any date can't be parsed.
/// Months come out in ascending order, their items sorted by date with ties in input order.
pub fn combine(
    month_titles: &MonthTitles,
    records: &[DeadlineRecord],
    group: TaxGroup,
    with_pdv: bool,
) -> Result<CalendarResult> {
    let mut buckets: BTreeMap<u32, Vec<ResolvedDeadline>> = BTreeMap::new();
    for record in records {
        let deadline = ResolvedDeadline::resolve(record, group, with_pdv)?;
        buckets
            .entry(deadline.end_date.month())
            .or_default()
            .push(deadline);
    }
    let mut data = Vec::with_capacity(month_titles.len());
    for (&number, title) in month_titles {
        let mut items = buckets.remove(&number).unwrap_or_default();
        items.sort_by_key(|item| item.end_date);
        data.push(Month {
            number,
            title: title.clone(),
            items,
        });
    }
    for (number, items) in &buckets {
        tracing::warn!(month = number, count = items.len(), "deadlines without month title");
    }
    Ok(CalendarResult {
        group: group.number(),
        data,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    let invalid = |source| CalendarError::InvalidDate {
        value: value.to_string(),
        source,
    };
    if !has_date_shape(value) {
        return Err(invalid(None));
    }
    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|err| invalid(Some(err)))
}

/// Check for exactly two day digits, two month digits and four year digits.
///
/// `%d.%m.%Y` alone also takes single digits, signs and short years.
fn has_date_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            2 | 5 => *byte == b'.',
            _ => byte.is_ascii_digit(),
        })
}

/// Render a date the way RFC3339 timestamps look, at midnight UTC.
fn serialize_midnight_utc<S: Serializer>(
    date: &NaiveDate,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format("%Y-%m-%dT00:00:00Z"))
}

fn is_zero<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

fn is_zero_amount(value: &f64) -> bool {
    *value == 0.0
}
