use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::record::CandidateRecord;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },
    #[error("minimum age {min} is greater than maximum age {max}")]
    InvertedAgeRange { min: u32, max: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeRange {
    pub min: u32,
    pub max: u32,
}

impl AgeRange {
    pub fn contains(&self, age: u32) -> bool {
        age >= self.min && age <= self.max
    }
}

/// Active predicates; an empty position or gender set places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    pub date_range: Option<DateRange>,
    pub age_range: Option<AgeRange>,
    pub positions: BTreeSet<String>,
    pub genders: BTreeSet<String>,
}

impl FilterCriteria {
    pub fn matches(&self, record: &CandidateRecord) -> bool {
        if let Some(range) = self.date_range {
            if !range.contains(record.date) {
                return false;
            }
        }
        if let Some(range) = self.age_range {
            if !range.contains(record.age) {
                return false;
            }
        }
        if !self.positions.is_empty() && !self.positions.contains(&record.position) {
            return false;
        }
        if !self.genders.is_empty() && !self.genders.contains(&record.gender) {
            return false;
        }
        true
    }
}

/// Domain of every control: bounds and the distinct category values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ControlDomain {
    pub date_min: NaiveDate,
    pub date_max: NaiveDate,
    pub age_min: u32,
    pub age_max: u32,
    pub positions: Vec<String>,
    pub genders: Vec<String>,
    pub threshold_min: u8,
    pub threshold_max: u8,
    pub threshold_default: u8,
}

impl ControlDomain {
    pub fn from_records(
        records: &[CandidateRecord],
        profile: &crate::model::profile::ReportProfile,
    ) -> Option<Self> {
        let first = records.first()?;
        let mut date_min = first.date;
        let mut date_max = first.date;
        let mut age_min = first.age;
        let mut age_max = first.age;
        let mut positions = BTreeSet::new();
        let mut genders = BTreeSet::new();
        for r in records {
            date_min = date_min.min(r.date);
            date_max = date_max.max(r.date);
            age_min = age_min.min(r.age);
            age_max = age_max.max(r.age);
            positions.insert(r.position.clone());
            genders.insert(r.gender.clone());
        }
        Some(Self {
            date_min,
            date_max,
            age_min,
            age_max,
            positions: positions.into_iter().collect(),
            genders: genders.into_iter().collect(),
            threshold_min: profile.threshold_min,
            threshold_max: profile.threshold_max,
            threshold_default: profile.threshold,
        })
    }

    /// Fills unspecified bounds from the domain, as the controls default to
    /// the full data range. Only a pair given in full can be inverted; a
    /// single bound outside the data yields a range that matches nothing.
    pub fn resolve(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        min_age: Option<u32>,
        max_age: Option<u32>,
    ) -> Result<(DateRange, AgeRange), FilterError> {
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if start > end {
                return Err(FilterError::InvertedDateRange { start, end });
            }
        }
        if let (Some(min), Some(max)) = (min_age, max_age) {
            if min > max {
                return Err(FilterError::InvertedAgeRange { min, max });
            }
        }
        Ok((
            DateRange {
                start: start_date.unwrap_or(self.date_min),
                end: end_date.unwrap_or(self.date_max),
            },
            AgeRange {
                min: min_age.unwrap_or(self.age_min),
                max: max_age.unwrap_or(self.age_max),
            },
        ))
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/criteria.rs"]
mod tests;
