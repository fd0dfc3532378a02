use tracing::debug;

use crate::model::criteria::FilterCriteria;
use crate::model::record::CandidateRecord;

pub fn run_stage1<'a>(
    records: &'a [CandidateRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a CandidateRecord> {
    let filtered = records
        .iter()
        .filter(|r| criteria.matches(r))
        .collect::<Vec<_>>();
    debug!(
        "filter kept {} of {} records (positions={:?}, genders={:?})",
        filtered.len(),
        records.len(),
        criteria.positions,
        criteria.genders
    );
    filtered
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_filter.rs"]
mod tests;
