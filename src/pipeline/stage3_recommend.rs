use serde::Serialize;

use crate::model::record::CandidateRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub threshold: u8,
    pub recommended: usize,
    pub not_recommended: usize,
}

impl Recommendation {
    pub fn total(&self) -> usize {
        self.recommended + self.not_recommended
    }
}

pub fn is_recommended(record: &CandidateRecord, threshold: u8) -> bool {
    record.overall >= f64::from(threshold)
}

pub fn run_stage3(records: &[&CandidateRecord], threshold: u8) -> Recommendation {
    let recommended = records
        .iter()
        .filter(|r| is_recommended(r, threshold))
        .count();
    Recommendation {
        threshold,
        recommended,
        not_recommended: records.len() - recommended,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_recommend.rs"]
mod tests;
