use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;

use crate::model::record::CandidateRecord;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

pub fn make_temp_dir(tag: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("group_report_{}_{}_{}", tag, std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

pub fn write_file(path: &Path, contents: &str) {
    let mut f = BufWriter::new(File::create(path).unwrap());
    f.write_all(contents.as_bytes()).unwrap();
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn record(
    date: NaiveDate,
    age: u32,
    position: &str,
    gender: &str,
    overall: f64,
) -> CandidateRecord {
    CandidateRecord {
        date,
        age,
        position: position.to_string(),
        gender: gender.to_string(),
        overall,
        iq: 100.0 + overall / 10.0,
        logical_reasoning: overall - 5.0,
        numerical_reasoning: overall - 10.0,
        verbal_reasoning: overall + 5.0,
        openness: 50.0,
        conscientiousness: 60.0,
        extraversion: 40.0,
        agreeableness: 70.0,
        neuroticism: 30.0,
    }
}

pub fn sample_records() -> Vec<CandidateRecord> {
    vec![
        record(date(2023, 1, 10), 25, "Analyst", "Female", 60.0),
        record(date(2023, 1, 10), 32, "Engineer", "Male", 85.0),
        record(date(2023, 2, 3), 41, "Manager", "Female", 90.0),
        record(date(2023, 2, 3), 25, "Engineer", "Female", 72.0),
        record(date(2023, 3, 15), 37, "Analyst", "Male", 79.5),
        record(date(2023, 4, 1), 29, "Manager", "Male", 80.0),
    ]
}

pub const SAMPLE_HEADER: &str = "Date,Age,Position,Gender,Overall,IQ,Logical Reasoning,Numerical Reasoning,Verbal Reasoning,Openness,Conscientiousness,Extraversion,Agreeableness,Neuroticism";

pub fn sample_csv() -> String {
    let mut out = String::from(SAMPLE_HEADER);
    out.push('\n');
    out.push_str("2023-01-10 09:30:00,25,Analyst,Female,60,101,55,50,65,50,60,40,70,30\n");
    out.push_str("2023-01-10 14:00:00,32,Engineer,Male,85,108.5,80,75,90,52,61,42,71,28\n");
    out.push_str("2023-02-03,41,Manager,Female,90,109,85,80,95,58,66,47,73,25\n");
    out
}
