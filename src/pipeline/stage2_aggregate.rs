use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::model::profile::ReportProfile;
use crate::model::record::{
    CandidateRecord, CognitiveMeasure, GroupDimension, GroupKey, PersonalityTrait,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupMeans {
    pub key: GroupKey,
    pub count: usize,
    pub logical_reasoning: f64,
    pub numerical_reasoning: f64,
    pub verbal_reasoning: f64,
}

impl GroupMeans {
    pub fn value(&self, measure: CognitiveMeasure) -> f64 {
        match measure {
            CognitiveMeasure::Logical => self.logical_reasoning,
            CognitiveMeasure::Numerical => self.numerical_reasoning,
            CognitiveMeasure::Verbal => self.verbal_reasoning,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraitMeans {
    pub count: usize,
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl TraitMeans {
    pub fn value(&self, t: PersonalityTrait) -> f64 {
        match t {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub count: usize,
    pub mean_overall: f64,
}

/// Equal-width bins; `edges.len() == counts.len() + 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn lo(&self) -> f64 {
        self.edges[0]
    }

    pub fn hi(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    pub fn bin_width(&self) -> f64 {
        (self.hi() - self.lo()) / self.counts.len() as f64
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, c)| (self.edges[i], self.edges[i + 1], *c))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistogramLayer {
    pub label: String,
    pub counts: Vec<usize>,
    pub kde: Option<Vec<(f64, f64)>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackedHistogram {
    pub edges: Vec<f64>,
    pub layers: Vec<HistogramLayer>,
}

impl StackedHistogram {
    pub fn lo(&self) -> f64 {
        self.edges[0]
    }

    pub fn hi(&self) -> f64 {
        self.edges[self.edges.len() - 1]
    }

    pub fn stack_heights(&self) -> Vec<usize> {
        let mut heights = vec![0usize; self.edges.len().saturating_sub(1)];
        for layer in &self.layers {
            for (h, c) in heights.iter_mut().zip(&layer.counts) {
                *h += *c;
            }
        }
        heights
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistributionSummary {
    pub histogram: Histogram,
    pub kde: Option<Vec<(f64, f64)>>,
}

#[derive(Debug, Clone)]
pub struct Aggregates {
    pub n_records: usize,
    pub overall: Option<DistributionSummary>,
    pub overall_by_gender: Option<StackedHistogram>,
    pub overall_by_position: Option<StackedHistogram>,
    pub cognitive_by_age: Vec<GroupMeans>,
    pub cognitive_by_gender: Vec<GroupMeans>,
    pub cognitive_by_position: Vec<GroupMeans>,
    pub traits: Option<TraitMeans>,
    pub trend: Vec<TrendPoint>,
    pub iq: Option<DistributionSummary>,
}

impl Aggregates {
    pub fn cognitive(&self, dimension: GroupDimension) -> &[GroupMeans] {
        match dimension {
            GroupDimension::Age => &self.cognitive_by_age,
            GroupDimension::Gender => &self.cognitive_by_gender,
            GroupDimension::Position => &self.cognitive_by_position,
        }
    }
}

pub fn run_stage2(records: &[&CandidateRecord], profile: &ReportProfile) -> Aggregates {
    let bins = profile.histogram_bins;
    let overall_values = records.iter().map(|r| r.overall).collect::<Vec<_>>();
    let iq_values = records.iter().map(|r| r.iq).collect::<Vec<_>>();

    Aggregates {
        n_records: records.len(),
        overall: distribution(&overall_values, bins, profile.kde_points),
        overall_by_gender: stacked_histogram(
            records,
            |r| r.overall,
            |r| r.gender.as_str(),
            bins,
            profile.kde_points,
        ),
        overall_by_position: stacked_histogram(
            records,
            |r| r.overall,
            |r| r.position.as_str(),
            bins,
            profile.kde_points,
        ),
        cognitive_by_age: cognitive_means_by(records, GroupDimension::Age),
        cognitive_by_gender: cognitive_means_by(records, GroupDimension::Gender),
        cognitive_by_position: cognitive_means_by(records, GroupDimension::Position),
        traits: trait_means(records),
        trend: overall_trend(records),
        iq: distribution(&iq_values, bins, profile.kde_points),
    }
}

pub fn mean(values: impl IntoIterator<Item = f64>) -> Option<f64> {
    let mut sum = 0.0;
    let mut n = 0usize;
    for v in values {
        sum += v;
        n += 1;
    }
    if n == 0 { None } else { Some(sum / n as f64) }
}

pub fn cognitive_means_by(
    records: &[&CandidateRecord],
    dimension: GroupDimension,
) -> Vec<GroupMeans> {
    let mut groups: BTreeMap<GroupKey, Vec<&CandidateRecord>> = BTreeMap::new();
    for r in records {
        groups.entry(r.group_key(dimension)).or_default().push(*r);
    }
    groups
        .into_iter()
        .map(|(key, members)| {
            let avg = |m: CognitiveMeasure| {
                mean(members.iter().map(|r| r.cognitive(m))).unwrap_or(0.0)
            };
            GroupMeans {
                key,
                count: members.len(),
                logical_reasoning: avg(CognitiveMeasure::Logical),
                numerical_reasoning: avg(CognitiveMeasure::Numerical),
                verbal_reasoning: avg(CognitiveMeasure::Verbal),
            }
        })
        .collect()
}

pub fn trait_means(records: &[&CandidateRecord]) -> Option<TraitMeans> {
    let avg = |t: PersonalityTrait| mean(records.iter().map(|r| r.trait_score(t)));
    Some(TraitMeans {
        count: records.len(),
        openness: avg(PersonalityTrait::Openness)?,
        conscientiousness: avg(PersonalityTrait::Conscientiousness)?,
        extraversion: avg(PersonalityTrait::Extraversion)?,
        agreeableness: avg(PersonalityTrait::Agreeableness)?,
        neuroticism: avg(PersonalityTrait::Neuroticism)?,
    })
}

pub fn overall_trend(records: &[&CandidateRecord]) -> Vec<TrendPoint> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for r in records {
        let slot = by_date.entry(r.date).or_insert((0.0, 0));
        slot.0 += r.overall;
        slot.1 += 1;
    }
    by_date
        .into_iter()
        .map(|(date, (sum, count))| TrendPoint {
            date,
            count,
            mean_overall: sum / count as f64,
        })
        .collect()
}

pub fn bin_edges(values: &[f64], bins: usize) -> Option<Vec<f64>> {
    if values.is_empty() || bins == 0 {
        return None;
    }
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for &v in values {
        lo = lo.min(v);
        hi = hi.max(v);
    }
    if lo == hi {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / bins as f64;
    let mut edges = (0..bins).map(|i| lo + width * i as f64).collect::<Vec<_>>();
    edges.push(hi);
    Some(edges)
}

/// Index of the bin holding `value`; the last bin is right-inclusive.
pub fn bin_index(value: f64, edges: &[f64]) -> Option<usize> {
    let bins = edges.len().checked_sub(1)?;
    let lo = *edges.first()?;
    let hi = *edges.last()?;
    if bins == 0 || value < lo || value > hi {
        return None;
    }
    let idx = ((value - lo) / (hi - lo) * bins as f64).floor() as usize;
    Some(idx.min(bins - 1))
}

pub fn histogram(values: &[f64], bins: usize) -> Option<Histogram> {
    let edges = bin_edges(values, bins)?;
    let mut counts = vec![0usize; bins];
    for &v in values {
        if let Some(idx) = bin_index(v, &edges) {
            counts[idx] += 1;
        }
    }
    Some(Histogram { edges, counts })
}

/// Shared bin edges over all values, one layer per hue with its own KDE
/// curve in count units.
pub fn stacked_histogram<V, H>(
    records: &[&CandidateRecord],
    value: V,
    hue: H,
    bins: usize,
    kde_points: usize,
) -> Option<StackedHistogram>
where
    V: Fn(&CandidateRecord) -> f64,
    H: Fn(&CandidateRecord) -> &str,
{
    let values = records.iter().map(|r| value(r)).collect::<Vec<_>>();
    let edges = bin_edges(&values, bins)?;
    let lo = edges[0];
    let hi = edges[edges.len() - 1];
    let width = (hi - lo) / bins as f64;

    let mut layers: BTreeMap<String, (Vec<usize>, Vec<f64>)> = BTreeMap::new();
    for (r, v) in records.iter().zip(&values) {
        let (counts, members) = layers
            .entry(hue(r).to_string())
            .or_insert_with(|| (vec![0usize; bins], Vec::new()));
        if let Some(idx) = bin_index(*v, &edges) {
            counts[idx] += 1;
        }
        members.push(*v);
    }
    Some(StackedHistogram {
        edges,
        layers: layers
            .into_iter()
            .map(|(label, (counts, members))| HistogramLayer {
                label,
                counts,
                kde: kde_curve(
                    &members,
                    lo,
                    hi,
                    kde_points,
                    members.len() as f64 * width,
                ),
            })
            .collect(),
    })
}

/// Gaussian KDE with Scott's bandwidth, evaluated on `points` evenly spaced
/// samples over `[lo, hi]` and multiplied by `scale`.
pub fn kde_curve(
    values: &[f64],
    lo: f64,
    hi: f64,
    points: usize,
    scale: f64,
) -> Option<Vec<(f64, f64)>> {
    let n = values.len();
    if n < 2 || points < 2 || hi <= lo {
        return None;
    }
    let mu = mean(values.iter().copied())?;
    let var = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / (n - 1) as f64;
    let sd = var.sqrt();
    if !(sd > 0.0) {
        return None;
    }
    let bw = sd * (n as f64).powf(-0.2);
    let norm = 1.0 / (n as f64 * bw * (2.0 * std::f64::consts::PI).sqrt());
    let step = (hi - lo) / (points - 1) as f64;
    let curve = (0..points)
        .map(|i| {
            let x = lo + step * i as f64;
            let density = values
                .iter()
                .map(|v| {
                    let z = (x - v) / bw;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                * norm;
            (x, density * scale)
        })
        .collect();
    Some(curve)
}

fn distribution(values: &[f64], bins: usize, kde_points: usize) -> Option<DistributionSummary> {
    let histogram = histogram(values, bins)?;
    let scale = histogram.total() as f64 * histogram.bin_width();
    let kde = kde_curve(values, histogram.lo(), histogram.hi(), kde_points, scale);
    Some(DistributionSummary { histogram, kde })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
