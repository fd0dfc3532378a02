use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateRecord {
    pub date: NaiveDate,
    pub age: u32,
    pub position: String,
    pub gender: String,
    pub overall: f64,
    pub iq: f64,
    pub logical_reasoning: f64,
    pub numerical_reasoning: f64,
    pub verbal_reasoning: f64,
    pub openness: f64,
    pub conscientiousness: f64,
    pub extraversion: f64,
    pub agreeableness: f64,
    pub neuroticism: f64,
}

impl CandidateRecord {
    pub fn cognitive(&self, measure: CognitiveMeasure) -> f64 {
        match measure {
            CognitiveMeasure::Logical => self.logical_reasoning,
            CognitiveMeasure::Numerical => self.numerical_reasoning,
            CognitiveMeasure::Verbal => self.verbal_reasoning,
        }
    }

    pub fn trait_score(&self, t: PersonalityTrait) -> f64 {
        match t {
            PersonalityTrait::Openness => self.openness,
            PersonalityTrait::Conscientiousness => self.conscientiousness,
            PersonalityTrait::Extraversion => self.extraversion,
            PersonalityTrait::Agreeableness => self.agreeableness,
            PersonalityTrait::Neuroticism => self.neuroticism,
        }
    }

    pub fn group_key(&self, dimension: GroupDimension) -> GroupKey {
        match dimension {
            GroupDimension::Age => GroupKey::Age(self.age),
            GroupDimension::Gender => GroupKey::Label(self.gender.clone()),
            GroupDimension::Position => GroupKey::Label(self.position.clone()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CognitiveMeasure {
    Logical,
    Numerical,
    Verbal,
}

impl CognitiveMeasure {
    pub fn label(self) -> &'static str {
        match self {
            CognitiveMeasure::Logical => "Logical Reasoning",
            CognitiveMeasure::Numerical => "Numerical Reasoning",
            CognitiveMeasure::Verbal => "Verbal Reasoning",
        }
    }
}

pub fn cognitive_order() -> &'static [CognitiveMeasure; 3] {
    &[
        CognitiveMeasure::Logical,
        CognitiveMeasure::Numerical,
        CognitiveMeasure::Verbal,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalityTrait {
    Openness,
    Conscientiousness,
    Extraversion,
    Agreeableness,
    Neuroticism,
}

impl PersonalityTrait {
    pub fn label(self) -> &'static str {
        match self {
            PersonalityTrait::Openness => "Openness",
            PersonalityTrait::Conscientiousness => "Conscientiousness",
            PersonalityTrait::Extraversion => "Extraversion",
            PersonalityTrait::Agreeableness => "Agreeableness",
            PersonalityTrait::Neuroticism => "Neuroticism",
        }
    }
}

pub fn trait_order() -> &'static [PersonalityTrait; 5] {
    &[
        PersonalityTrait::Openness,
        PersonalityTrait::Conscientiousness,
        PersonalityTrait::Extraversion,
        PersonalityTrait::Agreeableness,
        PersonalityTrait::Neuroticism,
    ]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupDimension {
    Age,
    Gender,
    Position,
}

impl GroupDimension {
    pub fn label(self) -> &'static str {
        match self {
            GroupDimension::Age => "Age",
            GroupDimension::Gender => "Gender",
            GroupDimension::Position => "Position",
        }
    }
}

/// Grouping key; ages sort numerically and sort before any text label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum GroupKey {
    Age(u32),
    Label(String),
}

impl std::fmt::Display for GroupKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupKey::Age(age) => write!(f, "{age}"),
            GroupKey::Label(label) => f.write_str(label),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/record.rs"]
mod tests;
