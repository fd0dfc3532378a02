use super::*;

fn sample() -> CandidateRecord {
    CandidateRecord {
        date: NaiveDate::from_ymd_opt(2023, 5, 1).unwrap(),
        age: 31,
        position: "Analyst".to_string(),
        gender: "Female".to_string(),
        overall: 82.0,
        iq: 112.0,
        logical_reasoning: 70.0,
        numerical_reasoning: 65.0,
        verbal_reasoning: 90.0,
        openness: 55.0,
        conscientiousness: 60.0,
        extraversion: 45.0,
        agreeableness: 72.0,
        neuroticism: 30.0,
    }
}

#[test]
fn test_accessors_follow_declared_order() {
    let r = sample();
    let cognitive: Vec<f64> = cognitive_order().iter().map(|m| r.cognitive(*m)).collect();
    assert_eq!(cognitive, vec![70.0, 65.0, 90.0]);
    let traits: Vec<f64> = trait_order().iter().map(|t| r.trait_score(*t)).collect();
    assert_eq!(traits, vec![55.0, 60.0, 45.0, 72.0, 30.0]);
}

#[test]
fn test_group_keys() {
    let r = sample();
    assert_eq!(r.group_key(GroupDimension::Age), GroupKey::Age(31));
    assert_eq!(
        r.group_key(GroupDimension::Position),
        GroupKey::Label("Analyst".to_string())
    );
    assert_eq!(r.group_key(GroupDimension::Gender).to_string(), "Female");
}

#[test]
fn test_age_keys_sort_numerically() {
    let mut keys = vec![GroupKey::Age(40), GroupKey::Age(9), GroupKey::Age(25)];
    keys.sort();
    assert_eq!(
        keys,
        vec![GroupKey::Age(9), GroupKey::Age(25), GroupKey::Age(40)]
    );
}
