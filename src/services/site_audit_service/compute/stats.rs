use crate::models::audit::Label;
use rand::Rng;

/// Website cut points: 80 / 60 / 40.
pub fn website_label(score: u8) -> Label {
    match score {
        80..=u8::MAX => Label::Excellent,
        60..=79 => Label::Strong,
        40..=59 => Label::Good,
        _ => Label::NeedsWork,
    }
}

/// Business and social cut points: 75 / 50, no "Strong" tier.
pub fn presence_label(score: u8) -> Label {
    match score {
        75..=u8::MAX => Label::Excellent,
        50..=74 => Label::Good,
        _ => Label::NeedsWork,
    }
}

/// Percentile range an overall score is placed in, inclusive.
pub fn percentile_bucket(score: u8) -> (u8, u8) {
    match score {
        90..=u8::MAX => (94, 99),
        80..=89 => (80, 89),
        70..=79 => (65, 79),
        60..=69 => (50, 64),
        50..=59 => (35, 49),
        40..=49 => (20, 34),
        _ => (5, 19),
    }
}

/// Illustrative percentile: a random draw inside the score's bucket. Display
/// dressing only, there is no population behind it.
pub fn estimate_percentile(score: u8) -> u8 {
    let (low, high) = percentile_bucket(score);
    rand::thread_rng().gen_range(low..=high)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn website_thresholds() {
        assert_eq!(website_label(80), Label::Excellent);
        assert_eq!(website_label(79), Label::Strong);
        assert_eq!(website_label(60), Label::Strong);
        assert_eq!(website_label(40), Label::Good);
        assert_eq!(website_label(39), Label::NeedsWork);
    }

    #[test]
    fn presence_thresholds() {
        assert_eq!(presence_label(75), Label::Excellent);
        assert_eq!(presence_label(74), Label::Good);
        assert_eq!(presence_label(50), Label::Good);
        assert_eq!(presence_label(49), Label::NeedsWork);
    }

    #[test]
    fn percentile_stays_in_bucket() {
        for score in [0u8, 39, 40, 55, 64, 79, 85, 90, 100] {
            let (low, high) = percentile_bucket(score);
            for _ in 0..50 {
                let p = estimate_percentile(score);
                assert!((low..=high).contains(&p), "{} outside {}..={}", p, low, high);
            }
        }
    }
}
