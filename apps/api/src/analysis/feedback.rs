use serde::{Deserialize, Serialize};

/// Quality band for a skill-count score. Thresholds are checked highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackBand {
    Excellent,
    Good,
    Average,
    NeedsImprovement,
}

const BAND_THRESHOLDS: &[(u32, FeedbackBand)] = &[
    (80, FeedbackBand::Excellent),
    (60, FeedbackBand::Good),
    (40, FeedbackBand::Average),
];

impl FeedbackBand {
    pub fn for_score(score: u32) -> Self {
        BAND_THRESHOLDS
            .iter()
            .find(|(threshold, _)| score >= *threshold)
            .map(|(_, band)| *band)
            .unwrap_or(FeedbackBand::NeedsImprovement)
    }

    pub fn message(self) -> &'static str {
        match self {
            FeedbackBand::Excellent => "Excellent resume! You're well-prepared for most roles.",
            FeedbackBand::Good => "Good resume! Try adding a few more relevant skills.",
            FeedbackBand::Average => "Average resume. Consider strengthening your skills section.",
            FeedbackBand::NeedsImprovement => {
                "Needs improvement. Focus on gaining key skills in your domain."
            }
        }
    }
}

pub fn feedback(score: u32) -> &'static str {
    FeedbackBand::for_score(score).message()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_boundaries() {
        assert_eq!(FeedbackBand::for_score(100), FeedbackBand::Excellent);
        assert_eq!(FeedbackBand::for_score(80), FeedbackBand::Excellent);
        assert_eq!(FeedbackBand::for_score(79), FeedbackBand::Good);
        assert_eq!(FeedbackBand::for_score(60), FeedbackBand::Good);
        assert_eq!(FeedbackBand::for_score(59), FeedbackBand::Average);
        assert_eq!(FeedbackBand::for_score(40), FeedbackBand::Average);
        assert_eq!(FeedbackBand::for_score(39), FeedbackBand::NeedsImprovement);
        assert_eq!(FeedbackBand::for_score(0), FeedbackBand::NeedsImprovement);
    }

    #[test]
    fn test_feedback_messages() {
        assert_eq!(
            feedback(85),
            "Excellent resume! You're well-prepared for most roles."
        );
        assert_eq!(
            feedback(65),
            "Good resume! Try adding a few more relevant skills."
        );
        assert_eq!(
            feedback(45),
            "Average resume. Consider strengthening your skills section."
        );
        assert_eq!(
            feedback(15),
            "Needs improvement. Focus on gaining key skills in your domain."
        );
    }

    #[test]
    fn test_every_score_maps_to_exactly_one_band() {
        let mut previous = FeedbackBand::for_score(0);
        let mut transitions = 0;
        for score in 1..=100 {
            let band = FeedbackBand::for_score(score);
            if band != previous {
                transitions += 1;
                previous = band;
            }
        }
        // NeedsImprovement -> Average -> Good -> Excellent
        assert_eq!(transitions, 3);
    }

    #[test]
    fn test_band_serializes_snake_case() {
        let json = serde_json::to_string(&FeedbackBand::NeedsImprovement).unwrap();
        assert_eq!(json, r#""needs_improvement""#);
    }
}
