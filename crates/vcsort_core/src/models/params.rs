//! Simulation parameters decoded from a video filename.

/// Value shown for any field that could not be decoded.
pub const PLACEHOLDER: &str = "?";

/// Display labels, in the same order as [`SimulationParameters::values`].
pub const PARAMETER_LABELS: [&str; 6] = [
    "Vision",
    "Minimum separation",
    "Maximum alignment turn",
    "Maximum coherence turn",
    "Maximum separation turn",
    "Population",
];

/// The six generative-model parameters encoded in a video filename.
///
/// Values are kept as text: they are displayed and exported verbatim, and a
/// field that failed to decode holds [`PLACEHOLDER`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationParameters {
    pub vision_range: String,
    pub min_separation: String,
    pub max_align_turn: String,
    pub max_cohere_turn: String,
    pub max_sep_turn: String,
    pub population: String,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            vision_range: PLACEHOLDER.to_string(),
            min_separation: PLACEHOLDER.to_string(),
            max_align_turn: PLACEHOLDER.to_string(),
            max_cohere_turn: PLACEHOLDER.to_string(),
            max_sep_turn: PLACEHOLDER.to_string(),
            population: PLACEHOLDER.to_string(),
        }
    }
}

impl SimulationParameters {
    /// Values in fixed order: vision, minimum separation, alignment turn,
    /// coherence turn, separation turn, population.
    pub fn values(&self) -> [&str; 6] {
        [
            &self.vision_range,
            &self.min_separation,
            &self.max_align_turn,
            &self.max_cohere_turn,
            &self.max_sep_turn,
            &self.population,
        ]
    }

    /// True when no field could be decoded.
    pub fn is_empty(&self) -> bool {
        self.values().iter().all(|v| *v == PLACEHOLDER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_all_placeholders() {
        let params = SimulationParameters::default();
        assert!(params.is_empty());
        assert_eq!(params.values(), [PLACEHOLDER; 6]);
    }

    #[test]
    fn values_follow_label_order() {
        let params = SimulationParameters {
            vision_range: "5.0".into(),
            min_separation: "1.0".into(),
            max_align_turn: "2".into(),
            max_cohere_turn: "3".into(),
            max_sep_turn: "4".into(),
            population: "40".into(),
        };
        assert_eq!(params.values(), ["5.0", "1.0", "2", "3", "4", "40"]);
        assert_eq!(PARAMETER_LABELS.len(), params.values().len());
        assert!(!params.is_empty());
    }
}
