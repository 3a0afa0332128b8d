//! Fixed-cutoff classification used for badge and bar colouring.
//!
//! Every screen goes through the named [`Scale`]s below instead of repeating
//! its own `if value > x` chains.

/// Which side of a cutoff counts as healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    HigherIsBetter,
    LowerIsBetter,
}

/// Outcome of a classification, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Band {
    Good,
    Fair,
    Poor,
}

impl Band {
    /// Reading the band as a risk level: a healthy value means low risk.
    pub fn risk_label(&self) -> &'static str {
        match self {
            Band::Good => "Low",
            Band::Fair => "Medium",
            Band::Poor => "High",
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Band::Good => Tone::Positive,
            Band::Fair => Tone::Caution,
            Band::Poor => Tone::Critical,
        }
    }
}

/// Colour family of a badge, card or bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Positive,
    Caution,
    Critical,
    Info,
    Neutral,
}

impl Tone {
    pub fn css_class(&self) -> &'static str {
        match self {
            Tone::Positive => "tone-positive",
            Tone::Caution => "tone-caution",
            Tone::Critical => "tone-critical",
            Tone::Info => "tone-info",
            Tone::Neutral => "tone-neutral",
        }
    }

    /// Text colour only, for inline numbers.
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Positive => "tone-text-positive",
            Tone::Caution => "tone-text-caution",
            Tone::Critical => "tone-text-critical",
            Tone::Info => "tone-text-info",
            Tone::Neutral => "tone-text-neutral",
        }
    }
}

/// Two cutoffs splitting a percentage into three bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    pub direction: Direction,
    /// Whether a value sitting exactly on a cutoff passes it.
    pub inclusive: bool,
    pub good: f64,
    pub fair: f64,
}

impl Scale {
    pub const fn new(direction: Direction, inclusive: bool, good: f64, fair: f64) -> Self {
        Self {
            direction,
            inclusive,
            good,
            fair,
        }
    }

    fn passes(&self, value: f64, cutoff: f64) -> bool {
        match (self.direction, self.inclusive) {
            (Direction::HigherIsBetter, true) => value >= cutoff,
            (Direction::HigherIsBetter, false) => value > cutoff,
            (Direction::LowerIsBetter, true) => value <= cutoff,
            (Direction::LowerIsBetter, false) => value < cutoff,
        }
    }

    /// NaN never passes a cutoff and lands in [`Band::Poor`].
    pub fn classify(&self, value: f64) -> Band {
        if self.passes(value, self.good) {
            Band::Good
        } else if self.passes(value, self.fair) {
            Band::Fair
        } else {
            Band::Poor
        }
    }
}

/// Days until the next predicted maintenance window.
pub const EQUIPMENT_FAILURE: Scale = Scale::new(Direction::HigherIsBetter, false, 20.0, 10.0);
/// Predicted defect probability.
pub const QUALITY_ISSUES: Scale = Scale::new(Direction::LowerIsBetter, false, 5.0, 10.0);
/// Energy optimisation percentage.
pub const ENERGY_EFFICIENCY: Scale = Scale::new(Direction::HigherIsBetter, false, 75.0, 60.0);
/// Individual performance scores (productivity, quality, ...).
pub const PERFORMANCE: Scale = Scale::new(Direction::HigherIsBetter, true, 90.0, 75.0);
/// Skill level as a percentage of the level the role requires.
pub const SKILL_COVERAGE: Scale = Scale::new(Direction::HigherIsBetter, true, 100.0, 80.0);

/// Severity attached to an AI insight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    High,
    Medium,
    Low,
    Unknown,
}

impl Severity {
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Severity::High,
            "medium" => Severity::Medium,
            "low" => Severity::Low,
            _ => Severity::Unknown,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            Severity::High => Tone::Critical,
            Severity::Medium => Tone::Caution,
            Severity::Low => Tone::Positive,
            Severity::Unknown => Tone::Neutral,
        }
    }
}

/// Job-fit label delivered with an evaluation record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitLabel {
    PerfectMatch,
    NeedsTraining,
    PoorMatch,
    Other,
}

impl FitLabel {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "Perfect Match" => FitLabel::PerfectMatch,
            "Needs Training" => FitLabel::NeedsTraining,
            "Poor Match" => FitLabel::PoorMatch,
            _ => FitLabel::Other,
        }
    }

    pub fn tone(&self) -> Tone {
        match self {
            FitLabel::PerfectMatch => Tone::Positive,
            FitLabel::NeedsTraining => Tone::Caution,
            FitLabel::PoorMatch => Tone::Critical,
            FitLabel::Other => Tone::Neutral,
        }
    }
}

/// Status of a production line or station.
pub fn status_tone(status: &str) -> Tone {
    match status {
        "Optimal" => Tone::Positive,
        "Monitoring" => Tone::Caution,
        _ => Tone::Info,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equipment_failure_risk_from_maintenance_days() {
        assert_eq!(EQUIPMENT_FAILURE.classify(25.0).risk_label(), "Low");
        assert_eq!(EQUIPMENT_FAILURE.classify(15.0).risk_label(), "Medium");
        assert_eq!(EQUIPMENT_FAILURE.classify(5.0).risk_label(), "High");
    }

    #[test]
    fn strict_cutoffs_exclude_the_boundary() {
        assert_eq!(EQUIPMENT_FAILURE.classify(20.0), Band::Fair);
        assert_eq!(EQUIPMENT_FAILURE.classify(10.0), Band::Poor);
        assert_eq!(ENERGY_EFFICIENCY.classify(75.0), Band::Fair);
    }

    #[test]
    fn lower_is_better_for_defects() {
        assert_eq!(QUALITY_ISSUES.classify(4.9), Band::Good);
        assert_eq!(QUALITY_ISSUES.classify(5.0), Band::Fair);
        assert_eq!(QUALITY_ISSUES.classify(12.0), Band::Poor);
    }

    #[test]
    fn inclusive_cutoffs_include_the_boundary() {
        assert_eq!(PERFORMANCE.classify(90.0).tone(), Tone::Positive);
        assert_eq!(PERFORMANCE.classify(75.0).tone(), Tone::Caution);
        assert_eq!(PERFORMANCE.classify(74.9).tone(), Tone::Critical);
        assert_eq!(SKILL_COVERAGE.classify(100.0), Band::Good);
    }

    #[test]
    fn nan_is_treated_as_poor() {
        assert_eq!(ENERGY_EFFICIENCY.classify(f64::NAN), Band::Poor);
    }

    #[test]
    fn labels_map_to_tones() {
        assert_eq!(Severity::parse("HIGH").tone(), Tone::Critical);
        assert_eq!(Severity::parse("medium").tone(), Tone::Caution);
        assert_eq!(Severity::parse("whatever"), Severity::Unknown);
        assert_eq!(FitLabel::parse("Needs Training").tone(), Tone::Caution);
        assert_eq!(FitLabel::parse("perfect match"), FitLabel::Other);
        assert_eq!(status_tone("Optimized"), Tone::Info);
        assert_eq!(Tone::Critical.css_class(), "tone-critical");
    }
}
