use serde::Deserialize;
use std::fmt;

/// Time between samples of the daily integration, in minutes.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(try_from = "u8")]
pub struct IntegrationStep(u8);

impl IntegrationStep {
    pub const MINUTE: IntegrationStep = IntegrationStep(1);

    pub fn minutes(&self) -> f64 {
        self.0 as f64
    }

    /// Fraction of an hour covered by one sample.
    pub fn hours(&self) -> f64 {
        self.0 as f64 / 60.0
    }
}

impl Default for IntegrationStep {
    fn default() -> Self {
        IntegrationStep::MINUTE
    }
}

impl TryFrom<u8> for IntegrationStep {
    type Error = IntegrationStepError;

    fn try_from(minutes: u8) -> Result<Self, Self::Error> {
        if (1..=60).contains(&minutes) {
            Ok(IntegrationStep(minutes))
        } else {
            Err(IntegrationStepError(minutes))
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegrationStepError(pub u8);

impl fmt::Display for IntegrationStepError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "integration step of {} minutes, should be between 1 and 60",
            self.0
        )
    }
}

impl std::error::Error for IntegrationStepError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_range() {
        assert!(IntegrationStep::try_from(0).is_err());
        assert!(IntegrationStep::try_from(61).is_err());
        assert_eq!(IntegrationStep::try_from(15).unwrap().hours(), 0.25);
        assert_eq!(IntegrationStep::default(), IntegrationStep::MINUTE);
    }

    #[test]
    fn test_deserialize_validates() {
        let step: IntegrationStep = serde_json::from_str("5").unwrap();
        assert_eq!(step.minutes(), 5.0);
        assert!(serde_json::from_str::<IntegrationStep>("90").is_err());
    }
}
