use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;
use strum::Display;
use strum::EnumString;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, Display, EnumString, ValueEnum, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
/// Sizing
pub enum Sizing {
    /// Increase
    Increase,
    /// Decrease
    Decrease,
}

impl Sizing {
    /// The signed proportional delta for a resize step of `step`.
    #[must_use]
    pub fn adjust_by(&self, step: f64) -> f64 {
        match self {
            Self::Increase => step.abs(),
            Self::Decrease => -step.abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_by_sign() {
        assert!((Sizing::Increase.adjust_by(0.02) - 0.02).abs() < f64::EPSILON);
        assert!((Sizing::Decrease.adjust_by(0.02) + 0.02).abs() < f64::EPSILON);
        assert!((Sizing::Decrease.adjust_by(-0.02) + 0.02).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_snake_case() {
        assert_eq!("increase".parse::<Sizing>().unwrap(), Sizing::Increase);
        assert_eq!(Sizing::Decrease.to_string(), "decrease");
    }
}
