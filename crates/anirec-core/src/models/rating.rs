//! Item rating with an explicit "not available" state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::constants::RATING_NOT_AVAILABLE;

/// A stored rating, or the `"N/A"` sentinel when the catalog has none.
///
/// Serializes as a bare number or the string `"N/A"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rating {
    Score(f64),
    NotAvailable,
}

/// Coarse rating buckets used for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingCategory {
    Excellent,
    High,
    Medium,
    Low,
}

impl Rating {
    /// Null and NaN both map to `NotAvailable`.
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) if !v.is_nan() => Self::Score(v),
            _ => Self::NotAvailable,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Score(v) => Some(*v),
            Self::NotAvailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Score(_))
    }

    /// Display bucket: excellent >= 8.5, high >= 7.0, medium >= 5.0, else low.
    pub fn category(&self) -> Option<RatingCategory> {
        let v = self.value()?;
        Some(if v >= 8.5 {
            RatingCategory::Excellent
        } else if v >= 7.0 {
            RatingCategory::High
        } else if v >= 5.0 {
            RatingCategory::Medium
        } else {
            RatingCategory::Low
        })
    }
}

impl From<Option<f64>> for Rating {
    fn from(value: Option<f64>) -> Self {
        Self::from_option(value)
    }
}

impl Serialize for Rating {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Score(v) => serializer.serialize_f64(*v),
            Self::NotAvailable => serializer.serialize_str(RATING_NOT_AVAILABLE),
        }
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
            Null(Option<()>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(Self::from_option(Some(v))),
            Repr::Text(s) if s == RATING_NOT_AVAILABLE => Ok(Self::NotAvailable),
            Repr::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{RATING_NOT_AVAILABLE}\", got \"{s}\""
            ))),
            Repr::Null(_) => Ok(Self::NotAvailable),
        }
    }
}
