use serde::{Deserialize, Serialize};

/// Identifier wrapper for catalog schemes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemeId(pub String);

impl SchemeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SchemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Citizen-stated farm profile captured for a single request.
///
/// Numeric fields are taken as given: zero or negative values are valid input and simply fail
/// more predicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub land_size: f64,
    #[serde(default)]
    pub crop_type: String,
    pub annual_income: f64,
    #[serde(default)]
    pub irrigation_available: bool,
    #[serde(default)]
    pub state: String,
}

/// Optional numeric bound. `Unset` means the predicate is not checked at all.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum Bound {
    #[default]
    Unset,
    Value(f64),
}

impl Bound {
    pub fn value(self) -> Option<f64> {
        match self {
            Bound::Unset => None,
            Bound::Value(value) => Some(value),
        }
    }
}

impl From<Option<f64>> for Bound {
    fn from(value: Option<f64>) -> Self {
        value.map(Bound::Value).unwrap_or(Bound::Unset)
    }
}

impl From<Bound> for Option<f64> {
    fn from(value: Bound) -> Self {
        value.value()
    }
}

/// Crop restriction; blank text on the wire collapses to `Any`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum CropRequirement {
    #[default]
    Any,
    Only(String),
}

impl From<Option<String>> for CropRequirement {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(crop) if !crop.trim().is_empty() => CropRequirement::Only(crop),
            _ => CropRequirement::Any,
        }
    }
}

impl From<CropRequirement> for Option<String> {
    fn from(value: CropRequirement) -> Self {
        match value {
            CropRequirement::Any => None,
            CropRequirement::Only(crop) => Some(crop),
        }
    }
}

/// Tri-state irrigation predicate: `null` / `true` / `false` on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<bool>", into = "Option<bool>")]
pub enum IrrigationRequirement {
    #[default]
    Unconstrained,
    Required,
    RainfedOnly,
}

impl From<Option<bool>> for IrrigationRequirement {
    fn from(value: Option<bool>) -> Self {
        match value {
            None => IrrigationRequirement::Unconstrained,
            Some(true) => IrrigationRequirement::Required,
            Some(false) => IrrigationRequirement::RainfedOnly,
        }
    }
}

impl From<IrrigationRequirement> for Option<bool> {
    fn from(value: IrrigationRequirement) -> Self {
        match value {
            IrrigationRequirement::Unconstrained => None,
            IrrigationRequirement::Required => Some(true),
            IrrigationRequirement::RainfedOnly => Some(false),
        }
    }
}

/// State restriction; a missing or empty list means every state qualifies.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Option<Vec<String>>", into = "Option<Vec<String>>")]
pub enum StateScope {
    #[default]
    Any,
    Only(Vec<String>),
}

impl StateScope {
    pub fn contains(&self, state: &str) -> bool {
        match self {
            StateScope::Any => true,
            StateScope::Only(states) => {
                let wanted = normalize(state);
                states.iter().any(|candidate| normalize(candidate) == wanted)
            }
        }
    }
}

impl From<Option<Vec<String>>> for StateScope {
    fn from(value: Option<Vec<String>>) -> Self {
        match value {
            Some(states) if !states.is_empty() => StateScope::Only(states),
            _ => StateScope::Any,
        }
    }
}

impl From<StateScope> for Option<Vec<String>> {
    fn from(value: StateScope) -> Self {
        match value {
            StateScope::Any => None,
            StateScope::Only(states) => Some(states),
        }
    }
}

/// Eligibility predicates attached to a scheme. Each predicate is independently optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeRule {
    #[serde(default)]
    pub min_land: Bound,
    #[serde(default)]
    pub max_land: Bound,
    #[serde(default)]
    pub income_limit: Bound,
    #[serde(default)]
    pub crop_required: CropRequirement,
    #[serde(default)]
    pub irrigation_required: IrrigationRequirement,
    #[serde(default)]
    pub applicable_states: StateScope,
}

/// Static benefit programme record loaded from the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scheme {
    pub id: SchemeId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "eligibility", default)]
    pub rule: SchemeRule,
    #[serde(deserialize_with = "rupees::deserialize")]
    pub benefit_amount: u64,
    #[serde(default)]
    pub required_documents: Vec<String>,
}

pub(crate) fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Benefit amounts are whole rupees. JSON writers often emit `6000.0`, so integral floats are
/// accepted; fractional or negative amounts are rejected.
pub(crate) mod rupees {
    use std::fmt;

    use serde::de::{self, Deserializer, Unexpected, Visitor};

    struct WholeRupees;

    impl<'de> Visitor<'de> for WholeRupees {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a non-negative whole number of rupees")
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<u64, E> {
            Ok(value)
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<u64, E> {
            u64::try_from(value).map_err(|_| E::invalid_value(Unexpected::Signed(value), &self))
        }

        fn visit_f64<E: de::Error>(self, value: f64) -> Result<u64, E> {
            if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value < u64::MAX as f64
            {
                Ok(value as u64)
            } else {
                Err(E::invalid_value(Unexpected::Float(value), &self))
            }
        }
    }

    pub(crate) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        deserializer.deserialize_any(WholeRupees)
    }
}
