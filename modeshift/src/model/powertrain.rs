use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// energy sub-variant of a travel mode. a "classical" bicycle is `Human`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Powertrain {
    Thermal,
    Electric,
    Human,
}

impl Powertrain {
    pub fn as_str(&self) -> &'static str {
        match self {
            Powertrain::Thermal => "thermal",
            Powertrain::Electric => "electric",
            Powertrain::Human => "human",
        }
    }
}

impl std::fmt::Display for Powertrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Powertrain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "thermal" => Ok(Powertrain::Thermal),
            "electric" => Ok(Powertrain::Electric),
            "human" => Ok(Powertrain::Human),
            _ => Err(format!("unknown powertrain: {s}")),
        }
    }
}

impl Serialize for Powertrain {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Powertrain {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Powertrain::from_str(&s).map_err(de::Error::custom)
    }
}
