use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// a category of travel. the set is closed; which modes participate in a
/// given computation is decided by [`crate::model::scenario::EngineConfig`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mode {
    Car,
    Bus,
    Train,
    Bike,
    Walk,
    Plane,
}

impl Mode {
    pub const ALL: [Mode; 6] = [
        Mode::Car,
        Mode::Bus,
        Mode::Train,
        Mode::Bike,
        Mode::Walk,
        Mode::Plane,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Car => "car",
            Mode::Bus => "bus",
            Mode::Train => "train",
            Mode::Bike => "bike",
            Mode::Walk => "walk",
            Mode::Plane => "plane",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "car" => Ok(Mode::Car),
            "bus" => Ok(Mode::Bus),
            "train" => Ok(Mode::Train),
            "bike" => Ok(Mode::Bike),
            "walk" => Ok(Mode::Walk),
            "plane" => Ok(Mode::Plane),
            _ => Err(format!("unknown travel mode: {s}")),
        }
    }
}

// serialized as a plain string so modes can be used as map keys in
// TOML and JSON documents
impl Serialize for Mode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Mode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Mode::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_string_round_trip() {
        for mode in Mode::ALL {
            let parsed = Mode::from_str(mode.as_str()).unwrap();
            assert_eq!(parsed, mode);
        }
    }

    #[test]
    fn test_unknown_mode_rejected() {
        assert!(Mode::from_str("teleporter").is_err());
    }
}
