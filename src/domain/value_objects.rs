use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Resolved geographic position of an event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// The two accumulators a user can be rated under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingRole {
    Organizer,
    Participant,
}

impl RatingRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingRole::Organizer => "organizer",
            RatingRole::Participant => "participant",
        }
    }
}

impl fmt::Display for RatingRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RatingRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organizer" => Ok(RatingRole::Organizer),
            "participant" => Ok(RatingRole::Participant),
            other => Err(format!("unknown rating role: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_str() {
        for role in [RatingRole::Organizer, RatingRole::Participant] {
            assert_eq!(role.as_str().parse::<RatingRole>().unwrap(), role);
        }
        assert!("moderator".parse::<RatingRole>().is_err());
    }
}
