use super::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of relay outputs on the board.
pub const RELAY_COUNT: u8 = 4;

/// One of the four relay outputs, numbered from 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RelayIndex(u8);

impl RelayIndex {
    pub fn get(self) -> u8 {
        self.0
    }

    /// All relays in board order.
    pub fn all() -> impl Iterator<Item = RelayIndex> {
        (1..=RELAY_COUNT).map(RelayIndex)
    }
}

impl TryFrom<i64> for RelayIndex {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if (1..=RELAY_COUNT as i64).contains(&value) {
            Ok(RelayIndex(value as u8))
        } else {
            Err(ValidationError::RelayOutOfRange(value.to_string()))
        }
    }
}

impl fmt::Display for RelayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Requested relay transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelayAction {
    /// Energize the relay
    Start,
    /// De-energize the relay
    Stop,
}

impl RelayAction {
    /// Path segment used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RelayAction::Start => "start",
            RelayAction::Stop => "stop",
        }
    }
}

impl FromStr for RelayAction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "start" => Ok(RelayAction::Start),
            "stop" => Ok(RelayAction::Stop),
            _ => Err(ValidationError::UnknownAction(s.to_string())),
        }
    }
}

impl fmt::Display for RelayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relay command that passed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelayRequest {
    pub index: RelayIndex,
    pub action: RelayAction,
}

impl RelayRequest {
    /// Validates a raw relay number and action word.
    pub fn new(relay: i64, action: &str) -> Result<Self, ValidationError> {
        let index = RelayIndex::try_from(relay)?;
        let action = action.parse::<RelayAction>()?;
        Ok(Self { index, action })
    }

    pub fn path(&self) -> String {
        format!("/relay{}/{}", self.index, self.action)
    }
}

/// Relay states as reported by `GET /status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayStatus {
    pub relay1: bool,
    pub relay2: bool,
    pub relay3: bool,
    pub relay4: bool,
}

impl RelayStatus {
    pub fn is_on(&self, index: RelayIndex) -> bool {
        match index.get() {
            1 => self.relay1,
            2 => self.relay2,
            3 => self.relay3,
            _ => self.relay4,
        }
    }

    /// `(index, energized)` pairs in board order.
    pub fn iter(&self) -> impl Iterator<Item = (RelayIndex, bool)> + '_ {
        RelayIndex::all().map(move |index| (index, self.is_on(index)))
    }
}

/// ON/OFF label used in listings.
pub fn state_label(on: bool) -> &'static str {
    if on {
        "ON"
    } else {
        "OFF"
    }
}
