use serde::Serialize;

/// Side of the map, from the match service's team id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Team {
    /// Team id 100
    Blue,
    /// Team id 200
    Red,
}

impl TryFrom<u16> for Team {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            100 => Ok(Team::Blue),
            200 => Ok(Team::Red),
            other => Err(other),
        }
    }
}

impl From<Team> for u16 {
    fn from(team: Team) -> Self {
        match team {
            Team::Blue => 100,
            Team::Red => 200,
        }
    }
}
