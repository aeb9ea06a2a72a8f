use riven::consts::Champion;
use serde::Serialize;

/// Display name and identifier key of a champion.
///
/// The name keys the community baseline table, the key is what the
/// recommendation endpoints expect (e.g. Wukong / `MonkeyKing`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChampionIdentity {
    pub id: i32,
    pub name: String,
    pub key: String,
}

impl ChampionIdentity {
    pub fn from_id(id: i32) -> Self {
        let champion = Champion::from(id);
        let name = champion
            .name()
            .map(str::to_string)
            .unwrap_or_else(|| format!("Champion {id}"));
        let key = champion
            .identifier()
            .map(str::to_string)
            .unwrap_or_else(|| id.to_string());
        Self { id, name, key }
    }
}
