use crate::Armies;

/// Serialized form of a board, keyed by territory name.
///
/// This is what map files contain; [`super::Map::try_from`] resolves the names
/// into indices and validates the topology.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Blueprint {
    pub territories: Vec<Region>,
    pub continents: Vec<Province>,
}

/// A territory entry: its name and the names of the territories it borders.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Region {
    pub name: String,
    pub neighbors: Vec<String>,
}

/// A continent entry: its name, bonus, and member territory names.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Province {
    pub name: String,
    pub bonus: Armies,
    pub territories: Vec<String>,
}

impl Blueprint {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
