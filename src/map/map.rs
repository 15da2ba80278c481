use super::blueprint::Blueprint;
use super::continent::Continent;
use super::territory::Territory;
use std::collections::HashMap;
use std::sync::Arc;

/// Board topology: territory names, adjacency, and continents.
///
/// Immutable once built. Games hold it behind an `Arc`, so cloning a game
/// never copies the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Map {
    names: Vec<String>,
    neighbors: Vec<Vec<Territory>>,
    continents: Vec<Continent>,
    membership: Vec<Option<usize>>,
}

impl Map {
    /// The standard 42-territory world board.
    pub fn classic() -> Arc<Self> {
        super::classic::CLASSIC.clone()
    }
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        Self::try_from(Blueprint::from_json(json)?)
    }
    pub fn n(&self) -> usize {
        self.names.len()
    }
    pub fn territories(&self) -> impl Iterator<Item = Territory> + '_ {
        (0..self.n()).map(Territory::from)
    }
    pub fn neighbors(&self, territory: Territory) -> &[Territory] {
        &self.neighbors[territory.index()]
    }
    pub fn is_adjacent(&self, a: Territory, b: Territory) -> bool {
        self.neighbors(a).contains(&b)
    }
    pub fn name(&self, territory: Territory) -> &str {
        &self.names[territory.index()]
    }
    pub fn find(&self, name: &str) -> Option<Territory> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(Territory::from)
    }
    pub fn continents(&self) -> &[Continent] {
        &self.continents
    }
    /// The continent a territory belongs to, if any.
    pub fn continent(&self, territory: Territory) -> Option<&Continent> {
        self.membership[territory.index()].map(|i| &self.continents[i])
    }
}

impl TryFrom<Blueprint> for Map {
    type Error = anyhow::Error;
    fn try_from(blueprint: Blueprint) -> Result<Self, Self::Error> {
        let n = blueprint.territories.len();
        anyhow::ensure!(n > 0, "map has no territories");
        anyhow::ensure!(n <= u8::MAX as usize, "map has {} territories, at most 255", n);
        let mut index = HashMap::with_capacity(n);
        for (i, region) in blueprint.territories.iter().enumerate() {
            if index.insert(region.name.as_str(), Territory::from(i)).is_some() {
                anyhow::bail!("duplicate territory {}", region.name);
            }
        }
        let resolve = |name: &str| {
            index
                .get(name)
                .copied()
                .ok_or_else(|| anyhow::anyhow!("unknown territory {}", name))
        };
        let mut neighbors = Vec::with_capacity(n);
        for region in blueprint.territories.iter() {
            let mut adjacent = region
                .neighbors
                .iter()
                .map(|name| resolve(name))
                .collect::<anyhow::Result<Vec<Territory>>>()?;
            adjacent.sort();
            adjacent.dedup();
            anyhow::ensure!(
                !adjacent.contains(&resolve(&region.name)?),
                "territory {} borders itself",
                region.name
            );
            neighbors.push(adjacent);
        }
        for (i, adjacent) in neighbors.iter().enumerate() {
            for other in adjacent.iter() {
                anyhow::ensure!(
                    neighbors[other.index()].contains(&Territory::from(i)),
                    "adjacency {} -> {} is not symmetric",
                    blueprint.territories[i].name,
                    blueprint.territories[other.index()].name
                );
            }
        }
        let mut membership = vec![None; n];
        let mut continents = Vec::with_capacity(blueprint.continents.len());
        for (c, province) in blueprint.continents.into_iter().enumerate() {
            let members = province
                .territories
                .iter()
                .map(|name| resolve(name))
                .collect::<anyhow::Result<Vec<Territory>>>()?;
            anyhow::ensure!(!members.is_empty(), "continent {} is empty", province.name);
            for member in members.iter() {
                anyhow::ensure!(
                    membership[member.index()].replace(c).is_none(),
                    "territory {} belongs to two continents",
                    blueprint.territories[member.index()].name
                );
            }
            continents.push(Continent::new(province.name, province.bonus, members));
        }
        Ok(Self {
            names: blueprint.territories.into_iter().map(|r| r.name).collect(),
            neighbors,
            continents,
            membership,
        })
    }
}

impl From<&Map> for Blueprint {
    fn from(map: &Map) -> Self {
        Self {
            territories: map
                .territories()
                .map(|t| super::Region {
                    name: map.name(t).to_string(),
                    neighbors: map
                        .neighbors(t)
                        .iter()
                        .map(|n| map.name(*n).to_string())
                        .collect(),
                })
                .collect(),
            continents: map
                .continents()
                .iter()
                .map(|c| super::Province {
                    name: c.name().to_string(),
                    bonus: c.bonus(),
                    territories: c
                        .territories()
                        .iter()
                        .map(|t| map.name(*t).to_string())
                        .collect(),
                })
                .collect(),
        }
    }
}
