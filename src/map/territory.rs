/// Index of a territory on its [`super::Map`].
///
/// Territories carry no data of their own. Names, neighbors, and continent
/// membership are looked up on the map that issued the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Territory(u8);

impl Territory {
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for Territory {
    fn from(index: usize) -> Self {
        debug_assert!(index <= u8::MAX as usize);
        Self(index as u8)
    }
}
impl From<Territory> for usize {
    fn from(territory: Territory) -> Self {
        territory.index()
    }
}

impl std::fmt::Display for Territory {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{:02}", self.0)
    }
}
