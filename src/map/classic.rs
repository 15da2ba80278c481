use super::blueprint::Blueprint;
use super::blueprint::Province;
use super::blueprint::Region;
use super::map::Map;
use crate::Armies;
use std::sync::Arc;
use std::sync::LazyLock;

/// The standard world board, built once on first use.
pub static CLASSIC: LazyLock<Arc<Map>> = LazyLock::new(|| {
    Arc::new(Map::try_from(classic()).expect("classic board is well formed"))
});

const TERRITORIES: [(&str, &[&str]); 42] = [
    // north america
    ("alaska", &["alberta", "northwest_territory", "kamchatka"]),
    ("alberta", &["alaska", "northwest_territory", "ontario", "western_united_states"]),
    ("central_america", &["eastern_united_states", "western_united_states", "venezuela"]),
    ("eastern_united_states", &["central_america", "ontario", "quebec", "western_united_states"]),
    ("greenland", &["northwest_territory", "ontario", "quebec", "iceland"]),
    ("northwest_territory", &["alaska", "alberta", "greenland", "ontario"]),
    ("ontario", &["alberta", "eastern_united_states", "greenland", "northwest_territory", "quebec", "western_united_states"]),
    ("quebec", &["eastern_united_states", "greenland", "ontario"]),
    ("western_united_states", &["alberta", "central_america", "eastern_united_states", "ontario"]),
    // south america
    ("argentina", &["brazil", "peru"]),
    ("brazil", &["argentina", "peru", "venezuela", "north_africa"]),
    ("peru", &["argentina", "brazil", "venezuela"]),
    ("venezuela", &["brazil", "peru", "central_america"]),
    // europe
    ("great_britain", &["iceland", "northern_europe", "scandinavia", "western_europe"]),
    ("iceland", &["great_britain", "scandinavia", "greenland"]),
    ("northern_europe", &["great_britain", "scandinavia", "southern_europe", "ukraine", "western_europe"]),
    ("scandinavia", &["great_britain", "iceland", "northern_europe", "ukraine"]),
    ("southern_europe", &["northern_europe", "ukraine", "western_europe", "egypt", "north_africa", "middle_east"]),
    ("ukraine", &["northern_europe", "scandinavia", "southern_europe", "afghanistan", "middle_east", "ural"]),
    ("western_europe", &["great_britain", "northern_europe", "southern_europe", "north_africa"]),
    // africa
    ("congo", &["east_africa", "north_africa", "south_africa"]),
    ("east_africa", &["congo", "egypt", "madagascar", "north_africa", "south_africa", "middle_east"]),
    ("egypt", &["east_africa", "north_africa", "southern_europe", "middle_east"]),
    ("madagascar", &["east_africa", "south_africa"]),
    ("north_africa", &["congo", "east_africa", "egypt", "brazil", "southern_europe", "western_europe"]),
    ("south_africa", &["congo", "east_africa", "madagascar"]),
    // asia
    ("afghanistan", &["china", "india", "middle_east", "ural", "ukraine"]),
    ("china", &["afghanistan", "india", "mongolia", "siam", "siberia", "ural"]),
    ("india", &["afghanistan", "china", "middle_east", "siam"]),
    ("irkutsk", &["kamchatka", "mongolia", "siberia", "yakutsk"]),
    ("japan", &["kamchatka", "mongolia"]),
    ("kamchatka", &["irkutsk", "japan", "mongolia", "yakutsk", "alaska"]),
    ("middle_east", &["afghanistan", "india", "southern_europe", "ukraine", "egypt", "east_africa"]),
    ("mongolia", &["china", "irkutsk", "japan", "kamchatka", "siberia"]),
    ("siam", &["china", "india", "indonesia"]),
    ("siberia", &["china", "irkutsk", "mongolia", "ural", "yakutsk"]),
    ("ural", &["afghanistan", "china", "siberia", "ukraine"]),
    ("yakutsk", &["irkutsk", "kamchatka", "siberia"]),
    // australia
    ("eastern_australia", &["new_guinea", "western_australia"]),
    ("indonesia", &["new_guinea", "western_australia", "siam"]),
    ("new_guinea", &["eastern_australia", "indonesia", "western_australia"]),
    ("western_australia", &["eastern_australia", "indonesia", "new_guinea"]),
];

const CONTINENTS: [(&str, Armies, &[&str]); 6] = [
    ("north_america", 5, &["alaska", "alberta", "central_america", "eastern_united_states", "greenland", "northwest_territory", "ontario", "quebec", "western_united_states"]),
    ("south_america", 2, &["argentina", "brazil", "peru", "venezuela"]),
    ("europe", 5, &["great_britain", "iceland", "northern_europe", "scandinavia", "southern_europe", "ukraine", "western_europe"]),
    ("africa", 3, &["congo", "east_africa", "egypt", "madagascar", "north_africa", "south_africa"]),
    ("asia", 7, &["afghanistan", "china", "india", "irkutsk", "japan", "kamchatka", "middle_east", "mongolia", "siam", "siberia", "ural", "yakutsk"]),
    ("australia", 2, &["eastern_australia", "indonesia", "new_guinea", "western_australia"]),
];

/// Blueprint of the standard world board.
pub fn classic() -> Blueprint {
    Blueprint {
        territories: TERRITORIES
            .iter()
            .map(|(name, neighbors)| Region {
                name: name.to_string(),
                neighbors: neighbors.iter().map(|n| n.to_string()).collect(),
            })
            .collect(),
        continents: CONTINENTS
            .iter()
            .map(|(name, bonus, members)| Province {
                name: name.to_string(),
                bonus: *bonus,
                territories: members.iter().map(|m| m.to_string()).collect(),
            })
            .collect(),
    }
}
