/// Display name used for world/environmental kills, where there is no
/// attacker id at all.
pub const WORLD: &str = "world";

/// Maps a raw steam id to a human-readable name.
///
/// The engine never fails on an unknown id, it falls back to the raw id, so
/// implementations only need to cover the players they actually know.
pub trait NameResolver {
    fn resolve(&self, steam_id: &str) -> Option<&str>;
}

impl NameResolver for std::collections::HashMap<String, String> {
    fn resolve(&self, steam_id: &str) -> Option<&str> {
        self.get(steam_id).map(|name| name.as_str())
    }
}

/// Resolver without any mappings, every player shows up as their raw id.
pub struct RawIds;

impl NameResolver for RawIds {
    fn resolve(&self, _steam_id: &str) -> Option<&str> {
        None
    }
}

pub fn display_name(names: &dyn NameResolver, steam_id: Option<&str>) -> String {
    match steam_id {
        Some(id) => names.resolve(id).unwrap_or(id).to_owned(),
        None => WORLD.to_owned(),
    }
}
