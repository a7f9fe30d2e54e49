/// Lookup of a single planet by one of its unique keys
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindPlanetQuery {
    ById(i64),
    ByName(String),
}

impl FindPlanetQuery {
    /// Route a raw path segment: numeric keys are identifiers, anything else is a name
    pub fn from_key(key: &str) -> Self {
        match key.parse::<i64>() {
            Ok(id) => FindPlanetQuery::ById(id),
            Err(_) => FindPlanetQuery::ByName(key.to_string()),
        }
    }
}
