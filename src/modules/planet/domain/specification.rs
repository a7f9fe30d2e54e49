/// Composable filter over planets (Specification Pattern)
///
/// Each criterion is optional and an absent one matches everything, so
/// `PlanetSpecification::by_name(None).and(PlanetSpecification::by_id(None))`
/// is the unfiltered listing. Criteria are combined with logical AND; the
/// same kind of criterion may appear more than once and all of them must hold.
use super::entities::planet::Planet;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanetSpecification {
    ids: Vec<i64>,
    name_fragments: Vec<String>,
}

impl PlanetSpecification {
    /// Matches every planet
    pub fn all() -> Self {
        Self::default()
    }

    /// Exact identifier match; `None` is a no-op
    pub fn by_id(id: Option<i64>) -> Self {
        Self {
            ids: id.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Case-insensitive substring match on the name; `None` is a no-op
    pub fn by_name<S: Into<String>>(fragment: Option<S>) -> Self {
        Self {
            name_fragments: fragment.map(Into::into).into_iter().collect(),
            ..Self::default()
        }
    }

    /// Conjunction of both specifications
    pub fn and(mut self, other: PlanetSpecification) -> Self {
        self.ids.extend(other.ids);
        self.name_fragments.extend(other.name_fragments);
        self
    }

    pub fn is_unfiltered(&self) -> bool {
        self.ids.is_empty() && self.name_fragments.is_empty()
    }

    pub fn ids(&self) -> &[i64] {
        &self.ids
    }

    pub fn name_fragments(&self) -> &[String] {
        &self.name_fragments
    }

    /// Evaluate against a planet held in memory
    pub fn matches(&self, planet: &Planet) -> bool {
        let name = planet.name.to_lowercase();

        self.ids.iter().all(|id| planet.id == *id)
            && self
                .name_fragments
                .iter()
                .all(|fragment| name.contains(&fragment.to_lowercase()))
    }
}

/// `ILIKE` pattern for a name fragment with LIKE wildcards escaped
pub fn like_pattern(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len() + 2);
    escaped.push('%');
    for c in fragment.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn planet(id: i64, name: &str) -> Planet {
        Planet {
            id,
            name: name.to_string(),
            climate: "temperate".to_string(),
            terrain: "grasslands".to_string(),
            appearances: 0,
        }
    }

    #[test]
    fn absent_criteria_match_everything() {
        let spec = PlanetSpecification::by_name(None::<String>).and(PlanetSpecification::by_id(None));

        assert!(spec.is_unfiltered());
        assert!(spec.matches(&planet(1, "Tatooine")));
        assert_eq!(spec, PlanetSpecification::all());
    }

    #[test]
    fn name_fragment_is_case_insensitive_substring() {
        let spec = PlanetSpecification::by_name(Some("TATOO"));

        assert!(spec.matches(&planet(1, "Tatooine")));
        assert!(!spec.matches(&planet(2, "Alderaan")));
    }

    #[test]
    fn id_is_exact() {
        let spec = PlanetSpecification::by_id(Some(2));

        assert!(spec.matches(&planet(2, "Hoth")));
        assert!(!spec.matches(&planet(20, "Hoth")));
    }

    #[test]
    fn criteria_combine_with_and_in_any_order() {
        let tatooine = planet(1, "Tatooine");
        let by_name_first = PlanetSpecification::by_name(Some("tat")).and(PlanetSpecification::by_id(Some(1)));
        let by_id_first = PlanetSpecification::by_id(Some(1)).and(PlanetSpecification::by_name(Some("tat")));

        assert!(by_name_first.matches(&tatooine));
        assert!(by_id_first.matches(&tatooine));

        let mismatched = PlanetSpecification::by_name(Some("tat")).and(PlanetSpecification::by_id(Some(2)));
        assert!(!mismatched.matches(&tatooine));
    }

    #[test]
    fn repeated_fragments_must_all_hold() {
        let spec = PlanetSpecification::by_name(Some("ta")).and(PlanetSpecification::by_name(Some("ine")));

        assert!(spec.matches(&planet(1, "Tatooine")));
        assert!(!spec.matches(&planet(3, "Taris")));
    }

    #[test]
    fn like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("tat"), "%tat%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
