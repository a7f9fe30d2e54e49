use serde::{Deserialize, Serialize};

/// Page of `GET /planets/?search=`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapiPlanetListResponse {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<SwapiPlanet>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapiPlanet {
    pub name: String,
    #[serde(default)]
    pub films: Vec<String>,
    pub climate: Option<String>,
    pub terrain: Option<String>,
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_search_page_and_ignores_unknown_fields() {
        let body = r#"{
            "count": 1,
            "next": null,
            "previous": null,
            "results": [{
                "name": "Tatooine",
                "rotation_period": "23",
                "climate": "arid",
                "terrain": "desert",
                "films": [
                    "https://swapi.dev/api/films/1/",
                    "https://swapi.dev/api/films/3/"
                ],
                "url": "https://swapi.dev/api/planets/1/"
            }]
        }"#;

        let page: SwapiPlanetListResponse = serde_json::from_str(body).unwrap();

        assert_eq!(page.count, 1);
        assert_eq!(page.results[0].name, "Tatooine");
        assert_eq!(page.results[0].films.len(), 2);
    }

    #[test]
    fn missing_films_is_empty() {
        let planet: SwapiPlanet = serde_json::from_str(r#"{"name":"Hoth"}"#).unwrap();
        assert!(planet.films.is_empty());
    }
}
