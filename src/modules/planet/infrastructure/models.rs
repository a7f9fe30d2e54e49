use crate::modules::planet::domain::{NewPlanet, Planet};
use crate::schema::planets;
use crate::shared::errors::{AppError, AppResult};
use diesel::prelude::*;

// For reading from database
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = planets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlanetModel {
    pub id: i64,
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub appearances: i32,
}

// For inserting new planets (id comes from BIGSERIAL)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = planets)]
pub struct NewPlanetModel {
    pub name: String,
    pub climate: String,
    pub terrain: String,
    pub appearances: i32,
}

impl PlanetModel {
    pub fn into_domain(self) -> Planet {
        Planet {
            id: self.id,
            name: self.name,
            climate: self.climate,
            terrain: self.terrain,
            // CHECK (appearances >= 0) keeps this lossless
            appearances: u32::try_from(self.appearances).unwrap_or(0),
        }
    }
}

impl TryFrom<&NewPlanet> for NewPlanetModel {
    type Error = AppError;

    fn try_from(planet: &NewPlanet) -> AppResult<Self> {
        let appearances = i32::try_from(planet.appearances).map_err(|_| {
            AppError::InvalidInput(format!(
                "appearance count {} does not fit the planets table",
                planet.appearances
            ))
        })?;

        Ok(Self {
            name: planet.name.clone(),
            climate: planet.climate.clone(),
            terrain: planet.terrain.clone(),
            appearances,
        })
    }
}
