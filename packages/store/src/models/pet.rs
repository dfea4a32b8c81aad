//! Pets and the breed catalog used by registration and the add-pet form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A breed row from the breed lookup endpoint.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Breed {
    pub id: i64,
    pub name: String,
    pub species: String,
}

/// A pet owned by a user.
///
/// Depending on the endpoint the species and breed arrive either flat or nested
/// under `breeds`; [`Pet::species_name`] and [`Pet::breed_name`] hide that.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Pet {
    pub id: i64,
    pub name: String,
    pub species: Option<String>,
    pub breed: Option<String>,
    pub breeds: Option<Breed>,
    pub age: Option<f64>,
    pub gender: Option<String>,
    pub weight: Option<f64>,
}

impl Pet {
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "Pet"
        } else {
            &self.name
        }
    }

    pub fn species_name(&self) -> &str {
        self.breeds
            .as_ref()
            .map(|b| b.species.as_str())
            .or(self.species.as_deref())
            .unwrap_or("Unknown")
    }

    pub fn breed_name(&self) -> &str {
        self.breeds
            .as_ref()
            .map(|b| b.name.as_str())
            .or(self.breed.as_deref())
            .unwrap_or("Unknown")
    }
}

/// Breeds grouped for the species → breed cascading selects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BreedCatalog {
    pub breeds: Vec<Breed>,
    /// Distinct species, sorted.
    pub species: Vec<String>,
    /// Breeds per species, each group sorted by name.
    pub by_species: BTreeMap<String, Vec<Breed>>,
}

impl BreedCatalog {
    pub fn breeds_for(&self, species: &str) -> &[Breed] {
        self.by_species
            .get(species)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl From<Vec<Breed>> for BreedCatalog {
    fn from(breeds: Vec<Breed>) -> Self {
        let mut by_species: BTreeMap<String, Vec<Breed>> = BTreeMap::new();
        for breed in &breeds {
            by_species
                .entry(breed.species.clone())
                .or_default()
                .push(breed.clone());
        }
        for group in by_species.values_mut() {
            group.sort_by(|a, b| a.name.cmp(&b.name));
        }
        let species = by_species.keys().cloned().collect();
        Self {
            breeds,
            species,
            by_species,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breed(id: i64, name: &str, species: &str) -> Breed {
        Breed {
            id,
            name: name.to_string(),
            species: species.to_string(),
        }
    }

    #[test]
    fn test_catalog_groups_and_sorts() {
        let catalog = BreedCatalog::from(vec![
            breed(1, "Poodle", "Dog"),
            breed(2, "Siamese", "Cat"),
            breed(3, "Beagle", "Dog"),
            breed(4, "Persian", "Cat"),
        ]);

        assert_eq!(catalog.species, vec!["Cat", "Dog"]);
        let dogs: Vec<_> = catalog.breeds_for("Dog").iter().map(|b| b.id).collect();
        assert_eq!(dogs, vec![3, 1]);
        assert!(catalog.breeds_for("Parrot").is_empty());
        assert_eq!(catalog.breeds.len(), 4);
    }

    #[test]
    fn test_pet_prefers_nested_breed() {
        let pet: Pet = serde_json::from_str(
            r#"{"id": 7, "name": "Rex", "species": "dog", "breeds": {"id": 3, "name": "Beagle", "species": "Dog"}}"#,
        )
        .unwrap();
        assert_eq!(pet.species_name(), "Dog");
        assert_eq!(pet.breed_name(), "Beagle");

        let bare = Pet::default();
        assert_eq!(bare.display_name(), "Pet");
        assert_eq!(bare.species_name(), "Unknown");
    }
}
