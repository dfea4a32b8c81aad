//! Lookups: breeds, veterinarians, groomers.

use store::models::{Breed, BreedCatalog, Professional, ProfessionalKind, ProfessionalProfile};

use crate::client::{ApiRequest, HttpBackend};
use crate::error::ApiError;
use crate::wire;

/// `GET /user/auth/getBreed`, grouped by species.
pub async fn fetch_breeds<B: HttpBackend>(backend: &B) -> Result<BreedCatalog, ApiError> {
    let value = backend.send(ApiRequest::get("/user/auth/getBreed")).await?;
    let breeds: Vec<Breed> = wire::list(value)?;
    Ok(BreedCatalog::from(breeds))
}

async fn fetch_professionals<B: HttpBackend>(
    backend: &B,
    kind: ProfessionalKind,
) -> Result<Vec<Professional>, ApiError> {
    let path = match kind {
        ProfessionalKind::Vet => "/user/vet/get",
        ProfessionalKind::Groomer => "/user/groomer/get",
    };
    let profiles: Vec<ProfessionalProfile> = wire::list(backend.send(ApiRequest::get(path)).await?)?;
    Ok(profiles
        .into_iter()
        .map(|profile| Professional::new(kind, profile))
        .collect())
}

/// `GET /user/vet/get`
pub async fn fetch_vets<B: HttpBackend>(backend: &B) -> Result<Vec<Professional>, ApiError> {
    fetch_professionals(backend, ProfessionalKind::Vet).await
}

/// `GET /user/groomer/get`
pub async fn fetch_groomers<B: HttpBackend>(backend: &B) -> Result<Vec<Professional>, ApiError> {
    fetch_professionals(backend, ProfessionalKind::Groomer).await
}
