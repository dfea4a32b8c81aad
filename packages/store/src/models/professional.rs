//! Veterinarians and groomers.
//!
//! The backend serves both through the same record shape and tells them apart
//! by role (3 = vet, 4 = groomer). On the client they are a sum type,
//! [`Professional`], with [`Practitioner`] as the shared display surface.

use serde::{Deserialize, Serialize};

use super::user::Role;

/// Rating shown when the backend has none for a professional.
pub const DEFAULT_RATING: f32 = 4.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfessionalKind {
    Vet,
    Groomer,
}

impl ProfessionalKind {
    pub fn role(self) -> Role {
        match self {
            ProfessionalKind::Vet => Role::Vet,
            ProfessionalKind::Groomer => Role::Groomer,
        }
    }

    pub fn from_role_id(role_id: u8) -> Option<Self> {
        match Role::from_id(role_id)? {
            Role::Vet => Some(ProfessionalKind::Vet),
            Role::Groomer => Some(ProfessionalKind::Groomer),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProfessionalKind::Vet => "Veterinarian",
            ProfessionalKind::Groomer => "Groomer",
        }
    }
}

/// A professional record from the vet/groomer listing endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfessionalProfile {
    pub id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub specialization: Option<String>,
    pub experience_years: Option<u32>,
    pub status: Option<String>,
    pub rating: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Professional {
    Vet(ProfessionalProfile),
    Groomer(ProfessionalProfile),
}

impl Professional {
    pub fn new(kind: ProfessionalKind, profile: ProfessionalProfile) -> Self {
        match kind {
            ProfessionalKind::Vet => Professional::Vet(profile),
            ProfessionalKind::Groomer => Professional::Groomer(profile),
        }
    }

    pub fn kind(&self) -> ProfessionalKind {
        match self {
            Professional::Vet(_) => ProfessionalKind::Vet,
            Professional::Groomer(_) => ProfessionalKind::Groomer,
        }
    }

    pub fn profile(&self) -> &ProfessionalProfile {
        match self {
            Professional::Vet(p) | Professional::Groomer(p) => p,
        }
    }

    pub fn id(&self) -> i64 {
        self.profile().id
    }

    pub fn experience(&self) -> String {
        match self.profile().experience_years {
            Some(years) => format!("{years} years"),
            None => "—".to_string(),
        }
    }
}

/// Display data common to every kind of professional.
pub trait Practitioner {
    fn name(&self) -> &str;
    fn specialty(&self) -> &str;
    fn rating(&self) -> f32;
    fn is_available(&self) -> bool;

    fn avatar(&self) -> String {
        initials(self.name())
    }
}

impl Practitioner for Professional {
    fn name(&self) -> &str {
        &self.profile().name
    }

    fn specialty(&self) -> &str {
        self.profile().specialization.as_deref().unwrap_or("")
    }

    fn rating(&self) -> f32 {
        self.profile().rating.unwrap_or(DEFAULT_RATING)
    }

    fn is_available(&self) -> bool {
        self.profile().status.as_deref() == Some("available")
    }
}

/// Uppercase initials of the first and last name token.
///
/// A single-token name yields a single letter; an empty name yields nothing.
pub fn initials(name: &str) -> String {
    let mut tokens = name.split_whitespace();
    let Some(first) = tokens.next() else {
        return String::new();
    };
    let mut out: String = first.chars().take(1).collect();
    if let Some(last) = tokens.last() {
        out.extend(last.chars().take(1));
    }
    out.to_uppercase()
}

/// Profile sub-record nested in admin staff rows.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffProfile {
    pub specialization: Option<String>,
    pub experience_years: Option<u32>,
    pub status: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleRef {
    pub name: Option<String>,
}

/// A row of the admin professionals listing.
///
/// The vet or groomer profile arrives as a one-element array under `vets` or
/// `groomers`, depending on the role.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StaffMember {
    pub id: i64,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role_id: u8,
    pub roles: Option<RoleRef>,
    pub vets: Vec<StaffProfile>,
    pub groomers: Vec<StaffProfile>,
}

impl StaffMember {
    pub fn kind(&self) -> Option<ProfessionalKind> {
        ProfessionalKind::from_role_id(self.role_id)
    }

    pub fn staff_profile(&self) -> Option<&StaffProfile> {
        match self.kind()? {
            ProfessionalKind::Vet => self.vets.first(),
            ProfessionalKind::Groomer => self.groomers.first(),
        }
    }

    pub fn role_label(&self) -> &str {
        if let Some(name) = self.roles.as_ref().and_then(|r| r.name.as_deref()) {
            return name;
        }
        match self.kind() {
            Some(ProfessionalKind::Vet) => "Vet",
            _ => "Groomer",
        }
    }

    /// Flatten into a [`Professional`]; `None` for rows that are not vets or groomers.
    pub fn to_professional(&self) -> Option<Professional> {
        let kind = self.kind()?;
        let profile = self.staff_profile().cloned().unwrap_or_default();
        Some(Professional::new(
            kind,
            ProfessionalProfile {
                id: self.id,
                name: self.name.clone().unwrap_or_default(),
                email: self.email.clone(),
                phone: self.phone.clone(),
                specialization: profile.specialization,
                experience_years: profile.experience_years,
                status: profile.status,
                rating: None,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Amy Lee"), "AL");
        assert_eq!(initials("dr. john smith"), "DS");
        assert_eq!(initials("Cher"), "C");
        assert_eq!(initials("  "), "");
    }

    #[test]
    fn test_practitioner_defaults() {
        let vet = Professional::Vet(ProfessionalProfile {
            id: 1,
            name: "Dr. John Smith".into(),
            specialization: Some("Surgery".into()),
            status: Some("unavailable".into()),
            ..Default::default()
        });
        assert_eq!(vet.rating(), DEFAULT_RATING);
        assert!(!vet.is_available());
        assert_eq!(vet.specialty(), "Surgery");
        assert_eq!(vet.kind().role(), Role::Vet);
    }

    #[test]
    fn test_staff_member_flattens_nested_profile() {
        let row: StaffMember = serde_json::from_str(
            r#"{
                "id": 9, "name": "Amy Lee", "roleId": 4,
                "roles": {"name": "Groomer"},
                "groomers": [{"specialization": "Poodles", "experienceYears": 6, "status": "available"}]
            }"#,
        )
        .unwrap();

        assert_eq!(row.role_label(), "Groomer");
        let professional = row.to_professional().unwrap();
        assert_eq!(professional.kind(), ProfessionalKind::Groomer);
        assert_eq!(professional.experience(), "6 years");
        assert!(professional.is_available());

        let admin = StaffMember {
            role_id: 1,
            ..Default::default()
        };
        assert!(admin.to_professional().is_none());
    }
}
