//! # Client-side form validation
//!
//! Each form holds the raw strings bound to its inputs. `validate` checks them
//! in field order and returns either the first problem, as a
//! [`ValidationError`] whose `Display` is the inline message, or the request
//! body ready to dispatch. A form that fails validation never reaches the
//! network.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{
    LoginRequest, NewPetRequest, Professional, ProfessionalKind, ProfessionalRequest,
    RegisterRequest, User, UserUpdateRequest,
};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap_or_else(|e| panic!("email pattern: {e}"))
});

static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{1,4}[)]?[-\s.]?[(]?[0-9]{1,4}[)]?[-\s.]?[0-9]{1,9}$")
        .unwrap_or_else(|e| panic!("phone pattern: {e}"))
});

pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PET_AGE: f64 = 50.0;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter your full name")]
    MissingName,
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please enter your phone number")]
    MissingPhone,
    #[error("Please enter a valid phone number")]
    InvalidPhone,
    #[error("Please enter a password")]
    MissingPassword,
    #[error("Password must be at least 6 characters long")]
    ShortPassword,
    #[error("Please select a pet species")]
    MissingSpecies,
    #[error("Please select a breed")]
    MissingBreed,
    #[error("Please enter your pet's name")]
    MissingPetName,
    #[error("Please enter your pet's age")]
    MissingAge,
    #[error("Please enter a valid age (must be 0 or greater)")]
    InvalidAge,
    #[error("Please enter a realistic age (maximum 50 years)")]
    UnrealisticAge,
    #[error("Please enter a valid weight")]
    InvalidWeight,
    #[error("Please choose a veterinarian or groomer role")]
    InvalidRole,
    #[error("Please enter years of experience as a whole number")]
    InvalidExperience,
}

fn required(value: &str, missing: ValidationError) -> Result<&str, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(missing)
    } else {
        Ok(value)
    }
}

fn email(value: &str) -> Result<String, ValidationError> {
    let value = required(value, ValidationError::MissingEmail)?;
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(value.to_lowercase())
}

fn phone(value: &str) -> Result<String, ValidationError> {
    let value = required(value, ValidationError::MissingPhone)?;
    if !PHONE_RE.is_match(value) {
        return Err(ValidationError::InvalidPhone);
    }
    Ok(value.to_string())
}

fn password(value: &str) -> Result<String, ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::MissingPassword);
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::ShortPassword);
    }
    Ok(value.to_string())
}

fn breed_id(value: &str) -> Result<i64, ValidationError> {
    required(value, ValidationError::MissingBreed)?
        .parse()
        .map_err(|_| ValidationError::MissingBreed)
}

/// Pet age in years: a number in `[0, 50]`.
pub fn pet_age(value: &str) -> Result<f64, ValidationError> {
    let age: f64 = required(value, ValidationError::MissingAge)?
        .parse()
        .map_err(|_| ValidationError::InvalidAge)?;
    if !age.is_finite() || age < 0.0 {
        return Err(ValidationError::InvalidAge);
    }
    if age > MAX_PET_AGE {
        return Err(ValidationError::UnrealisticAge);
    }
    Ok(age)
}

/// Customer sign-up, which also registers the first pet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub species: String,
    /// Breed id as selected from the breed list.
    pub breed: String,
    pub age: String,
}

impl RegistrationForm {
    /// Changing species invalidates the selected breed.
    pub fn set_species(&mut self, species: impl Into<String>) {
        self.species = species.into();
        self.breed.clear();
    }

    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        let name = required(&self.name, ValidationError::MissingName)?.to_string();
        let email = email(&self.email)?;
        let phone = phone(&self.phone)?;
        let password = password(&self.password)?;
        required(&self.species, ValidationError::MissingSpecies)?;
        let breed_id = breed_id(&self.breed)?;
        let age = pet_age(&self.age)?;

        Ok(RegisterRequest {
            name,
            email,
            phone,
            password,
            breed_id,
            age,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<LoginRequest, ValidationError> {
        let email = required(&self.email, ValidationError::MissingEmail)?.to_string();
        if self.password.is_empty() {
            return Err(ValidationError::MissingPassword);
        }
        Ok(LoginRequest {
            email,
            password: self.password.clone(),
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PetForm {
    pub name: String,
    pub species: String,
    pub breed: String,
    pub age: String,
    pub gender: String,
    pub weight: String,
}

impl PetForm {
    pub fn set_species(&mut self, species: impl Into<String>) {
        self.species = species.into();
        self.breed.clear();
    }

    pub fn validate(&self) -> Result<NewPetRequest, ValidationError> {
        let name = required(&self.name, ValidationError::MissingPetName)?.to_string();
        let breed_id = breed_id(&self.breed)?;
        let age = pet_age(&self.age)?;

        let weight = match self.weight.trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(w) if w.is_finite() && w > 0.0 => Some(w),
                _ => return Err(ValidationError::InvalidWeight),
            },
        };
        let gender = Some(self.gender.trim())
            .filter(|g| !g.is_empty())
            .map(str::to_string);

        Ok(NewPetRequest {
            name,
            breed_id,
            age,
            gender,
            weight,
        })
    }
}

/// Admin create/edit dialog for a vet or groomer.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfessionalForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Only asked for, and required, when creating.
    pub password: String,
    pub role_id: u8,
    pub specialization: String,
    pub experience_years: String,
    pub status: String,
}

impl Default for ProfessionalForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            role_id: ProfessionalKind::Vet.role().id(),
            specialization: String::new(),
            experience_years: String::new(),
            status: "available".to_string(),
        }
    }
}

impl ProfessionalForm {
    /// Prefill the edit dialog from an existing row.
    pub fn from_professional(professional: &Professional) -> Self {
        let profile = professional.profile();
        Self {
            name: profile.name.clone(),
            email: profile.email.clone().unwrap_or_default(),
            phone: profile.phone.clone().unwrap_or_default(),
            password: String::new(),
            role_id: professional.kind().role().id(),
            specialization: profile.specialization.clone().unwrap_or_default(),
            experience_years: profile
                .experience_years
                .map(|y| y.to_string())
                .unwrap_or_default(),
            status: profile
                .status
                .clone()
                .unwrap_or_else(|| "available".to_string()),
        }
    }

    pub fn validate(&self, creating: bool) -> Result<ProfessionalRequest, ValidationError> {
        let name = required(&self.name, ValidationError::MissingName)?.to_string();
        let email = email(&self.email)?;
        let phone = required(&self.phone, ValidationError::MissingPhone)?.to_string();
        let password = if creating {
            Some(password(&self.password)?)
        } else {
            None
        };
        if ProfessionalKind::from_role_id(self.role_id).is_none() {
            return Err(ValidationError::InvalidRole);
        }
        let experience_years = match self.experience_years.trim() {
            "" => None,
            raw => Some(raw.parse().map_err(|_| ValidationError::InvalidExperience)?),
        };

        Ok(ProfessionalRequest {
            name,
            email,
            phone,
            password,
            role_id: self.role_id,
            specialization: self.specialization.trim().to_string(),
            experience_years,
            status: self.status.clone(),
        })
    }
}

/// Admin edit dialog for a customer account.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub status: String,
}

impl UserForm {
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            status: user.status.clone().unwrap_or_else(|| "active".to_string()),
        }
    }

    pub fn validate(&self) -> Result<UserUpdateRequest, ValidationError> {
        Ok(UserUpdateRequest {
            name: required(&self.name, ValidationError::MissingName)?.to_string(),
            email: email(&self.email)?,
            phone: self.phone.trim().to_string(),
            status: self.status.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            name: " Ann Ray ".into(),
            email: "Ann@Example.COM".into(),
            phone: "+1 555 1234567".into(),
            password: "secret1".into(),
            species: "Dog".into(),
            breed: "12".into(),
            age: "3.5".into(),
        }
    }

    #[test]
    fn test_registration_builds_request() {
        let request = registration().validate().unwrap();
        assert_eq!(request.name, "Ann Ray");
        assert_eq!(request.email, "ann@example.com");
        assert_eq!(request.breed_id, 12);
        assert_eq!(request.age, 3.5);
    }

    #[test]
    fn test_age_boundaries() {
        let mut form = registration();
        form.age = "50".into();
        assert!(form.validate().is_ok());

        form.age = "50.01".into();
        assert_eq!(form.validate(), Err(ValidationError::UnrealisticAge));

        form.age = "-1".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));

        form.age = "old".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidAge));

        form.age = "0".into();
        assert!(form.validate().is_ok());

        form.age = "".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingAge));

        assert_ne!(
            ValidationError::UnrealisticAge.to_string(),
            ValidationError::InvalidAge.to_string()
        );
    }

    #[test]
    fn test_registration_checks_fields_in_order() {
        let mut form = registration();
        form.name = "  ".into();
        form.email = "bad".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingName));

        let mut form = registration();
        form.email = "ann@example".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

        let mut form = registration();
        form.phone = "call me".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidPhone));

        let mut form = registration();
        form.password = "12345".into();
        assert_eq!(form.validate(), Err(ValidationError::ShortPassword));
        assert_eq!(
            ValidationError::ShortPassword.to_string(),
            "Password must be at least 6 characters long"
        );
    }

    #[test]
    fn test_species_change_clears_breed() {
        let mut form = registration();
        form.set_species("Cat");
        assert_eq!(form.validate(), Err(ValidationError::MissingBreed));
    }

    #[test]
    fn test_phone_patterns() {
        for ok in ["5551234", "555-123-4567", "+1 555 1234567", "(02) 1234.5678"] {
            assert!(PHONE_RE.is_match(ok), "{ok}");
        }
        for bad in ["", "12-34-56-78-90", "phone", "+1 555 123 4567 8"] {
            assert!(!PHONE_RE.is_match(bad), "{bad}");
        }
    }

    #[test]
    fn test_login_requires_both_fields() {
        let form = LoginForm {
            email: "a@b.co".into(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingPassword));
        let form = LoginForm {
            email: String::new(),
            password: "x".into(),
        };
        assert_eq!(form.validate(), Err(ValidationError::MissingEmail));
    }

    #[test]
    fn test_pet_form_weight() {
        let mut form = PetForm {
            name: "Rex".into(),
            species: "Dog".into(),
            breed: "4".into(),
            age: "2".into(),
            ..Default::default()
        };
        let request = form.validate().unwrap();
        assert_eq!(request.weight, None);
        assert_eq!(request.gender, None);

        form.weight = "0".into();
        assert_eq!(form.validate(), Err(ValidationError::InvalidWeight));
        form.weight = "12.5".into();
        assert_eq!(form.validate().unwrap().weight, Some(12.5));
    }

    #[test]
    fn test_professional_form_password_only_on_create() {
        let form = ProfessionalForm {
            name: "Amy Lee".into(),
            email: "amy@petperfect.test".into(),
            phone: "5551234".into(),
            role_id: 4,
            experience_years: "6".into(),
            ..Default::default()
        };
        assert_eq!(form.validate(true), Err(ValidationError::MissingPassword));

        let request = form.validate(false).unwrap();
        assert_eq!(request.password, None);
        assert_eq!(request.experience_years, Some(6));
        assert_eq!(request.status, "available");

        let admin = ProfessionalForm {
            role_id: 1,
            ..form.clone()
        };
        assert_eq!(admin.validate(false), Err(ValidationError::InvalidRole));
    }

    #[test]
    fn test_edit_dialog_prefill() {
        use crate::models::ProfessionalProfile;

        let groomer = Professional::Groomer(ProfessionalProfile {
            id: 3,
            name: "Amy Lee".into(),
            email: Some("amy@petperfect.test".into()),
            phone: Some("5551234".into()),
            experience_years: Some(6),
            ..Default::default()
        });
        let form = ProfessionalForm::from_professional(&groomer);
        assert_eq!(form.role_id, 4);
        assert_eq!(form.experience_years, "6");
        assert_eq!(form.status, "available");
        assert!(form.validate(false).is_ok());

        let user = User {
            name: "Ann Ray".into(),
            email: "ann@example.com".into(),
            ..Default::default()
        };
        let request = UserForm::from_user(&user).validate().unwrap();
        assert_eq!(request.status, "active");
        assert_eq!(request.phone, "");
    }
}
