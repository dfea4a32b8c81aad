//! # Appointment wizard
//!
//! Booking an appointment is a strictly linear four-step form:
//!
//! | Step | Collects | Valid when |
//! |------|----------|------------|
//! | 1 [`Step::SelectPet`] | pet | `pet_id` set |
//! | 2 [`Step::SelectType`] | appointment type | `appointment_type` non-empty |
//! | 3 [`Step::DateTime`] | date, time slot | both non-empty |
//! | 4 [`Step::SelectProfessional`] | vet or groomer | `professional_id` set |
//!
//! [`AppointmentWizard::next`] only advances past a valid step;
//! [`AppointmentWizard::previous`] always retreats except on the first step.
//!
//! The professionals offered on step 4 depend on the appointment type: grooming
//! draws from the groomer list, every other known type from the vet list. The
//! candidate cards are recomputed whenever the type or either source list
//! changes, and narrowed by a free-text search over name and specialty.

use chrono::NaiveTime;
use thiserror::Error;

use crate::models::{
    CreateAppointmentRequest, Pet, Practitioner, Professional, ProfessionalKind, ServiceType,
    UserDetails,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Step {
    SelectPet = 1,
    SelectType = 2,
    DateTime = 3,
    SelectProfessional = 4,
}

impl Step {
    pub const ALL: [Step; 4] = [
        Step::SelectPet,
        Step::SelectType,
        Step::DateTime,
        Step::SelectProfessional,
    ];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::SelectPet => "Select Pet",
            Step::SelectType => "Appointment Type",
            Step::DateTime => "Date & Time",
            Step::SelectProfessional => "Choose Professional",
        }
    }

    fn following(self) -> Option<Step> {
        match self {
            Step::SelectPet => Some(Step::SelectType),
            Step::SelectType => Some(Step::DateTime),
            Step::DateTime => Some(Step::SelectProfessional),
            Step::SelectProfessional => None,
        }
    }

    fn preceding(self) -> Option<Step> {
        match self {
            Step::SelectPet => None,
            Step::SelectType => Some(Step::SelectPet),
            Step::DateTime => Some(Step::SelectType),
            Step::SelectProfessional => Some(Step::DateTime),
        }
    }
}

/// An entry of the appointment type catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AppointmentType {
    /// Value held in the draft.
    pub value: &'static str,
    /// Shown on the type card.
    pub label: &'static str,
    /// Sent to the backend as `appointmentType`.
    pub backend_label: &'static str,
    pub icon: &'static str,
    /// Which professionals can take this kind of appointment.
    pub kind: ProfessionalKind,
}

pub const APPOINTMENT_TYPES: &[AppointmentType] = &[
    AppointmentType {
        value: "veterinary",
        label: "Veterinary Consultation",
        backend_label: "veterinary consultation",
        icon: "🏥",
        kind: ProfessionalKind::Vet,
    },
    AppointmentType {
        value: "grooming",
        label: "Grooming Service",
        backend_label: "grooming service",
        icon: "✂️",
        kind: ProfessionalKind::Groomer,
    },
    AppointmentType {
        value: "vaccination",
        label: "Vaccination",
        backend_label: "vaccination",
        icon: "💉",
        kind: ProfessionalKind::Vet,
    },
    AppointmentType {
        value: "checkup",
        label: "General Check-up",
        backend_label: "general consultation",
        icon: "🩺",
        kind: ProfessionalKind::Vet,
    },
];

pub fn appointment_type(value: &str) -> Option<&'static AppointmentType> {
    APPOINTMENT_TYPES.iter().find(|t| t.value == value)
}

/// Bookable slots; the clinic closes between 1 and 2 PM.
pub const TIME_SLOTS: &[&str] = &[
    "09:00 AM", "09:30 AM", "10:00 AM", "10:30 AM", "11:00 AM", "11:30 AM", "12:00 PM",
    "12:30 PM", "02:00 PM", "02:30 PM", "03:00 PM", "03:30 PM", "04:00 PM", "04:30 PM",
    "05:00 PM", "05:30 PM",
];

/// Convert a 12-hour slot label (`"02:30 PM"`) to 24-hour `HH:MM` (`"14:30"`).
///
/// Anything that is not a 12-hour label is passed through trimmed.
pub fn to_24_hour(slot: &str) -> String {
    let slot = slot.trim();
    match NaiveTime::parse_from_str(slot, "%I:%M %p") {
        Ok(time) => time.format("%H:%M").to_string(),
        Err(_) => slot.to_string(),
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Please select a pet")]
    MissingPet,

    #[error("Please select a professional")]
    MissingProfessional,

    #[error("The selected professional is no longer available for this appointment type")]
    UnknownProfessional,
}

/// What the user has entered so far.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardDraft {
    pub appointment_type: String,
    pub date: String,
    pub time: String,
    pub professional_id: Option<i64>,
    pub pet_id: Option<i64>,
    pub description: String,
}

/// A professional as offered on the last step.
#[derive(Clone, Debug, PartialEq)]
pub struct ProfessionalCard {
    pub professional: Professional,
    pub rating: f32,
    pub avatar: String,
    pub available: bool,
    pub experience: String,
}

impl ProfessionalCard {
    fn new(professional: &Professional) -> Self {
        Self {
            rating: professional.rating(),
            avatar: professional.avatar(),
            available: professional.is_available(),
            experience: professional.experience(),
            professional: professional.clone(),
        }
    }

    pub fn id(&self) -> i64 {
        self.professional.id()
    }

    pub fn kind(&self) -> ProfessionalKind {
        self.professional.kind()
    }

    pub fn name(&self) -> &str {
        self.professional.name()
    }

    pub fn specialty(&self) -> &str {
        self.professional.specialty()
    }

    /// Case-insensitive substring match on name or specialty.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        term.is_empty()
            || self.name().to_lowercase().contains(&term)
            || self.specialty().to_lowercase().contains(&term)
    }
}

/// Pets offered on the first step: the account's full pet list when it has been
/// fetched, otherwise the single pet cached with the login snapshot.
pub fn pet_choices(details: Option<&UserDetails>, snapshot_pet: Option<&Pet>) -> Vec<Pet> {
    match details {
        Some(details) if !details.pets.is_empty() => details.pets.clone(),
        _ => snapshot_pet.cloned().into_iter().collect(),
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppointmentWizard {
    step: Step,
    draft: WizardDraft,
    search_term: String,
    vets: Vec<Professional>,
    groomers: Vec<Professional>,
    candidates: Vec<ProfessionalCard>,
}

impl Default for AppointmentWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl AppointmentWizard {
    pub fn new() -> Self {
        Self {
            step: Step::SelectPet,
            draft: WizardDraft::default(),
            search_term: String::new(),
            vets: Vec::new(),
            groomers: Vec::new(),
            candidates: Vec::new(),
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn draft(&self) -> &WizardDraft {
        &self.draft
    }

    pub fn set_pet(&mut self, pet_id: Option<i64>) {
        self.draft.pet_id = pet_id;
    }

    pub fn set_appointment_type(&mut self, value: impl Into<String>) {
        self.draft.appointment_type = value.into();
        self.recompute_candidates();
    }

    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
    }

    pub fn set_time(&mut self, time: impl Into<String>) {
        self.draft.time = time.into();
    }

    pub fn set_professional(&mut self, professional_id: Option<i64>) {
        self.draft.professional_id = professional_id;
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Replace the source lists after a vets/groomers fetch settles.
    pub fn refresh_candidates(&mut self, vets: Vec<Professional>, groomers: Vec<Professional>) {
        self.vets = vets;
        self.groomers = groomers;
        self.recompute_candidates();
    }

    fn recompute_candidates(&mut self) {
        let source = match appointment_type(&self.draft.appointment_type).map(|t| t.kind) {
            Some(ProfessionalKind::Vet) => &self.vets,
            Some(ProfessionalKind::Groomer) => &self.groomers,
            None => {
                self.candidates.clear();
                return;
            }
        };
        self.candidates = source.iter().map(ProfessionalCard::new).collect();
    }

    /// Every professional eligible for the chosen type.
    pub fn candidates(&self) -> &[ProfessionalCard] {
        &self.candidates
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    /// Candidates matching the current search term.
    pub fn searched(&self) -> Vec<&ProfessionalCard> {
        self.candidates
            .iter()
            .filter(|card| card.matches(&self.search_term))
            .collect()
    }

    pub fn selected_professional(&self) -> Option<&ProfessionalCard> {
        let id = self.draft.professional_id?;
        self.candidates.iter().find(|card| card.id() == id)
    }

    pub fn is_step_valid(&self) -> bool {
        let draft = &self.draft;
        match self.step {
            Step::SelectPet => draft.pet_id.is_some(),
            Step::SelectType => !draft.appointment_type.is_empty(),
            Step::DateTime => !draft.date.is_empty() && !draft.time.is_empty(),
            Step::SelectProfessional => draft.professional_id.is_some(),
        }
    }

    /// Advance one step if the current one is complete. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if !self.is_step_valid() {
            return false;
        }
        match self.step.following() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn previous(&mut self) -> bool {
        match self.step.preceding() {
            Some(step) => {
                self.step = step;
                true
            }
            None => false,
        }
    }

    pub fn is_last_step(&self) -> bool {
        self.step == Step::SelectProfessional
    }

    /// Assemble the create-appointment body from the draft.
    pub fn build_request(&self) -> Result<CreateAppointmentRequest, WizardError> {
        let pet_id = self.draft.pet_id.ok_or(WizardError::MissingPet)?;
        if self.draft.professional_id.is_none() {
            return Err(WizardError::MissingProfessional);
        }
        let professional = self
            .selected_professional()
            .ok_or(WizardError::UnknownProfessional)?;

        let service_type = if self.draft.appointment_type == "grooming" {
            ServiceType::Grooming
        } else {
            ServiceType::Vet
        };
        let appointment_type = appointment_type(&self.draft.appointment_type)
            .map(|t| t.backend_label.to_string())
            .unwrap_or_else(|| self.draft.appointment_type.clone());
        let description = Some(self.draft.description.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        let (vet_id, groomer_id) = match professional.kind() {
            ProfessionalKind::Vet => (Some(professional.id()), None),
            ProfessionalKind::Groomer => (None, Some(professional.id())),
        };

        Ok(CreateAppointmentRequest {
            pet_id,
            service_type,
            appointment_type,
            appointment_date: self.draft.date.clone(),
            time: to_24_hour(&self.draft.time),
            description,
            vet_id,
            groomer_id,
        })
    }

    /// Back to an empty draft on step 1. The loaded professionals are kept.
    pub fn reset(&mut self) {
        self.step = Step::SelectPet;
        self.draft = WizardDraft::default();
        self.search_term.clear();
        self.candidates.clear();
    }
}
