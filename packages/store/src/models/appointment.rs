//! Appointments and their lifecycle buckets.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::professional::{initials, ProfessionalProfile, DEFAULT_RATING};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Vet,
    Grooming,
}

/// Server-driven lifecycle state. The client only reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn label(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Confirmed => "Confirmed",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::Unknown => "Unknown",
        }
    }
}

/// The three per-status listings a customer can fetch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AppointmentBucket {
    Upcoming,
    Completed,
    Cancelled,
}

impl AppointmentBucket {
    pub const ALL: [AppointmentBucket; 3] = [
        AppointmentBucket::Upcoming,
        AppointmentBucket::Completed,
        AppointmentBucket::Cancelled,
    ];

    /// Last path segment of the listing endpoint.
    pub fn path_segment(self) -> &'static str {
        match self {
            AppointmentBucket::Upcoming => "upcoming",
            AppointmentBucket::Completed => "completed",
            AppointmentBucket::Cancelled => "cancelled",
        }
    }

    pub fn tab_label(self) -> &'static str {
        match self {
            AppointmentBucket::Upcoming => "Upcoming",
            AppointmentBucket::Completed => "Past",
            AppointmentBucket::Cancelled => "Cancelled",
        }
    }

    pub fn default_error(self) -> &'static str {
        match self {
            AppointmentBucket::Upcoming => "Failed to fetch upcoming appointments",
            AppointmentBucket::Completed => "Failed to fetch completed appointments",
            AppointmentBucket::Cancelled => "Failed to fetch cancelled appointments",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PetRef {
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: i64,
    #[serde(default)]
    pub pet_id: Option<i64>,
    #[serde(default)]
    pub service_type: Option<ServiceType>,
    #[serde(default)]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub appointment_date: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub vet_id: Option<i64>,
    #[serde(default)]
    pub groomer_id: Option<i64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<AppointmentStatus>,
    #[serde(default)]
    pub pet: Option<PetRef>,
    #[serde(default)]
    pub vet: Option<ProfessionalProfile>,
    #[serde(default)]
    pub groomer: Option<ProfessionalProfile>,
}

impl Appointment {
    fn professional(&self) -> Option<&ProfessionalProfile> {
        self.vet.as_ref().or(self.groomer.as_ref())
    }

    /// Type shown in lists: the booked type, or one derived from the service.
    pub fn display_type(&self) -> &str {
        if let Some(kind) = self.appointment_type.as_deref().filter(|t| !t.is_empty()) {
            return kind;
        }
        match self.service_type {
            Some(ServiceType::Vet) => "Veterinary Consultation",
            _ => "Grooming Service",
        }
    }

    pub fn professional_name(&self) -> &str {
        self.professional()
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Unknown")
    }

    pub fn professional_specialty(&self) -> &str {
        self.professional()
            .and_then(|p| p.specialization.as_deref())
            .unwrap_or("General Service")
    }

    pub fn professional_avatar(&self) -> String {
        initials(self.professional_name())
    }

    pub fn professional_rating(&self) -> f32 {
        self.professional()
            .and_then(|p| p.rating)
            .unwrap_or(DEFAULT_RATING)
    }

    pub fn pet_name(&self) -> &str {
        self.pet
            .as_ref()
            .and_then(|p| p.name.as_deref())
            .unwrap_or("Unknown Pet")
    }

    /// Long date such as "Sunday, March 1, 2026"; `N/A` when missing.
    pub fn formatted_date(&self) -> String {
        let Some(raw) = self.appointment_date.as_deref() else {
            return "N/A".to_string();
        };
        let day = raw.get(..10).unwrap_or(raw);
        match NaiveDate::parse_from_str(day, "%Y-%m-%d") {
            Ok(date) => date.format("%A, %B %-d, %Y").to_string(),
            Err(_) => raw.to_string(),
        }
    }

    /// Case-insensitive match against professional, type, and pet name.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.professional_name().to_lowercase().contains(&term)
            || self.display_type().to_lowercase().contains(&term)
            || self.pet_name().to_lowercase().contains(&term)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Appointment {
        serde_json::from_str(
            r#"{
                "id": 4, "petId": 7, "serviceType": "grooming",
                "appointmentDate": "2026-03-01T00:00:00.000Z", "time": "10:30",
                "status": "pending", "pet": {"name": "Rex"},
                "groomer": {"id": 3, "name": "Amy Lee", "specialization": "Poodles"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_display_helpers() {
        let appointment = sample();
        assert_eq!(appointment.display_type(), "Grooming Service");
        assert_eq!(appointment.professional_name(), "Amy Lee");
        assert_eq!(appointment.professional_avatar(), "AL");
        assert_eq!(appointment.pet_name(), "Rex");
        assert_eq!(appointment.formatted_date(), "Sunday, March 1, 2026");
        assert_eq!(appointment.status, Some(AppointmentStatus::Pending));
    }

    #[test]
    fn test_search_matches_pet_and_professional() {
        let appointment = sample();
        assert!(appointment.matches("rex"));
        assert!(appointment.matches("AMY"));
        assert!(appointment.matches(""));
        assert!(!appointment.matches("vaccination"));
    }

    #[test]
    fn test_unknown_status_is_tolerated() {
        let appointment: Appointment =
            serde_json::from_str(r#"{"id": 1, "status": "rescheduled"}"#).unwrap();
        assert_eq!(appointment.status, Some(AppointmentStatus::Unknown));
        assert_eq!(appointment.formatted_date(), "N/A");
        assert_eq!(appointment.pet_name(), "Unknown Pet");
    }
}
