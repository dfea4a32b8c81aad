//! # Domain models shared by every page
//!
//! These types mirror the JSON the REST backend produces (camelCase keys) and are
//! deliberately lenient: every optional field defaults, so a partial record from
//! one endpoint still deserializes.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`user`] | [`User`], [`Role`], [`AccountSnapshot`], [`UserDetails`] |
//! | [`pet`] | [`Pet`], [`Breed`], [`BreedCatalog`] |
//! | [`professional`] | [`Professional`], [`ProfessionalProfile`], [`StaffMember`], [`Practitioner`] |
//! | [`appointment`] | [`Appointment`], [`AppointmentStatus`], [`AppointmentBucket`], [`ServiceType`] |
//! | [`requests`] | Request bodies sent to the backend |

pub mod appointment;
pub mod pet;
pub mod professional;
pub mod requests;
pub mod user;

pub use appointment::{Appointment, AppointmentBucket, AppointmentStatus, ServiceType};
pub use pet::{Breed, BreedCatalog, Pet};
pub use professional::{
    initials, Practitioner, Professional, ProfessionalKind, ProfessionalProfile, StaffMember,
    StaffProfile, DEFAULT_RATING,
};
pub use requests::{
    CreateAppointmentRequest, LoginRequest, NewPetRequest, ProfessionalRequest, RegisterRequest,
    UserUpdateRequest,
};
pub use user::{AccountSnapshot, Role, User, UserDetails};
