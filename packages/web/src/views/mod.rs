mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod appointments;
pub use appointments::{Appointment, Appointments};

mod my_appointments;
pub use my_appointments::MyAppointments;

mod add_pets;
pub use add_pets::AddPets;

mod professionals;
pub use professionals::Professionals;

mod profile;
pub use profile::Profile;

mod staff;
pub use staff::{GroomerAppointments, GroomerProfile, VetAppointments, VetProfile};

mod manage_users;
pub use manage_users::ManageUsers;

mod manage_professionals;
pub use manage_professionals::ManageProfessionals;

mod not_found;
pub use not_found::NotFound;
