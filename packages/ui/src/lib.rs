//! This crate contains all shared UI for the workspace: the app-state context,
//! the dispatch helper that drives resource slices, and the components every
//! dashboard page reuses.

use dioxus::prelude::*;

pub const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

mod app_state;
pub use app_state::{use_app_state, use_services, AppStateProvider, Services};

mod dispatch;
pub use dispatch::{dispatch, dispatch_for_user};

mod debounce;
pub use debounce::use_debounced;

mod feedback;
pub use feedback::{ConfirmDialog, ErrorBanner, ModalOverlay, Spinner, SuccessModal};

mod sidebar;
pub use sidebar::{AppSidebar, Topbar};

mod wizard;
pub use wizard::BookingWizard;
