//! UI Components for the Orbgate portal.

mod orb_layer;
mod portal_form;
mod status_notice;
mod terms_modal;

pub use orb_layer::OrbLayer;
pub use portal_form::PortalForm;
pub use status_notice::StatusNotice;
pub use terms_modal::TermsModal;
