//! Terminal presentation: input validation, spinner, results and view state.

pub mod form;
pub mod render;
pub mod spinner;
pub mod state;

pub use form::{validate_url, FieldError};
pub use render::SectionToggles;
pub use state::{Session, SubmitOutcome, ViewState};
