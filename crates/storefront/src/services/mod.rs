//! Services behind the storefront's forms.
//!
//! # Services
//!
//! - `newsletter` - Newsletter subscription contract, the simulated
//!   implementation, and the per-form in-flight registry

pub mod newsletter;

pub use newsletter::{
    InFlightGuard, InFlightSubmissions, NewsletterError, NewsletterService, SimulatedNewsletter,
};
