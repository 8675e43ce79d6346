//! Interactive page components.
//!
//! Each component is a small state machine that the server renders into the
//! page. `mount` attaches the component to a timer or event source through a
//! [`Subscription`](lifecycle::Subscription) that is released on unmount.

pub mod header;
pub mod lifecycle;
pub mod newsletter;
pub mod slideshow;

pub use header::{HeaderState, MountedHeader};
pub use lifecycle::Subscription;
pub use newsletter::{NewsletterForm, SubmitOutcome};
pub use slideshow::{MountedSlideshow, Slide, Slideshow, SlideshowError};
