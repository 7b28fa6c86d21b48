//! Contact form submission flow.
//!
//! [`ContactFlow`] owns the lifecycle of one visitor's outgoing message: it
//! validates the form, hands the payload to an [`EmailDelivery`] backend and
//! exposes the resulting [`SubmissionState`] to whatever renders it.

mod credentials;
mod delivery;
mod error;
mod flow;
mod form;

pub use credentials::*;
pub use delivery::*;
pub use error::*;
pub use flow::*;
pub use form::*;
