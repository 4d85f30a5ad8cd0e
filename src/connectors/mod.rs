//! External service connectors.
//!
//! All outbound integrations go through a connector: a trait defining the
//! operations, an HTTP client implementing it, and a mock for tests, so
//! route handlers never depend on the wire details.

pub mod errors;
pub mod payment_service;

pub use errors::ConnectorError;
pub use payment_service::{
    to_minor_units, PaymentClient, PaymentConnector, PaymentIntent, PaymentIntentRequest,
};
