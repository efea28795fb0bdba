//! Contact form submission relay.
//!
//! Forwards `{from_name, reply_to, message}` submissions to an
//! EmailJS-compatible transactional send API, and tracks the form's
//! user-visible status with a timed auto-revert.

pub mod client;
pub mod form;

pub use client::{ContactMessage, MailClient, MailConfig, MailError};
pub use form::{ContactForm, SubmissionStatus, STATUS_REVERT_DELAY};
