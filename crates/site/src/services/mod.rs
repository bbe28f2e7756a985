//! Business logic services for the site.
//!
//! # Services
//!
//! - `mail` - Contact-form validation and SMTP delivery

pub mod mail;

pub use mail::{ContactMessage, ContactValidationError, MailError, MailTransport, Mailer};
