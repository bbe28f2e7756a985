//! Contact-form mail relay.
//!
//! Uses SMTP via lettre for delivery. Each accepted submission produces two
//! plain-text messages: a notification to the site owner (reply-to set to
//! the submitter) and an acknowledgment back to the submitter.

use std::future::Future;

use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{Mailbox, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use secrecy::ExposeSecret;
use thiserror::Error;

use portfolio_core::Email;

use crate::config::MailConfig;

/// Placeholder used when the submitter leaves the subject blank.
const NO_SUBJECT: &str = "No Subject";

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum MailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),
}

/// Why a contact submission was rejected before any mail was sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactValidationError {
    /// Name is empty after trimming.
    #[error("name is required")]
    EmptyName,
    /// Email does not match the `local@domain.tld` shape.
    #[error("email address is invalid")]
    InvalidEmail,
    /// Message is empty after trimming.
    #[error("message is required")]
    EmptyMessage,
}

/// A validated contact submission, ready to relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// Validate raw form fields into a sendable message.
    ///
    /// All fields are trimmed. A blank subject becomes the literal
    /// `No Subject` placeholder.
    ///
    /// # Errors
    ///
    /// Returns `ContactValidationError` if the name or message is empty
    /// or the email is malformed. Nothing is sent on failure.
    pub fn parse(
        name: &str,
        email: &str,
        subject: &str,
        message: &str,
    ) -> Result<Self, ContactValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ContactValidationError::EmptyName);
        }

        let email =
            Email::parse(email.trim()).map_err(|_| ContactValidationError::InvalidEmail)?;

        let message = message.trim();
        if message.is_empty() {
            return Err(ContactValidationError::EmptyMessage);
        }

        let subject = subject.trim();
        let subject = if subject.is_empty() {
            NO_SUBJECT.to_string()
        } else {
            subject.to_string()
        };

        Ok(Self {
            name: name.to_string(),
            email,
            subject,
            message: message.to_string(),
        })
    }

    /// Subject line for the owner notification.
    #[must_use]
    pub fn notification_subject(&self) -> String {
        format!("[Portfolio Contact] {} - {}", self.subject, self.name)
    }

    /// Body for the owner notification.
    #[must_use]
    pub fn notification_body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nSubject: {}\n\n{}\n",
            self.name, self.email, self.subject, self.message
        )
    }

    /// Subject line for the submitter acknowledgment.
    #[must_use]
    pub fn acknowledgment_subject(&self) -> &'static str {
        "【受付完了】お問い合わせありがとうございます"
    }

    /// Body for the submitter acknowledgment, echoing the submission.
    #[must_use]
    pub fn acknowledgment_body(&self) -> String {
        format!(
            "{} 様\n\nお問い合わせを受け付けました。\n\n--- 送信内容 ---\n件名: {}\n本文:\n{}\n",
            self.name, self.subject, self.message
        )
    }
}

/// Delivery seam between the mailer and its transport.
///
/// The production impl wraps the SMTP transport; tests substitute a
/// recording transport to observe what went out.
pub trait MailTransport: Send + Sync {
    /// Deliver a single message.
    fn deliver(&self, message: Message) -> impl Future<Output = Result<(), MailError>> + Send;
}

impl MailTransport for AsyncSmtpTransport<Tokio1Executor> {
    fn deliver(&self, message: Message) -> impl Future<Output = Result<(), MailError>> + Send {
        async move {
            self.send(message).await?;
            Ok(())
        }
    }
}

/// Outbound mailer for contact submissions.
#[derive(Clone)]
pub struct Mailer<T = AsyncSmtpTransport<Tokio1Executor>> {
    transport: T,
    from_address: String,
    contact_to: String,
}

impl Mailer {
    /// Create a new mailer from configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the STARTTLS relay cannot be configured.
    pub fn new(config: &MailConfig) -> Result<Self, SmtpError> {
        let credentials = Credentials::new(
            config.smtp_username.clone(),
            config.smtp_password.expose_secret().to_string(),
        );

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host)?
            .port(config.smtp_port)
            .credentials(credentials)
            .build();

        Ok(Self {
            transport,
            from_address: config.from_address.clone(),
            contact_to: config.contact_to.clone(),
        })
    }
}

impl<T: MailTransport> Mailer<T> {
    /// Relay a validated contact submission as two messages.
    ///
    /// The owner notification goes out first, then the acknowledgment.
    /// A failure on either is returned as-is; the caller treats the whole
    /// submission as failed without distinguishing partial sends.
    ///
    /// # Errors
    ///
    /// Returns `MailError` if an address cannot be parsed, a message
    /// cannot be built, or the SMTP transport rejects a send.
    pub async fn send_contact(&self, contact: &ContactMessage) -> Result<(), MailError> {
        let from = parse_mailbox(&self.from_address)?;
        let owner = parse_mailbox(&self.contact_to)?;
        let submitter = parse_mailbox(contact.email.as_str())?;

        let notification = Message::builder()
            .from(from.clone())
            .to(owner)
            .reply_to(submitter.clone())
            .subject(contact.notification_subject())
            .header(ContentType::TEXT_PLAIN)
            .body(contact.notification_body())?;

        let acknowledgment = Message::builder()
            .from(from)
            .to(submitter)
            .subject(contact.acknowledgment_subject())
            .header(ContentType::TEXT_PLAIN)
            .body(contact.acknowledgment_body())?;

        self.transport.deliver(notification).await?;
        self.transport.deliver(acknowledgment).await?;

        tracing::info!(
            from = %contact.email,
            subject = %contact.subject,
            "Contact submission relayed"
        );
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .parse()
        .map_err(|_| MailError::InvalidAddress(address.to_string()))
}

#[cfg(test)]
#[allow(clippy::indexing_slicing)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Transport double that records the envelope and raw bytes of every
    /// delivered message.
    #[derive(Clone, Default)]
    struct RecordingTransport {
        sent: Arc<Mutex<Vec<(lettre::address::Envelope, String)>>>,
    }

    impl RecordingTransport {
        fn sent(&self) -> Vec<(lettre::address::Envelope, String)> {
            self.sent.lock().expect("lock").clone()
        }
    }

    impl MailTransport for RecordingTransport {
        fn deliver(
            &self,
            message: Message,
        ) -> impl Future<Output = Result<(), MailError>> + Send {
            let sent = Arc::clone(&self.sent);
            let envelope = message.envelope().clone();
            let raw = String::from_utf8_lossy(&message.formatted()).into_owned();
            async move {
                sent.lock().expect("lock").push((envelope, raw));
                Ok(())
            }
        }
    }

    /// Transport double that rejects every delivery.
    struct FailingTransport;

    impl MailTransport for FailingTransport {
        fn deliver(
            &self,
            _message: Message,
        ) -> impl Future<Output = Result<(), MailError>> + Send {
            async move { Err(MailError::InvalidAddress("transport down".to_string())) }
        }
    }

    fn test_mailer<T: MailTransport>(transport: T) -> Mailer<T> {
        Mailer {
            transport,
            from_address: "mailer@example.com".to_string(),
            contact_to: "owner@example.com".to_string(),
        }
    }

    fn recipients(envelope: &lettre::address::Envelope) -> Vec<String> {
        envelope.to().iter().map(ToString::to_string).collect()
    }

    fn valid() -> ContactMessage {
        ContactMessage::parse("Taro", "taro@example.com", "Hello", "A message")
            .expect("valid submission")
    }

    #[test]
    fn test_parse_trims_fields() {
        let msg = ContactMessage::parse("  Taro ", " taro@example.com ", " Hi ", " body ")
            .expect("valid submission");
        assert_eq!(msg.name, "Taro");
        assert_eq!(msg.subject, "Hi");
        assert_eq!(msg.message, "body");
    }

    #[test]
    fn test_parse_rejects_empty_name() {
        assert_eq!(
            ContactMessage::parse("   ", "a@b.co", "s", "m"),
            Err(ContactValidationError::EmptyName)
        );
    }

    #[test]
    fn test_parse_rejects_bad_email() {
        for email in ["", "not-an-email", "a@b", "a b@c.com"] {
            assert_eq!(
                ContactMessage::parse("Taro", email, "s", "m"),
                Err(ContactValidationError::InvalidEmail),
                "expected rejection for {email:?}"
            );
        }
    }

    #[test]
    fn test_parse_rejects_empty_message() {
        assert_eq!(
            ContactMessage::parse("Taro", "a@b.co", "s", "  "),
            Err(ContactValidationError::EmptyMessage)
        );
    }

    #[test]
    fn test_blank_subject_becomes_placeholder() {
        let msg = ContactMessage::parse("Taro", "taro@example.com", "  ", "body")
            .expect("valid submission");
        assert_eq!(msg.subject, "No Subject");
        assert!(msg.notification_subject().contains("No Subject"));
    }

    #[test]
    fn test_notification_subject_format() {
        let msg = valid();
        assert_eq!(
            msg.notification_subject(),
            "[Portfolio Contact] Hello - Taro"
        );
    }

    #[test]
    fn test_notification_body_contains_all_fields() {
        let body = valid().notification_body();
        assert!(body.contains("Name: Taro"));
        assert!(body.contains("Email: taro@example.com"));
        assert!(body.contains("Subject: Hello"));
        assert!(body.contains("A message"));
    }

    #[test]
    fn test_acknowledgment_echoes_submission() {
        let body = valid().acknowledgment_body();
        assert!(body.contains("Taro 様"));
        assert!(body.contains("件名: Hello"));
        assert!(body.contains("A message"));
    }

    #[tokio::test]
    async fn test_send_contact_relays_exactly_two_messages() {
        let transport = RecordingTransport::default();
        let mailer = test_mailer(transport.clone());

        mailer.send_contact(&valid()).await.expect("send succeeds");

        let sent = transport.sent();
        assert_eq!(sent.len(), 2);

        // Notification goes out first, to the owner, replying to the
        // submitter
        let (envelope, raw) = &sent[0];
        assert_eq!(recipients(envelope), vec!["owner@example.com"]);
        assert!(raw.contains("[Portfolio Contact] Hello - Taro"));
        assert!(raw.contains("Reply-To"));
        assert!(raw.contains("taro@example.com"));

        // Acknowledgment goes back to the submitter
        let (envelope, _) = &sent[1];
        assert_eq!(recipients(envelope), vec!["taro@example.com"]);
    }

    #[tokio::test]
    async fn test_send_contact_propagates_transport_failure() {
        let mailer = test_mailer(FailingTransport);
        assert!(mailer.send_contact(&valid()).await.is_err());
    }
}
