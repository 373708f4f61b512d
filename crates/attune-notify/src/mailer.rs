//! Async SMTP delivery of the report email.

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::error::NotifyError;
use crate::render;
use crate::{Notify, ReportEmail};

/// SMTP connection settings, resolved by the composition root.
#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub host: String,
    /// Submission port; the transport always negotiates STARTTLS.
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender address, e.g. `"Attune Reports <reports@example.com>"`.
    pub from: String,
}

/// A report mailer backed by an async SMTP transport.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, NotifyError> {
        let from: Mailbox = config
            .from
            .parse()
            .map_err(|e| NotifyError::Address(format!("sender address is invalid: {e}")))?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| NotifyError::Transport(format!("smtp relay init failed: {e}")))?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .build();

        Ok(Self { transport, from })
    }
}

impl Notify for SmtpMailer {
    async fn notify(&self, email: &ReportEmail) -> Result<(), NotifyError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| NotifyError::Address(format!("recipient address is invalid: {e}")))?;

        let html = render::report_html(email)?;

        let message = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(format!(
                "Your relationship assessment is ready (order {})",
                email.order_id
            ))
            .header(ContentType::TEXT_HTML)
            .body(html)
            .map_err(|e| NotifyError::Message(e.to_string()))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| NotifyError::Transport(e.to_string()))?;

        Ok(())
    }
}
