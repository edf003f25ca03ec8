use async_trait::async_trait;
use lettre::message::{Mailbox, MultiPart};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::contact::validation::ContactMessage;
use crate::errors::MailError;

const FROM_NAME: &str = "Portfolio Contact";

/// Outgoing transport seam; the SMTP relay in production, a recorder in tests.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), MailError>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), MailError> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(MailError::from)
    }
}

/// Formats contact submissions and hands them to a [`Mailer`].
pub struct ContactMailer {
    mailer: Box<dyn Mailer>,
    from: Mailbox,
    to: Mailbox,
}

impl ContactMailer {
    pub fn new_with_mailer(
        mailer: Box<dyn Mailer>,
        smtp_user: &str,
        recipient: &str,
    ) -> Result<Self, MailError> {
        Ok(Self {
            mailer,
            from: Mailbox::new(Some(FROM_NAME.to_string()), smtp_user.parse::<Address>()?),
            to: recipient.parse::<Mailbox>()?,
        })
    }

    /// Authenticated TLS relay to `smtp.host`.
    pub fn from_config(smtp: &SmtpConfig, recipient: &str) -> Result<Self, MailError> {
        let creds = Credentials::new(smtp.user.clone(), smtp.app_password.clone());
        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&smtp.host)?
            .credentials(creds)
            .build();
        Self::new_with_mailer(Box::new(transport), &smtp.user, recipient)
    }

    pub fn build_message(&self, msg: &ContactMessage) -> Result<Message, MailError> {
        let reply_to = msg.safe_email.parse::<Mailbox>()?;
        let message = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .reply_to(reply_to)
            .subject(format!(
                "[Portfolio] [{}] {}",
                msg.safe_category, msg.safe_subject
            ))
            .multipart(MultiPart::alternative_plain_html(
                plain_body(msg),
                html_body(msg),
            ))?;
        Ok(message)
    }

    pub async fn deliver(&self, msg: &ContactMessage) -> Result<(), MailError> {
        let email = self.build_message(msg)?;
        self.mailer.send(email).await
    }
}

fn plain_body(msg: &ContactMessage) -> String {
    format!(
        "From: {}\nProject Type: {}\n\nMessage:\n{}",
        msg.safe_email, msg.safe_category, msg.raw_message
    )
}

fn html_body(msg: &ContactMessage) -> String {
    let field = |label: &str, value: &str| {
        format!(
            r#"<div style="background: #1e293b; border-radius: 8px; padding: 16px; margin-bottom: 16px;">
  <p style="margin: 0 0 8px 0; font-size: 13px; color: #94a3b8;">{label}</p>
  <p style="margin: 0; font-size: 15px; color: #f1f5f9; white-space: pre-wrap; line-height: 1.6;">{value}</p>
</div>"#
        )
    };
    let from = format!(
        r#"<a href="mailto:{0}" style="color: #38bdf8; text-decoration: none;">{0}</a>"#,
        msg.safe_email
    );

    format!(
        r#"<div style="font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; max-width: 600px; margin: 0 auto; padding: 24px; background: #0f172a; color: #e2e8f0; border-radius: 12px;">
<h2 style="color: #3DDC84; margin: 0 0 20px 0; font-size: 20px;">New Portfolio Inquiry</h2>
{}
{}
{}
{}
<p style="margin: 24px 0 0 0; font-size: 12px; color: #64748b; text-align: center;">Sent from the portfolio contact form</p>
</div>"#,
        field("From", &from),
        field("Project Type", &msg.safe_category),
        field("Subject", &msg.safe_subject),
        field("Message", &msg.safe_message),
    )
}
