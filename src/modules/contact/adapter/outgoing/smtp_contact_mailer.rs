use async_trait::async_trait;
use lettre::message::{header::ContentType, Mailbox};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::modules::contact::application::domain::ContactSubmission;
use crate::modules::contact::application::ports::outgoing::{ContactMailer, ContactMailerError};

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: Message) -> Result<(), String>;
}

#[async_trait]
impl Mailer for AsyncSmtpTransport<Tokio1Executor> {
    async fn send(&self, email: Message) -> Result<(), String> {
        AsyncTransport::send(self, email)
            .await
            .map(|_resp| ())
            .map_err(|e| e.to_string())
    }
}

pub struct SmtpContactMailer {
    mailer: Box<dyn Mailer>,
    from: Mailbox,
    recipient: Mailbox,
}

fn mailbox(value: &str) -> Result<Mailbox, ContactMailerError> {
    value
        .parse()
        .map_err(|e| ContactMailerError::Configuration(format!("{value}: {e}")))
}

impl SmtpContactMailer {
    pub fn new_with_mailer(
        mailer: Box<dyn Mailer>,
        from: &str,
        recipient: &str,
    ) -> Result<Self, ContactMailerError> {
        Ok(Self {
            mailer,
            from: mailbox(from)?,
            recipient: mailbox(recipient)?,
        })
    }

    pub fn new(config: &SmtpConfig) -> Result<Self, ContactMailerError> {
        let transport = match config.local_port {
            // Mailpit, MailHog
            Some(port) => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&config.server)
                .port(port)
                .build(),
            None => {
                let creds = Credentials::new(config.username.clone(), config.password.clone());
                AsyncSmtpTransport::<Tokio1Executor>::relay(&config.server)
                    .map_err(|e| ContactMailerError::Configuration(e.to_string()))?
                    .credentials(creds)
                    .build()
            }
        };

        Self::new_with_mailer(Box::new(transport), &config.from, &config.recipient)
    }

    fn compose(&self, submission: &ContactSubmission) -> Result<Message, ContactMailerError> {
        let reply_to = mailbox(submission.email())
            .map_err(|_| ContactMailerError::Rejected("invalid sender address".into()))?;

        let body = format!(
            "New message from the portfolio contact form.\n\nName: {}\nEmail: {}\n\n{}\n",
            submission.name(),
            submission.email(),
            submission.message()
        );

        Message::builder()
            .from(self.from.clone())
            .reply_to(reply_to)
            .to(self.recipient.clone())
            .subject(format!("Portfolio contact: {}", submission.name()))
            .header(ContentType::TEXT_PLAIN)
            .body(body)
            .map_err(|e| ContactMailerError::Configuration(e.to_string()))
    }
}

#[async_trait]
impl ContactMailer for SmtpContactMailer {
    async fn deliver(&self, submission: &ContactSubmission) -> Result<(), ContactMailerError> {
        let email = self.compose(submission)?;
        self.mailer
            .send(email)
            .await
            .map_err(ContactMailerError::Transport)
    }
}
