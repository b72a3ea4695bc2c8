//! Amazon SES email transport.

use crate::email::{
    domain::{Recipients, RenderedEmail},
    ports::{EmailSender, EmailSenderError, EmailSenderResult},
};
use async_trait::async_trait;
use aws_sdk_sesv2::{
    Client,
    config::Region,
    error::BuildError,
    types::{Body, Content, Destination, EmailContent, Message},
};
use tracing::{error, info};

const CHARSET: &str = "UTF-8";

/// Sends digest emails through the SES v2 `SendEmail` API.
///
/// Each message carries a UTF-8 subject, the HTML body and the plain-text
/// fallback part.
#[derive(Debug, Clone)]
pub struct SesEmailSender {
    client: Client,
}

impl SesEmailSender {
    /// Creates a sender with a pre-built SES client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }

    /// Creates a sender using the standard AWS SDK config chain.
    ///
    /// `region` overrides the region resolved from the environment.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(name) = region {
            loader = loader.region(Region::new(name));
        }
        let config = loader.load().await;
        Self::new(Client::new(&config))
    }
}

fn utf8_content(data: &str) -> Result<Content, BuildError> {
    Content::builder().data(data).charset(CHARSET).build()
}

fn build_content(email: &RenderedEmail) -> Result<EmailContent, BuildError> {
    let body = Body::builder()
        .html(utf8_content(email.html_body())?)
        .text(utf8_content(email.text_body())?)
        .build();
    let message = Message::builder()
        .subject(utf8_content(email.subject())?)
        .body(body)
        .build();
    Ok(EmailContent::builder().simple(message).build())
}

#[async_trait]
impl EmailSender for SesEmailSender {
    async fn send(
        &self,
        sender: &str,
        recipients: &Recipients,
        email: &RenderedEmail,
    ) -> EmailSenderResult<()> {
        let content =
            build_content(email).map_err(|err| EmailSenderError::InvalidMessage(err.to_string()))?;
        let destination = Destination::builder()
            .set_to_addresses(Some(recipients.to_vec()))
            .build();

        let output = self
            .client
            .send_email()
            .from_email_address(sender)
            .destination(destination)
            .content(content)
            .send()
            .await
            .map_err(|err| {
                error!(error = %err, "SES rejected the digest email");
                EmailSenderError::delivery(err)
            })?;

        info!(
            message_id = output.message_id().unwrap_or_default(),
            recipients = %recipients,
            "digest email sent"
        );
        Ok(())
    }
}
