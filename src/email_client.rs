use std::time::Duration;

use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::configuration::MailSettings;
use crate::domain::ContactMessage;

#[derive(Clone)]
pub struct EmailClient {
    http_client: Client,
    base_url: Url,
    auth_token: SecretString,
}

#[derive(Serialize)]
struct EmailUnit<'a> {
    email: &'a str,
    name: &'a str,
}

impl<'a> EmailUnit<'a> {
    fn new(email: &'a str, name: &'a str) -> Self {
        Self { email, name }
    }
}

#[derive(Serialize)]
struct SendEmailRequest<'a> {
    from: EmailUnit<'a>,
    to: EmailUnit<'a>,
    subject: &'a str,
    text: &'a str,
    transport: &'a str,
    dsn: Option<&'a str>,
}

impl EmailClient {
    pub fn new(base_url: String, auth_token: SecretString, timeout: Duration) -> Self {
        Self {
            http_client: Client::builder().timeout(timeout).build().unwrap(),
            base_url: Url::parse(&base_url).expect("Failed parsing base email api url."),
            auth_token,
        }
    }

    /// Hands the composed message to the mail relay, with the transport
    /// settings the email module is configured with.
    pub async fn send(
        &self,
        message: &ContactMessage,
        settings: &MailSettings,
    ) -> Result<(), reqwest::Error> {
        let url = self
            .base_url
            .join("v1/email")
            .expect("Failed joining route to email api url.");

        let body = SendEmailRequest {
            from: EmailUnit::new(&message.sender_email, &message.sender_name),
            to: EmailUnit::new(&message.recipient_email, &message.recipient_name),
            subject: &message.subject,
            text: &message.body,
            transport: &settings.mailer,
            dsn: settings.custom_dsn.as_deref(),
        };

        self.http_client
            .post(url)
            .header(
                "Authorization",
                "Bearer ".to_owned() + self.auth_token.expose_secret(),
            )
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
