use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use super::super::helpers::e500;
use super::helpers::contact_page;
use super::types::{ContactForm, DomainQuery, RegistrantContact};
use crate::activity_log::log_email;
use crate::configuration::MailSettings;
use crate::domain::{ContactMessage, DomainLabels, NewInquiry};
use crate::email_client::EmailClient;

impl TryFrom<ContactForm> for NewInquiry {
    type Error = String;

    fn try_from(form: ContactForm) -> Result<Self, Self::Error> {
        NewInquiry::parse(form.name, form.email, form.message)
    }
}

#[tracing::instrument(
    name = "Sending an inquiry to the domain registrant.",
    skip(query, form, db_pool, email_client, mail_settings),
    fields(domain = ?query.domain)
)]
pub async fn submit_contact(
    query: web::Query<DomainQuery>,
    form: web::Form<ContactForm>,
    db_pool: web::Data<PgPool>,
    email_client: web::Data<EmailClient>,
    mail_settings: web::Data<MailSettings>,
) -> Result<HttpResponse, actix_web::Error> {
    let domain = query.0.domain;

    let inquiry: NewInquiry = match form.0.try_into() {
        Ok(inquiry) => inquiry,
        Err(_) => {
            return Ok(contact_page(
                domain.as_deref(),
                "Please fill in all fields with valid information.",
                "",
            ));
        }
    };

    let mut error = String::new();
    let labels = match DomainLabels::parse(domain.as_deref().unwrap_or_default()) {
        Ok(labels) => Some(labels),
        Err(e) => {
            error = e.to_string();
            None
        }
    };

    // The legacy flow did not stop on an unparseable domain: the lookup runs
    // with empty labels (matching nothing) and the send is still attempted.
    let (sld, tld_key) = labels
        .map(|l| (l.sld().to_owned(), l.tld_key()))
        .unwrap_or_default();
    let registrant = find_registrant(&db_pool, &sld, &tld_key)
        .await
        .map_err(e500)?;

    let message = build_message(
        &inquiry,
        registrant.as_ref(),
        domain.as_deref().unwrap_or_default(),
    );

    let mut success = String::new();
    match email_client.send(&message, &mail_settings).await {
        Ok(()) => {
            if mail_settings.log_enabled {
                if let Err(e) = log_email(
                    &db_pool,
                    &message.subject,
                    None,
                    &message.sender_email,
                    &message.recipient_email,
                    &message.body,
                )
                .await
                {
                    tracing::warn!(
                        error.cause_chain = ?e,
                        "Failed to record the sent email in the activity log"
                    );
                }
            }
            success = "Your message has been sent successfully.".to_string();
        }
        Err(e) => {
            tracing::error!(
                channel = "email",
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to send the contact email"
            );
            error = "Failed to send the message. Please try again later.".to_string();
        }
    }

    Ok(contact_page(domain.as_deref(), &error, &success))
}

fn build_message(
    inquiry: &NewInquiry,
    registrant: Option<&RegistrantContact>,
    domain: &str,
) -> ContactMessage {
    let (recipient_email, recipient_name) = match registrant {
        Some(contact) => (
            contact.contact_email.clone(),
            format!(
                "{} {}",
                contact.contact_first_name, contact.contact_last_name
            ),
        ),
        None => (String::new(), String::new()),
    };

    ContactMessage {
        sender_name: inquiry.name.as_ref().to_owned(),
        sender_email: inquiry.email.as_ref().to_owned(),
        recipient_name,
        recipient_email,
        subject: format!("Contact Domain Registrant: {domain}"),
        body: inquiry.message.as_ref().to_owned(),
    }
}

#[tracing::instrument(name = "Looking up the domain registrant", skip(pool))]
async fn find_registrant(
    pool: &PgPool,
    sld: &str,
    tld: &str,
) -> Result<Option<RegistrantContact>, sqlx::Error> {
    sqlx::query_as::<_, RegistrantContact>(
        r#"
        SELECT contact_email, contact_first_name, contact_last_name
        FROM service_domain
        WHERE sld = $1 AND tld = $2
        "#,
    )
    .bind(sld)
    .bind(tld)
    .fetch_optional(pool)
    .await
}
