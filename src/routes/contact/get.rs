use actix_web::{HttpResponse, web};
use sqlx::PgPool;

use super::super::helpers::e500;
use super::helpers::contact_page;
use super::types::DomainQuery;
use crate::domain::DomainLabels;

#[tracing::instrument(
    name = "Validating a domain for the contact form.",
    skip(query, db_pool),
    fields(domain = ?query.domain)
)]
pub async fn contact_form(
    query: web::Query<DomainQuery>,
    db_pool: web::Data<PgPool>,
) -> Result<HttpResponse, actix_web::Error> {
    let domain = query.0.domain.filter(|d| !d.is_empty());

    let error = match &domain {
        None => "You must specify a domain.".to_string(),
        Some(domain) => match DomainLabels::parse(domain) {
            Err(e) => e.to_string(),
            Ok(labels) => {
                let registered = domain_is_registered(&db_pool, &labels)
                    .await
                    .map_err(e500)?;
                if registered {
                    String::new()
                } else {
                    "The specified domain does not exist.".to_string()
                }
            }
        },
    };

    Ok(contact_page(domain.as_deref(), &error, ""))
}

#[tracing::instrument(name = "Checking the domain is registered", skip(pool))]
async fn domain_is_registered(pool: &PgPool, labels: &DomainLabels) -> Result<bool, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id FROM service_domain WHERE sld = $1 AND tld = $2
        "#,
    )
    .bind(labels.sld())
    .bind(labels.tld_key())
    .fetch_all(pool)
    .await?;

    Ok(!rows.is_empty())
}
