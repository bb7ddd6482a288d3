use sqlx::{PgPool, types::chrono::Utc};
use uuid::Uuid;

/// Records one sent-email activity row. Callers treat this as best-effort:
/// a failed insert must not fail the request that sent the email.
#[tracing::instrument(name = "Recording sent email activity", skip(pool, body))]
pub async fn log_email(
    pool: &PgPool,
    subject: &str,
    actor_id: Option<Uuid>,
    from_email: &str,
    to_email: &str,
    body: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO activity_log_email (id, subject, actor_id, from_email, to_email, body, logged_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(subject)
    .bind(actor_id)
    .bind(from_email)
    .bind(to_email)
    .bind(body)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}
