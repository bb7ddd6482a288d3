/// The domain under inquiry travels in the query string for both the GET
/// validation and the POST submission.
#[derive(serde::Deserialize)]
pub struct DomainQuery {
    pub domain: Option<String>,
}

/// Raw submission body. Missing fields deserialize to empty strings so the
/// handler can answer with the rendered page instead of a rejection.
#[derive(serde::Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(sqlx::FromRow)]
pub struct RegistrantContact {
    pub contact_email: String,
    pub contact_first_name: String,
    pub contact_last_name: String,
}
