use actix_web::{HttpResponse, http::header::ContentType};

use super::super::helpers::prepare_html_template;

pub fn contact_page(domain: Option<&str>, error: &str, success: &str) -> HttpResponse {
    let page_string = prepare_html_template(
        &[
            ("domain", domain.unwrap_or_default()),
            ("error", error),
            ("success", success),
        ],
        "contact.html",
    );

    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(page_string)
}
