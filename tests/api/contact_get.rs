use crate::helpers::spawn_app;

#[tokio::test]
async fn contact_page_requires_a_domain() {
    let app = spawn_app().await;

    let response = app.get_contact("").await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("You must specify a domain."));
}

#[tokio::test]
async fn contact_page_treats_an_empty_domain_as_missing() {
    let app = spawn_app().await;

    let html = app.get_contact("?domain=").await.text().await.unwrap();

    assert!(html.contains("You must specify a domain."));
}

#[tokio::test]
async fn contact_page_reports_an_unknown_domain() {
    let app = spawn_app().await;

    let response = app.get_contact("?domain=nonexistent.tld").await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("The specified domain does not exist."));
}

#[tokio::test]
async fn contact_page_reports_an_unparseable_domain() {
    let app = spawn_app().await;

    let html = app
        .get_contact("?domain=localhost")
        .await
        .text()
        .await
        .unwrap();

    assert!(html.contains("Invalid domain format."));
}

#[tokio::test]
async fn contact_page_shows_no_error_for_a_registered_domain() {
    let app = spawn_app().await;
    app.seed_domain("example", ".com", "owner@example.com", "Jane", "Doe")
        .await;

    let response = app.get_contact("?domain=example.com").await;

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(!html.contains("class=\"error\""));
    assert!(html.contains("example.com"));
}

#[tokio::test]
async fn contact_page_keys_a_subdomain_on_its_third_from_last_label() {
    let app = spawn_app().await;
    // sub.example.com is stored under sld `sub`, tld `.example.com`.
    app.seed_domain("sub", ".example.com", "owner@example.com", "Jane", "Doe")
        .await;

    let html = app
        .get_contact("?domain=sub.example.com")
        .await
        .text()
        .await
        .unwrap();

    assert!(!html.contains("The specified domain does not exist."));
}
