//! Integration tests for the Airtable listing/update cycle.
//!
//! A wiremock server stands in for the Airtable API; the assertions
//! cover offset pagination, formula filters, error translation, and the
//! all-records-failed misconfiguration signal.

use airtable_source::{
    AirtableConfig, AirtableSource, AppointmentTable, ClientTable, Source, SourceError,
    TemplateTable,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::time::{Duration, Instant};
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> AirtableConfig {
    AirtableConfig {
        api_url: server.uri(),
        pat: "pat_test".to_string(),
        base_id: "appTEST".to_string(),
        clients: ClientTable {
            table: "Clients".to_string(),
            name_column: "Nom".to_string(),
            phone_column: "Téléphone".to_string(),
        },
        templates: Some(TemplateTable {
            table: "Modeles".to_string(),
            title_column: "Titre".to_string(),
            content_column: "Contenu".to_string(),
        }),
        appointments: Some(AppointmentTable {
            table: "RDV".to_string(),
            date_column: "Date".to_string(),
            name_column: "Nom".to_string(),
            phone_column: "Téléphone".to_string(),
            hour_column: Some("Heure".to_string()),
            pets_column: None,
            status_column: Some("Statut".to_string()),
            no_show_status: Some("Absent ⛔".to_string()),
            sms_sent_column: None,
            no_show_sms_sent_column: None,
        }),
    }
}

fn client_record(id: &str, name: &str, phone: &str) -> Value {
    json!({ "id": id, "fields": { "Nom": name, "Téléphone": phone } })
}

fn records_response(records: Vec<Value>, offset: Option<&str>) -> Value {
    match offset {
        Some(offset) => json!({ "records": records, "offset": offset }),
        None => json!({ "records": records }),
    }
}

#[tokio::test]
async fn test_offset_pagination_accumulates_pages_in_order() {
    let server = MockServer::start().await;

    let first_page: Vec<Value> = (0..100)
        .map(|i| client_record(&format!("rec-{}", i), &format!("Client {}", i), "+336"))
        .collect();
    let second_page: Vec<Value> = (100..137)
        .map(|i| client_record(&format!("rec-{}", i), &format!("Client {}", i), "+336"))
        .collect();

    // The offset-specific mock is mounted first so it wins for the
    // second request.
    Mock::given(method("GET"))
        .and(path("/v0/appTEST/Clients"))
        .and(query_param("offset", "itr-next"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(records_response(second_page, None)),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v0/appTEST/Clients"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(records_response(first_page, Some("itr-next"))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();

    let started = Instant::now();
    let clients = source.search_clients("Client").await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(clients.len(), 137);
    assert_eq!(clients[0].name, "Client 0");
    assert_eq!(clients[136].name, "Client 136");
    // Exactly one inter-page pacing delay.
    assert!(elapsed >= Duration::from_millis(350), "elapsed: {:?}", elapsed);
}

#[tokio::test]
async fn test_search_sends_lowercased_search_formula() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/appTEST/Clients"))
        .and(query_param(
            "filterByFormula",
            r#"SEARCH(LOWER("Mar"), LOWER({Nom}))"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_response(
            vec![client_record("rec-1", "Marie Dubois", "+33612345678")],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    let clients = source.search_clients("Mar").await.unwrap();

    assert_eq!(clients.len(), 1);
    assert_eq!(clients[0].name, "Marie Dubois");
}

#[tokio::test]
async fn test_empty_query_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    let clients = source.search_clients("  ").await.unwrap();

    assert!(clients.is_empty());
}

#[tokio::test]
async fn test_all_malformed_records_raise_no_valid_records() {
    let server = MockServer::start().await;

    let malformed: Vec<Value> = (0..3)
        .map(|i| json!({ "id": format!("bad-{}", i), "fields": {} }))
        .collect();

    Mock::given(method("GET"))
        .and(path("/v0/appTEST/RDV"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_response(malformed, None)))
        .expect(1)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();

    let err = source.appointments_on(date).await.unwrap_err();
    assert!(matches!(err, SourceError::NoValidRecords));
}

#[tokio::test]
async fn test_error_statuses_translate_to_friendly_messages() {
    for (status, needle) in [
        (401, "personal access token"),
        (403, "scopes"),
        (404, "table name"),
        (422, "column names"),
        (429, "rate limiting"),
    ] {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let source = AirtableSource::new(config_for(&server)).unwrap();
        let err = source.search_clients("Mar").await.unwrap_err();

        match err {
            SourceError::Api {
                status: got,
                message,
            } => {
                assert_eq!(got, status);
                assert!(
                    message.contains(needle),
                    "status {}: message {:?} missing {:?}",
                    status,
                    message,
                    needle
                );
            }
            other => panic!("expected Api error for {}, got {:?}", status, other),
        }
    }
}

#[tokio::test]
async fn test_templates_list_is_unfiltered() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/appTEST/Modeles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_response(
            vec![json!({
                "id": "tpl-1",
                "fields": { "Titre": "Rappel", "Contenu": "Bonjour {clientName}" }
            })],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    let templates = source.list_templates().await.unwrap();

    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].render("Léa"), "Bonjour Léa");
}

#[tokio::test]
async fn test_no_shows_filter_status_server_side() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/appTEST/RDV"))
        .and(query_param(
            "filterByFormula",
            r#"AND(IS_SAME({Date}, "2026-08-06", "day"), {Statut} = "Absent ⛔")"#,
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_response(
            vec![json!({
                "id": "a-1",
                "fields": {
                    "Nom": "Marie Dubois",
                    "Téléphone": "+33612345678",
                    "Heure": "9h",
                    "Statut": "Absent ⛔"
                }
            })],
            None,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let no_shows = source.no_shows_on(date).await.unwrap();

    assert_eq!(no_shows.len(), 1);
    assert_eq!(no_shows[0].name, "Marie Dubois");
    assert_eq!(no_shows[0].appointment_time.as_deref(), Some("9h"));
}

#[tokio::test]
async fn test_appointments_sorted_by_normalized_time() {
    let server = MockServer::start().await;

    let rows = vec![
        json!({ "id": "a-1", "fields": { "Nom": "Quatorze", "Téléphone": "+336", "Heure": "14h" } }),
        json!({ "id": "a-2", "fields": { "Nom": "Neuf", "Téléphone": "+336", "Heure": "9h" } }),
        json!({ "id": "a-3", "fields": { "Nom": "Neuf trente", "Téléphone": "+336", "Heure": "9:30" } }),
    ];

    Mock::given(method("GET"))
        .and(path("/v0/appTEST/RDV"))
        .respond_with(ResponseTemplate::new(200).set_body_json(records_response(rows, None)))
        .expect(1)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    let date = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
    let clients = source.appointments_on(date).await.unwrap();

    let names: Vec<&str> = clients.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Neuf", "Neuf trente", "Quatorze"]);
}

#[tokio::test]
async fn test_set_flag_sends_fields_patch() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path("/v0/appTEST/RDV/rec-42"))
        .and(body_partial_json(json!({ "fields": { "SMS envoyé": true } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "rec-42" })))
        .expect(1)
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    source.set_flag("rec-42", "SMS envoyé", true).await.unwrap();
}

#[tokio::test]
async fn test_set_flag_surfaces_failure() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let source = AirtableSource::new(config_for(&server)).unwrap();
    let err = source
        .set_flag("rec-42", "SMS envoyé", false)
        .await
        .unwrap_err();

    assert!(matches!(err, SourceError::Api { status: 403, .. }));
}
