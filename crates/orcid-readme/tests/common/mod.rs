//! Shared fixtures for integration tests.

#![allow(dead_code)]

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use orcid_readme::config::Config;
use orcid_readme::models::OrcidId;
use orcid_readme::OrcidClient;

pub const ORCID: &str = "0000-0001-9812-1078";

pub fn orcid() -> OrcidId {
    ORCID.parse().unwrap()
}

pub fn test_config(mock_server: &MockServer) -> Config {
    Config::for_testing(&mock_server.uri())
}

pub fn test_client(mock_server: &MockServer) -> OrcidClient {
    OrcidClient::new(&test_config(mock_server)).unwrap()
}

/// A record whose work groups carry the given put-codes, one summary each.
pub fn record_with_put_codes(put_codes: &[u64]) -> Value {
    let groups: Vec<Value> = put_codes
        .iter()
        .map(|code| {
            let path = format!("/{ORCID}/work/{code}");
            json!({"work-summary": [{"put-code": code, "path": path}]})
        })
        .collect();

    json!({
        "orcid-identifier": {"path": ORCID},
        "activities-summary": {"works": {"group": groups}}
    })
}

/// A fully populated work detail document.
pub fn work_detail(
    title: &str,
    contributors: &[&str],
    journal: &str,
    year: u32,
    doi: Option<&str>,
) -> Value {
    let contributor: Vec<Value> = contributors
        .iter()
        .map(|name| json!({"credit-name": {"value": name}, "contributor-attributes": null}))
        .collect();

    let external_id: Vec<Value> = doi
        .map(|doi| {
            vec![json!({
                "external-id-type": "doi",
                "external-id-value": doi,
                "external-id-url": {"value": format!("https://doi.org/{doi}")},
                "external-id-relationship": "self"
            })]
        })
        .unwrap_or_default();

    json!({
        "title": {"title": {"value": title}, "subtitle": null},
        "journal-title": {"value": journal},
        "publication-date": {"year": {"value": year.to_string()}, "month": null, "day": null},
        "contributors": {"contributor": contributor},
        "external-ids": {"external-id": external_id},
        "url": null
    })
}

pub async fn mount_record(mock_server: &MockServer, record: &Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/record")))
        .respond_with(ResponseTemplate::new(200).set_body_json(record))
        .mount(mock_server)
        .await;
}

pub async fn mount_work(mock_server: &MockServer, put_code: u64, detail: &Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/work/{put_code}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(detail))
        .mount(mock_server)
        .await;
}

pub async fn mount_work_status(mock_server: &MockServer, put_code: u64, status: u16) {
    Mock::given(method("GET"))
        .and(path(format!("/{ORCID}/work/{put_code}")))
        .respond_with(ResponseTemplate::new(status))
        .mount(mock_server)
        .await;
}

/// Data rows of a rendered document (lines after the separator row).
pub fn data_rows(markdown: &str) -> Vec<&str> {
    markdown.lines().skip_while(|line| !line.starts_with("|---")).skip(1).collect()
}

/// Number of cells in a table line. A pipe directly after a backslash is
/// part of the cell text, as in GFM table parsing.
pub fn cell_count(line: &str) -> usize {
    let mut pipes: usize = 0;
    let mut previous = None;
    for c in line.chars() {
        if c == '|' && previous != Some('\\') {
            pipes += 1;
        }
        previous = Some(c);
    }
    pipes.saturating_sub(1)
}
