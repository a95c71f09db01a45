use axum::extract::{Path, State};
use axum::{routing::get, Router};
use catalog_cli::{commands, SourceArgs};

const NAMES: [&str; 3] = ["Pikachu", "Raichu", "Bulbasaur"];

async fn list(State(base): State<String>) -> String {
    let results: Vec<String> = NAMES
        .iter()
        .enumerate()
        .map(|(ix, name)| format!(r#"{{"name":"{name}","url":"{base}/api/v2/pokemon/{}/"}}"#, ix + 1))
        .collect();
    format!(
        r#"{{"count":{},"next":null,"previous":null,"results":[{}]}}"#,
        NAMES.len(),
        results.join(",")
    )
}

async fn detail(Path(id): Path<u32>) -> String {
    format!(
        r#"{{"id":{id},"weight":{w},"base_experience":112,
            "sprites":{{"front_default":"https://img.test/{id}.png"}},
            "types":[{{"slot":1,"type":{{"name":"electric","url":"x"}}}}]}}"#,
        w = 60 + id
    )
}

async fn start_upstream() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let app = Router::new()
        .route("/api/v2/pokemon", get(list))
        .route("/api/v2/pokemon/:id/", get(detail))
        .with_state(base.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    base
}

fn source(base: &str, limit: usize) -> SourceArgs {
    SourceArgs {
        api_base: format!("{base}/api/v2"),
        collection: "pokemon".to_string(),
        limit,
    }
}

fn text(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[tokio::test]
async fn list_prints_entries_in_listing_order() {
    let base = start_upstream().await;
    let mut out = Vec::new();

    commands::cmd_list(&source(&base, 20), false, &mut out)
        .await
        .unwrap();

    let out = text(out);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("Pikachu"));
    assert!(lines[1].ends_with("Raichu"));
    assert!(lines[2].ends_with("Bulbasaur"));
}

#[tokio::test]
async fn list_respects_limit_and_emits_json() {
    let base = start_upstream().await;
    let mut out = Vec::new();

    commands::cmd_list(&source(&base, 2), true, &mut out)
        .await
        .unwrap();

    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let arr = parsed.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[1]["name"], "Raichu");
    assert_eq!(arr[1]["weight"], 62);
}

#[tokio::test]
async fn search_is_case_insensitive() {
    let base = start_upstream().await;
    let mut out = Vec::new();

    commands::cmd_search(&source(&base, 20), "CHU", false, &mut out)
        .await
        .unwrap();

    let out = text(out);
    assert!(out.contains("Pikachu"));
    assert!(out.contains("Raichu"));
    assert!(!out.contains("Bulbasaur"));
}

#[tokio::test]
async fn search_without_hits_names_the_term() {
    let base = start_upstream().await;
    let mut out = Vec::new();

    commands::cmd_search(&source(&base, 20), "zzz", false, &mut out)
        .await
        .unwrap();

    assert_eq!(text(out).trim(), "No results for \"zzz\"");
}

#[tokio::test]
async fn show_by_name_prints_detail_and_neighbours() {
    let base = start_upstream().await;
    let mut out = Vec::new();

    commands::cmd_show(&source(&base, 20), "pikachu", false, &mut out)
        .await
        .unwrap();

    let out = text(out);
    assert!(out.contains("#1 Pikachu"));
    assert!(out.contains("6.1 kg"));
    assert!(out.contains("electric"));
    assert!(out.contains("Prev/Next: Bulbasaur / Raichu"));
}

#[tokio::test]
async fn show_single_entry_has_no_navigation() {
    let base = start_upstream().await;
    let mut out = Vec::new();

    commands::cmd_show(&source(&base, 1), "1", false, &mut out)
        .await
        .unwrap();

    let out = text(out);
    assert!(out.contains("#1 Pikachu"));
    assert!(!out.contains("Prev/Next"));
}

#[tokio::test]
async fn show_unknown_entry_fails() {
    let base = start_upstream().await;
    let mut out = Vec::new();

    let err = commands::cmd_show(&source(&base, 20), "mew", false, &mut out)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("mew"));
    assert!(out.is_empty());
}

#[tokio::test]
async fn unreachable_upstream_reports_network_message() {
    let mut out = Vec::new();
    let err = commands::cmd_list(&source("http://127.0.0.1:1", 5), false, &mut out)
        .await
        .unwrap_err();

    assert!(err
        .to_string()
        .starts_with("Could not reach the catalog service"));
    assert!(out.is_empty());
}

#[test]
fn find_entry_matches_id_or_name() {
    let entry = |id: u32, name: &str| catalog_core::CatalogEntry {
        id,
        name: name.to_string(),
        source_url: String::new(),
        image_url: String::new(),
        categories: vec![],
        weight: 10,
        base_experience: 1,
    };
    let entries = vec![entry(25, "Pikachu"), entry(26, "Raichu")];

    assert_eq!(commands::find_entry(&entries, "26"), Some(1));
    assert_eq!(commands::find_entry(&entries, "PIKACHU"), Some(0));
    assert_eq!(commands::find_entry(&entries, "1"), None);
}
