mod common;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use common::{block_inserts, memory_state};
use labtracker::config::Config;
use labtracker::core::submit::SubmitLogic;
use labtracker::db::initialize::reset_tracking_table;
use labtracker::db::pool::DbPool;
use labtracker::db::queries::count_records;
use labtracker::models::form::EntryForm;
use labtracker::web::{AppState, build_router, prepare_state};
use tower::ServiceExt;

const FORM: &str = "application/x-www-form-urlencoded";

async fn send(state: &AppState, req: Request<Body>) -> (StatusCode, String) {
    let resp = build_router(state.clone()).oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header(header::CONTENT_TYPE, FORM)
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn rows(state: &AppState) -> i64 {
    state.with_db(|p| count_records(&p.conn)).unwrap()
}

#[tokio::test]
async fn index_renders_form_without_inserting() {
    let state = memory_state();

    let (status, html) = send(&state, get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1>Laborprozess-Tracking</h1>"));
    assert!(html.contains("Eintrag hinzufügen"));
    assert!(html.contains("name=\"n_clicks\" value=\"0\""));
    assert!(html.contains("<option value=\"Houssam\">Houssam</option>"));
    assert!(html.contains("<option value=\"In Bearbeitung\">In Bearbeitung</option>"));
    assert!(html.contains("<option value=\"Probenaufbereitung\">Probenaufbereitung</option>"));
    assert!(html.contains("<th>datum</th><th>prozess</th><th>status</th><th>uhrzeit</th><th>operator</th><th>operation</th>"));
    assert!(html.contains("<div id=\"bar-chart\"></div>"));
    assert!(!html.contains("alert-danger"));
    assert_eq!(rows(&state), 0);
}

#[tokio::test]
async fn submit_inserts_one_row_and_redraws_table_and_chart() {
    let state = memory_state();

    let (status, html) = send(
        &state,
        post("n_clicks=0&datum=2025-01-10&uhrzeit=09%3A30&operator=Alex&operation=PCR&status=In+Bearbeitung&prozess=Probe+1"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&state), 1);
    assert!(html.contains(
        "<tr><td>2025-01-10</td><td>Probe 1</td><td>In Bearbeitung</td><td>09:30</td><td>Alex</td><td>PCR</td></tr>"
    ));
    assert!(html.contains("name=\"n_clicks\" value=\"1\""));
    assert!(html.contains("<option value=\"Alex\" selected>Alex</option>"));
    assert!(html.contains("data-operator=\"Alex\""));
    assert!(html.contains("Anzahl der Einträge pro Arbeiter"));
}

#[tokio::test]
async fn chart_has_one_bar_per_distinct_operator() {
    let state = memory_state();

    let mut clicks = 0;
    for op in ["Mo", "Sam", "Mo"] {
        send(&state, post(&format!("n_clicks={clicks}&operator={op}"))).await;
        clicks += 1;
    }

    let (_, html) = send(&state, get("/")).await;
    assert_eq!(html.matches("<rect class=\"bar\"").count(), 2);
    assert!(html.contains("data-operator=\"Mo\""));
    assert!(html.contains("data-operator=\"Sam\""));

    let (status, json) = send(&state, get("/api/chart")).await;
    assert_eq!(status, StatusCode::OK);
    let bars: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        bars,
        serde_json::json!([
            { "operator": "Mo", "count": 2 },
            { "operator": "Sam", "count": 1 }
        ])
    );
}

#[tokio::test]
async fn empty_submit_still_inserts_a_row() {
    let state = memory_state();

    let (status, html) = send(&state, post("n_clicks=7&datum=&operator=&prozess=")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(rows(&state), 1);
    assert!(html.contains("name=\"n_clicks\" value=\"8\""));
    assert!(html.contains("<tr><td></td><td></td><td></td><td></td><td></td><td></td></tr>"));
    assert!(html.contains("<div id=\"bar-chart\"></div>"));
}

#[tokio::test]
async fn user_text_is_escaped() {
    let state = memory_state();

    let (_, html) = send(&state, post("n_clicks=0&prozess=%3Cscript%3Ealert(1)%3C%2Fscript%3E")).await;

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
}

#[tokio::test]
async fn failed_insert_shows_alert_and_keeps_table() {
    let state = memory_state();
    send(&state, post("n_clicks=0&operator=Alex&prozess=erste")).await;

    state.with_db(|p| {
        block_inserts(&p.conn);
        Ok(())
    })
    .unwrap();

    let (status, html) = send(&state, post("n_clicks=1&operator=Mo&prozess=zweite")).await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("alert alert-danger alert-dismissible"));
    assert!(html.contains("Fehler beim Einfügen der Daten:"));
    assert!(html.contains("insert blocked"));
    assert!(html.contains("<td>erste</td>"));
    assert!(!html.contains("<td>zweite</td>"));
    assert_eq!(rows(&state), 1);
}

#[tokio::test]
async fn broken_table_surfaces_as_server_error() {
    let state = memory_state();
    state
        .with_db(|p| {
            p.conn.execute_batch("DROP TABLE tracking;")?;
            Ok(())
        })
        .unwrap();

    let (status, _) = send(&state, get("/")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn malformed_form_is_rejected_by_the_framework() {
    let state = memory_state();

    let (status, _) = send(&state, post("n_clicks=abc")).await;

    assert!(status.is_client_error());
    assert_eq!(rows(&state), 0);
}

#[tokio::test]
async fn records_api_returns_all_rows() {
    let state = memory_state();
    send(&state, post("n_clicks=0&datum=2025-02-01&operator=Sam&status=Erledigt")).await;
    send(&state, post("n_clicks=1&datum=2025-02-02&operator=Mo")).await;

    let (status, json) = send(&state, get("/api/records")).await;

    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    let arr = v.as_array().unwrap();
    assert_eq!(arr.len(), 2);
    assert_eq!(arr[0]["datum"], "2025-02-01");
    assert_eq!(arr[0]["status"], "Erledigt");
    assert_eq!(arr[1]["operator"], "Mo");
    assert!(arr[1]["status"].is_null());
}

#[tokio::test]
async fn healthz_is_ok() {
    let state = memory_state();
    let (status, body) = send(&state, get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "ok");
}

#[tokio::test]
async fn server_start_recreates_an_empty_table() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("tracking_data.db");
    let db_path = db_path.to_string_lossy().to_string();

    // rows left over from a previous run
    {
        let pool = DbPool::new(&db_path).unwrap();
        reset_tracking_table(&pool.conn).unwrap();
        let leftover = EntryForm {
            operator: Some("Alex".into()),
            prozess: Some("alt".into()),
            ..EntryForm::default()
        };
        SubmitLogic::apply(&pool.conn, 1, &leftover).unwrap();
        SubmitLogic::apply(&pool.conn, 2, &leftover).unwrap();
        assert_eq!(count_records(&pool.conn).unwrap(), 2);
    }

    let state = prepare_state(Config::default().with_database(&db_path)).unwrap();

    let (status, json) = send(&state, get("/api/records")).await;
    assert_eq!(status, StatusCode::OK);
    let v: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(v, serde_json::json!([]));
    assert_eq!(rows(&state), 0);
}

#[tokio::test]
async fn server_start_creates_a_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("neu").join("tracking_data.db");

    let state =
        prepare_state(Config::default().with_database(&db_path.to_string_lossy())).unwrap();

    assert!(db_path.exists());
    assert_eq!(rows(&state), 0);
}
