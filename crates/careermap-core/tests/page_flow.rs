//! End-to-end flows through the core: load a dataset, filter it, and drive the
//! map the way the trail page does.

use std::io::Write;

use careermap_core::loader::{load_roles, try_load_roles};
use careermap_core::map::FOCUS_ZOOM;
use careermap_core::{
    markers_for, CareerMapError, DatasetSource, LngLat, MapCommand, MapHandle, MapReadiness,
    RoleId, TrailState,
};
use futures::channel::mpsc;
use tempfile::NamedTempFile;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

// ============================================================================
// Test Utilities
// ============================================================================

/// Write a dataset to a temp file and return it with its source
fn dataset(body: &str) -> (NamedTempFile, DatasetSource) {
    let mut file = NamedTempFile::new().expect("create temp dataset");
    file.write_all(body.as_bytes()).expect("write temp dataset");
    let source = DatasetSource::File(file.path().to_path_buf());
    (file, source)
}

/// Serve exactly one HTTP response on a local port and return its URL
async fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.unwrap();
    });

    format!("http://{addr}/data/roles.json")
}

fn ready_map() -> (MapReadiness, mpsc::UnboundedReceiver<MapCommand>) {
    let (tx, rx) = mpsc::unbounded();
    (MapReadiness::Ready(MapHandle::new(tx)), rx)
}

fn drain(rx: &mut mpsc::UnboundedReceiver<MapCommand>) -> Vec<MapCommand> {
    let mut commands = Vec::new();
    while let Ok(Some(command)) = rx.try_next() {
        commands.push(command);
    }
    commands
}

const THREE_ROLES: &str = r#"[
    { "id": "salesforce-enterprise-campaigns", "title": "Enterprise Campaigns Director",
      "company": "Salesforce", "startYear": 2021, "endYear": 2024,
      "zoneIds": ["demand-gen-fields"], "lat": 62.0, "lng": 38.5 },
    { "id": "redhat-abm", "title": "ABM Program Lead", "company": "Red Hat",
      "startYear": 2017, "endYear": 2020, "zoneIds": ["abm-kingdom"],
      "coordinates": [71.0, 44.0] },
    { "id": "prgx-digital-abm", "title": "Digital ABM Manager", "company": "PRGX",
      "startYear": 2014, "endYear": 2017, "zoneIds": ["martech-mountain"],
      "coordinates": "somewhere near the mountain" }
]"#;

// ============================================================================
// Loading
// ============================================================================

#[tokio::test]
async fn test_three_roles_two_markers_three_cards() {
    let (_file, source) = dataset(THREE_ROLES);
    let roles = load_roles(&source).await;

    // The list view draws one card per filtered role, so the filtered
    // length is the card count.
    let trail = TrailState::new(roles);
    assert_eq!(trail.filtered().len(), 3, "every role gets a list card");
    assert_eq!(markers_for(trail.filtered()).len(), 2, "only placeable roles get a marker");
}

#[tokio::test]
async fn test_file_load_orders_by_end_year() {
    let (_file, source) = dataset(
        r#"[
            { "id": "mid", "endYear": 2020 },
            { "id": "current" },
            { "id": "latest", "endYear": 2023 }
        ]"#,
    );
    let roles = try_load_roles(&source).await.unwrap();
    let ids: Vec<_> = roles.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["latest", "mid", "current"]);
}

#[tokio::test]
async fn test_malformed_dataset_degrades_to_empty() {
    let _ = tracing_subscriber::fmt::try_init();

    let (_file, source) = dataset("{ not json ]");
    assert!(load_roles(&source).await.is_empty());
    assert!(matches!(
        try_load_roles(&source).await,
        Err(CareerMapError::Parse(_))
    ));
}

#[tokio::test]
async fn test_http_dataset_loads() {
    let _ = tracing_subscriber::fmt::try_init();

    let url = serve_once("200 OK", r#"[{ "id": "remote", "title": "Remote Role", "lat": 1, "lng": 2 }]"#).await;
    let roles = try_load_roles(&DatasetSource::parse(&url)).await.unwrap();
    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].coordinates(), Some(LngLat::new(2.0, 1.0)));
}

#[tokio::test]
async fn test_http_error_status_degrades_to_empty() {
    let _ = tracing_subscriber::fmt::try_init();

    let url = serve_once("404 Not Found", "missing").await;
    let source = DatasetSource::parse(&url);
    match try_load_roles(&source).await {
        Err(CareerMapError::Status { status, .. }) => assert_eq!(status, 404),
        other => panic!("expected a status error, got {other:?}"),
    }

    let url = serve_once("500 Internal Server Error", "boom").await;
    assert!(load_roles(&DatasetSource::parse(&url)).await.is_empty());
}

// ============================================================================
// Camera synchronization
// ============================================================================

#[tokio::test]
async fn test_activation_sends_one_camera_transition() {
    let (_file, source) = dataset(THREE_ROLES);
    let trail = TrailState::new(load_roles(&source).await);
    let (map, mut rx) = ready_map();

    let role = trail.find(&RoleId::new("redhat-abm")).unwrap();
    TrailState::activate(role, &map);

    let commands = drain(&mut rx);
    let transitions: Vec<_> = commands.iter().filter(|c| c.moves_camera()).collect();
    assert_eq!(transitions.len(), 1);
    match transitions[0] {
        MapCommand::EaseTo { center, zoom, .. } => {
            assert_eq!(*center, LngLat::new(71.0, 44.0));
            assert_eq!(*zoom, FOCUS_ZOOM);
        }
        other => panic!("expected an eased transition, got {other:?}"),
    }
    assert!(commands.contains(&MapCommand::Highlight {
        id: RoleId::new("redhat-abm")
    }));
}

#[tokio::test]
async fn test_activating_unplaceable_role_leaves_camera_alone() {
    let (_file, source) = dataset(THREE_ROLES);
    let trail = TrailState::new(load_roles(&source).await);
    let (map, mut rx) = ready_map();

    let role = trail.find(&RoleId::new("prgx-digital-abm")).unwrap();
    assert_eq!(TrailState::activate(role, &map), 0);
    assert!(drain(&mut rx).is_empty());
}

#[tokio::test]
async fn test_search_refits_camera() {
    let (_file, source) = dataset(THREE_ROLES);
    let mut trail = TrailState::new(load_roles(&source).await);
    let (map, mut rx) = ready_map();

    // Before the map is ready nothing is sent
    assert!(!trail.sync_camera(&MapReadiness::Pending));

    assert!(trail.sync_camera(&map));
    assert_eq!(drain(&mut rx).len(), 1);

    // Zone name search narrows to one placeable role
    trail.set_query("kingdom");
    assert!(trail.sync_camera(&map));
    match drain(&mut rx).as_slice() {
        [MapCommand::FitBounds { bounds, .. }] => {
            assert_eq!(bounds.min, LngLat::new(71.0, 44.0));
            assert_eq!(bounds.max, LngLat::new(71.0, 44.0));
        }
        other => panic!("expected one bounds fit, got {other:?}"),
    }

    // Only the unplaceable role matches: camera stays put
    trail.set_query("prgx");
    assert_eq!(trail.filtered().len(), 1);
    assert!(!trail.sync_camera(&map));
    assert!(drain(&mut rx).is_empty());
}
