//! End-to-end pipeline: extract declarations, group them, synthesize the
//! adapter unit, then dispatch through a bridge carrying the same table the
//! declarations describe.

use jisr_core::bridge::{Bridge, InboundRequest};
use jisr_core::{
    extract_routes, generate_unit_file, group_routes, FileRouterStrategy, HttpMethod,
    TargetStrategy,
};
use serde_json::json;

const ROUTES_SOURCE: &str = r#"
    app.get("/api/workers", list_workers);
    app.post("/api/workers", create_worker);
"#;

#[tokio::test]
async fn extracted_workers_routes_round_trip_through_the_bridge() {
    // Extraction keeps declaration order and normalizes verbs.
    let routes = extract_routes(ROUTES_SOURCE);
    assert_eq!(routes.len(), 2);
    assert_eq!(routes[0].method, HttpMethod::Get);
    assert_eq!(routes[1].method, HttpMethod::Post);

    // Both declarations collapse into one group carrying both methods.
    let groups = group_routes(&routes);
    assert_eq!(groups.len(), 1);
    let group = groups.values().next().unwrap();
    assert_eq!(group.canonical_path, "workers");
    let methods: Vec<_> = group.methods.iter().copied().collect();
    assert_eq!(methods, vec![HttpMethod::Get, HttpMethod::Post]);

    // The synthesizer emits exactly one unit per method, wired to the
    // literal registered path.
    let strategy = FileRouterStrategy;
    let code = generate_unit_file(group, &strategy);
    assert_eq!(code.matches("pub async fn get(").count(), 1);
    assert_eq!(code.matches("pub async fn post(").count(), 1);
    assert!(code.contains("HttpMethod::Get, \"/api/workers\""));
    assert_eq!(
        strategy.unit_file_path(group),
        std::path::PathBuf::from("workers/route.rs")
    );

    // A bridge whose table carries the declared GET handler answers the
    // unit's dispatch with the handler output verbatim.
    let bridge = Bridge::new(Box::new(|mut app| {
        Box::pin(async move {
            app.get("/api/workers", |_req, res, _next| {
                Box::pin(async move {
                    res.json(json!([]));
                    Ok(())
                })
            });
            app
        })
    }));

    let lookup_path = group.lookup_path(HttpMethod::Get).to_string();
    let out = bridge
        .dispatch(HttpMethod::Get, &lookup_path, InboundRequest::new())
        .await;
    assert_eq!(out.status, 200);
    assert_eq!(out.body, json!([]));

    // The POST unit's lookup misses because nothing registered it.
    let out = bridge
        .dispatch(HttpMethod::Post, "/api/workers", InboundRequest::new())
        .await;
    assert_eq!(out.status, 404);
}
