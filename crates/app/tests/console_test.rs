//! End-to-end tests of the console against a mocked Imageer API.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::Arc;

use imageer_application::context::ExecutionContext;
use imageer_application::error::LoadError;
use imageer_application::ports::KeyValueStorage;
use imageer_application::router::PageData;
use imageer_application::stores::{ImagePreferencesStore, ThemeStore, ToastStore};
use imageer_console::{Console, ConsoleError, PageOutcome, PrefsCommand, ThemeCommand};
use imageer_domain::{PerPage, SortOrder, Theme, ToastLevel};
use imageer_infrastructure::{
    ConsoleConfig, EnvSystemTheme, FileKeyValueStorage, MemoryStorage, ReqwestTransport,
    SystemClock,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user(role: &str) -> Value {
    json!({
        "id": "u-1",
        "createdAt": "2025-01-01T00:00:00Z",
        "updatedAt": "2025-01-01T00:00:00Z",
        "role": role,
        "nickname": "ops",
        "email": "ops@imageer.test"
    })
}

fn page(total: u64) -> Value {
    json!({"items": [], "total": total})
}

fn app_error(message: &str, code_id: i64, code_name: &str) -> Value {
    json!({"message": message, "codeId": code_id, "codeName": code_name})
}

fn console_with(
    server: &MockServer,
    context: ExecutionContext,
    transport: ReqwestTransport,
    storage: Arc<dyn KeyValueStorage>,
) -> Console {
    let config = ConsoleConfig {
        api_base_url: Some(server.uri()),
        ..ConsoleConfig::default()
    };
    let theme = ThemeStore::new(Arc::clone(&storage));
    theme.init(&EnvSystemTheme::with_preference(false));

    Console::new(
        config,
        context,
        Arc::new(transport),
        ToastStore::new(Arc::new(SystemClock::new())),
        ImagePreferencesStore::load(storage),
        theme,
    )
}

fn console(server: &MockServer, context: ExecutionContext) -> Console {
    console_with(
        server,
        context,
        ReqwestTransport::new(5_000).unwrap(),
        Arc::new(MemoryStorage::new()),
    )
}

async fn mount_admin(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("ADMIN")))
        .mount(server)
        .await;
}

#[tokio::test]
async fn dashboard_reports_totals() {
    let server = MockServer::start().await;
    mount_admin(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/projects"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(42)))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/service-accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(5)))
        .expect(1)
        .mount(&server)
        .await;

    let report = console(&server, ExecutionContext::ServerRender)
        .load_page("/")
        .await
        .unwrap();

    let PageOutcome::Loaded(loaded) = report.result else {
        panic!("expected a loaded page, got {:?}", report.result);
    };
    let PageData::Dashboard(dashboard) = loaded.page else {
        panic!("expected the dashboard");
    };
    assert_eq!(dashboard.stats.projects, 42);
    assert_eq!(dashboard.stats.service_accounts, 5);
    assert!(report.toasts.is_empty());
}

#[tokio::test]
async fn expired_session_redirects_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(app_error(
                "unauthenticated",
                2000,
                "UNAUTHORIZED",
            )),
        )
        .mount(&server)
        .await;

    let report = console(&server, ExecutionContext::ServerRender)
        .load_page("/original/path")
        .await;

    // Unknown paths are rejected before any request
    assert!(matches!(
        report,
        Err(ConsoleError::Load(LoadError::NotFound(_)))
    ));

    let report = console(&server, ExecutionContext::ServerRender)
        .load_page("/service-accounts/new")
        .await
        .unwrap();
    let PageOutcome::Redirect(redirect) = report.result else {
        panic!("expected a redirect");
    };
    assert_eq!(redirect.status, 307);
    let target = url::Url::parse("http://localhost")
        .unwrap()
        .join(&redirect.location)
        .unwrap();
    assert_eq!(target.path(), "/login");
    assert_eq!(
        target.query_pairs().into_owned().collect::<Vec<_>>(),
        vec![("redirect".to_string(), "/service-accounts/new".to_string())]
    );
}

#[tokio::test]
async fn guest_is_sent_to_unauthorized_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("GUEST")))
        .mount(&server)
        .await;

    let report = console(&server, ExecutionContext::ServerRender)
        .load_page("/projects")
        .await
        .unwrap();

    assert_eq!(
        serde_json::to_value(&report.result).unwrap(),
        json!({"outcome": "redirect", "status": 307, "location": "/login?error=unauthorized"})
    );
}

#[tokio::test]
async fn interactive_failure_raises_one_error_toast() {
    let server = MockServer::start().await;
    mount_admin(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/projects/p-1"))
        .respond_with(ResponseTemplate::new(503).set_body_json(app_error(
            "storage offline",
            15000,
            "SERVICE_UNAVAILABLE",
        )))
        .mount(&server)
        .await;

    let console = console(&server, ExecutionContext::Interactive);
    let error = console.load_page("/projects/p-1").await.unwrap_err();

    let ConsoleError::Load(LoadError::Api(api)) = error else {
        panic!("expected an API error, got {error:?}");
    };
    assert_eq!(api.code_name(), "SERVICE_UNAVAILABLE");
    let toasts = console.toasts.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert_eq!(toasts[0].message, "storage offline");
}

#[tokio::test]
async fn interactive_client_error_raises_warning() {
    let server = MockServer::start().await;
    mount_admin(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/projects"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad paging"))
        .mount(&server)
        .await;

    let console = console(&server, ExecutionContext::Interactive);
    let error = console.load_page("/projects?limit=0").await.unwrap_err();

    assert!(matches!(error, ConsoleError::Load(LoadError::Client(_))));
    let toasts = console.toasts.toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Warning);
    assert_eq!(toasts[0].message, "Bad Request");
}

#[tokio::test]
async fn server_render_never_raises_toasts() {
    let server = MockServer::start().await;
    mount_admin(&server).await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/projects"))
        .respond_with(ResponseTemplate::new(500).set_body_json(app_error(
            "boom",
            13000,
            "INTERNAL_SERVER_ERROR",
        )))
        .mount(&server)
        .await;

    let console = console(&server, ExecutionContext::ServerRender);
    assert!(console.load_page("/images").await.is_err());
    assert!(console.toasts.is_empty());
}

#[tokio::test]
async fn forwarded_cookie_reaches_the_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/users/me"))
        .and(header("cookie", "session=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user("ADMIN")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/admin/projects"))
        .and(header("cookie", "session=s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(0)))
        .expect(1)
        .mount(&server)
        .await;

    let console = console_with(
        &server,
        ExecutionContext::ServerRender,
        ReqwestTransport::new(5_000)
            .unwrap()
            .with_cookie("session=s3cret"),
        Arc::new(MemoryStorage::new()),
    );
    let report = console.load_page("/upload-test").await.unwrap();

    assert!(matches!(report.result, PageOutcome::Loaded(_)));
}

#[tokio::test]
async fn preferences_and_theme_survive_restart() {
    let server = MockServer::start().await;
    let state = TempDir::new().unwrap();
    let open = || -> Arc<dyn KeyValueStorage> {
        Arc::new(FileKeyValueStorage::open(state.path()).unwrap())
    };

    let first = console_with(
        &server,
        ExecutionContext::Interactive,
        ReqwestTransport::new(5_000).unwrap(),
        open(),
    );
    first
        .run_prefs(PrefsCommand::Set {
            sort_by: None,
            sort_order: Some(SortOrder::Asc),
            per_page: Some(PerPage::Ten),
        })
        .unwrap();
    let report = first
        .run_theme(ThemeCommand::Set { theme: Theme::Dark })
        .unwrap();
    assert_eq!(report.data_theme.as_deref(), Some("dark"));

    let second = console_with(
        &server,
        ExecutionContext::Interactive,
        ReqwestTransport::new(5_000).unwrap(),
        open(),
    );
    let prefs = second.run_prefs(PrefsCommand::Show).unwrap();
    assert_eq!(prefs.sort_order, SortOrder::Asc);
    assert_eq!(prefs.per_page, PerPage::Ten);

    let theme = second.run_theme(ThemeCommand::Show).unwrap();
    assert_eq!(theme.theme, Theme::Dark);
    assert!(theme.explicit);

    let cleared = second.run_theme(ThemeCommand::Clear).unwrap();
    assert_eq!(cleared.theme, Theme::Light);
    assert!(!cleared.explicit);
}
