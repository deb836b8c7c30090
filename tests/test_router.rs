use courier::files::FileStore;
use courier::http::request::{Method, RequestBuilder};
use courier::http::response::{Response, StatusCode};
use courier::routing::{Route, Router};

fn router() -> Router {
    Router::new(FileStore::new("/nonexistent-courier-root")).unwrap()
}

async fn handle(router: &Router, method: Method, path: &str) -> Response {
    let request = RequestBuilder::new()
        .method(method)
        .path(path)
        .user_agent("foobar/1.2.3")
        .build()
        .unwrap();
    router.handle(&request).await
}

#[test]
fn test_resolve_priority_order() {
    let router = router();

    assert_eq!(router.resolve("/"), Route::Root);
    assert_eq!(router.resolve("/user-agent"), Route::UserAgent);
    assert_eq!(router.resolve("/echo/hi"), Route::Echo("hi"));
    assert_eq!(router.resolve("/files/report.txt"), Route::File("report.txt"));
    assert_eq!(router.resolve("/nope"), Route::NotFound);
}

#[test]
fn test_resolve_exact_routes_are_exact() {
    let router = router();

    assert_eq!(router.resolve("/user-agent/x"), Route::NotFound);
    assert_eq!(router.resolve("//"), Route::NotFound);
}

#[test]
fn test_resolve_echo_of_files_path() {
    assert_eq!(router().resolve("/echo/files/x"), Route::Echo("files/x"));
}

#[tokio::test]
async fn test_root_is_empty_ok() {
    assert_eq!(handle(&router(), Method::GET, "/").await, Response::ok());
}

#[tokio::test]
async fn test_user_agent_echoed() {
    let response = handle(&router(), Method::GET, "/user-agent").await;
    assert_eq!(response, Response::text("foobar/1.2.3"));
}

#[tokio::test]
async fn test_echo_returns_suffix() {
    for value in ["abc", "with/slashes/inside", "x"] {
        let response = handle(&router(), Method::GET, &format!("/echo/{value}")).await;
        assert_eq!(response, Response::text(value));
    }
}

#[tokio::test]
async fn test_method_ignored_outside_files() {
    let response = handle(&router(), Method::POST, "/echo/abc").await;
    assert_eq!(response, Response::text("abc"));
}

#[tokio::test]
async fn test_unknown_path_not_found() {
    let response = handle(&router(), Method::GET, "/nope").await;
    assert_eq!(response.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_missing_file_not_found() {
    let response = handle(&router(), Method::GET, "/files/missing.txt").await;
    assert_eq!(response.status, StatusCode::NotFound);
}

#[tokio::test]
async fn test_other_methods_on_files_not_allowed() {
    for method in [Method::PUT, Method::DELETE, Method::Other("BREW".to_string())] {
        let response = handle(&router(), method, "/files/a").await;
        assert_eq!(response.status, StatusCode::MethodNotAllowed);
    }
}
