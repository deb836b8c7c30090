use courier::http::parser::{ParseError, parse_http_request};
use courier::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\nUser-Agent: curl/8.5.0\r\nAccept: */*\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.user_agent, "curl/8.5.0");
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /files/notes HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\nContent-Length: 5\r\n\r\nhello";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/files/notes");
    assert_eq!(parsed.post_data, vec!["hello".to_string()]);
    assert_eq!(parsed.post_field(), "hello");
}

#[test]
fn test_parse_form_body_splits_on_ampersand() {
    let req = b"POST /files/f HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\n\r\nname=a&age=3&x";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.post_data, vec!["name=a", "age=3", "x"]);
    assert_eq!(parsed.post_field(), "name=a");
}

#[test]
fn test_parse_request_without_body_has_empty_field() {
    let req = b"POST /files/f HTTP/1.1\r\nHost: localhost\r\nUser-Agent: test\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.post_data, vec![String::new()]);
    assert_eq!(parsed.post_field(), "");
}

#[test]
fn test_parse_user_agent_is_read_from_third_line() {
    // Header order matters: line index 2 is taken whatever it is.
    let req = b"GET /user-agent HTTP/1.1\r\nHost: localhost\r\nAccept: */*\r\nUser-Agent: late\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.user_agent, "Accept: */*");
}

#[test]
fn test_parse_missing_user_agent_line_is_empty() {
    let req = b"GET /user-agent HTTP/1.1\r\nHost: localhost";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.user_agent, "");
}

#[test]
fn test_parse_bare_line_feeds() {
    let req = b"GET /echo/abc HTTP/1.1\nHost: localhost\nUser-Agent: lf-only\n\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/echo/abc");
    assert_eq!(parsed.user_agent, "lf-only");
}

#[test]
fn test_parse_request_with_path_and_query_string() {
    let req = b"GET /echo/search?q=rust HTTP/1.1\r\nHost: example.com\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/echo/search?q=rust");
}

#[test]
fn test_parse_unknown_method_is_kept() {
    let req = b"BREW /pot HTTP/1.1\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::Other("BREW".to_string()));
}

#[test]
fn test_parse_request_line_without_path() {
    let result = parse_http_request(b"GET\r\nHost: localhost\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MissingPath)));
}

#[test]
fn test_parse_blank_request_line() {
    let result = parse_http_request(b"\r\n\r\n");

    assert!(matches!(result, Err(ParseError::MissingMethod)));
}

#[test]
fn test_parse_invalid_utf8_is_lossy() {
    let req = b"GET /echo/\xff HTTP/1.1\r\n\r\n";
    let parsed = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/echo/\u{FFFD}");
}
