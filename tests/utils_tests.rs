//! Integration tests for the query codec, splitting and joining.

use std::collections::HashMap;

use urlkit::{join, parse_query, split, split_path, stringify_query, QueryValue, UrlError};

#[test]
fn test_query_parsing() {
    let params = parse_query("?q=rust&page=2&sort=relevance").unwrap();
    assert_eq!(params.get("q"), Some(&"rust".to_string()));
    assert_eq!(params.get("page"), Some(&"2".to_string()));
    assert_eq!(params.get("sort"), Some(&"relevance".to_string()));
    assert_eq!(params.len(), 3);

    let keys: Vec<&str> = params.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["page", "q", "sort"]);
}

#[test]
fn test_query_decode_failure_is_surfaced() {
    let err = parse_query("ok=1&bad=%E0%A4").unwrap_err();
    assert_eq!(err, UrlError::InvalidUtf8("%E0%A4".to_string()));
    assert_eq!(err.input(), "%E0%A4");
}

#[test]
fn test_query_stringify() {
    assert_eq!(stringify_query(Vec::<(String, QueryValue)>::new()), "");

    assert_eq!(
        stringify_query(vec![("a b", "my image.png"), ("foo", "test")]),
        "a%20b=my%20image.png&foo=test"
    );

    assert_eq!(
        stringify_query(vec![
            ("zzz", QueryValue::from(34)),
            ("foo", QueryValue::from("Hello world!")),
        ]),
        "foo=Hello%20world!&zzz=34"
    );
}

#[test]
fn test_query_stringify_filters() {
    let mut query: HashMap<&str, QueryValue> = HashMap::new();
    query.insert("flag", true.into());
    query.insert("off", false.into());
    query.insert("missing", None::<i32>.into());
    query.insert("ratio", 0.25.into());

    assert_eq!(stringify_query(query), "flag=true&ratio=0.25");
}

#[test]
fn test_query_round_trip() {
    let original = "a=1&b=two%20words&c=%26%3D";
    let params = parse_query(original).unwrap();
    assert_eq!(params.get("c"), Some(&"&=".to_string()));
    assert_eq!(stringify_query(&params), original);
}

#[test]
fn test_split_empty_urls() {
    assert!(split("").is_empty());
    assert!(split("/").is_empty());
}

#[test]
fn test_split_paths() {
    assert_eq!(split("/foo//bar/index.php"), vec!["foo", "", "bar", "index.php"]);
    assert_eq!(split("/foo//bar/index.php/"), vec!["foo", "", "bar", "index.php"]);
    assert_eq!(split("/api/User/[userId]"), vec!["api", "User", "[userId]"]);
}

#[test]
fn test_split_full_and_partial_urls() {
    assert_eq!(split("www.example.com/index.php"), vec!["www.example.com", "index.php"]);
    assert_eq!(split("localhost:3000/User//"), vec!["localhost:3000", "User", ""]);
    assert_eq!(
        split("http://localhost:3000/test/index.php?id=36&a=b#top"),
        vec!["http://localhost:3000", "test", "index.php?id=36&a=b#top"]
    );
}

#[test]
fn test_split_path_never_detects_scheme() {
    assert_eq!(split_path("/a://b"), vec!["a:", "", "b"]);
    assert_eq!(split("/a://b"), vec!["/a://b"]);
}

#[test]
fn test_join_empty_urls() {
    assert_eq!(join(Vec::<String>::new()), "/");
    assert_eq!(join([""]), "/");
}

#[test]
fn test_join_full_and_partial_urls() {
    let test_cases = vec![
        (
            vec!["/foo//bar/index.php/", "/api/User/[userId]/"],
            "/foo//bar/index.php/api/User/[userId]",
        ),
        (
            vec!["http://test.com/foo//bar/index.php/", "/api/User/[userId]/"],
            "http://test.com/foo//bar/index.php/api/User/[userId]",
        ),
        (
            vec!["/foo//bar/index.php/", "http://api/User/[userId]/"],
            "/foo//bar/index.php/User/[userId]",
        ),
        (
            vec![
                "http://a:b@localhost:3000/test/index.php?id=36&a=b#top",
                "https://nodejs.org/api/http.html/#http_http_request_url_options_callback",
                "/foo//bar/index.php/?foo=bar",
            ],
            "http://a:b@localhost:3000/test/index.php/api/http.html/foo//bar/index.php?foo=bar",
        ),
    ];

    for (fragments, expected) in test_cases {
        assert_eq!(join(&fragments), expected, "join failed for: {:?}", fragments);
    }
}
