use crate::data_models::{SearchResponse, SearchResult};

/// Builds the fixed search payload. The query only shows up in the message.
pub fn respond(query: Option<&str>) -> SearchResponse {
    let query = query.unwrap_or_default();
    SearchResponse {
        message: format!("You searched for {query}"),
        results: vec![
            SearchResult::new("Result 1", "https://example.com/1"),
            SearchResult::new("Result 2", "https://example.com/2"),
        ],
    }
}

#[test]
fn test_respond_echoes_query() {
    let res = respond(Some("rust async"));
    assert_eq!(res.message, "You searched for rust async");
    assert_eq!(res.results.len(), 2);
}

#[test]
fn test_respond_ignores_query_for_results() {
    let a = respond(Some("foo"));
    let b = respond(None);
    assert_eq!(a.results, b.results);
    assert_eq!(b.message, "You searched for ");
    assert!(a.results.iter().all(|r| r.snippet.is_none()));
}
