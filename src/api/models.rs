use serde::Deserialize;

#[derive(Debug, Default)]
pub struct SearchParams {
    pub q: Option<String>,
}

impl SearchParams {
    /// Builds the params from raw query pairs. The first `q` wins.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value));
        SearchParams { q }
    }
}

#[derive(Debug, Deserialize)]
pub struct QueryForm {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[test]
fn test_search_params_first_q_wins() {
    let pairs = vec![
        ("other".to_string(), "1".to_string()),
        ("q".to_string(), "a".to_string()),
        ("q".to_string(), "b".to_string()),
    ];
    assert_eq!(SearchParams::from_pairs(pairs).q.as_deref(), Some("a"));
    assert!(SearchParams::from_pairs(Vec::new()).q.is_none());
}
