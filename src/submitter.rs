pub const SEARCH_PATH: &str = "/search";

/// Where the home form sends the user for `query`, or `None` when the
/// query is blank. The query is encoded as typed, surrounding spaces included.
pub fn navigation_target(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!("{SEARCH_PATH}?q={}", urlencoding::encode(query)))
}

#[test]
fn test_navigation_target() {
    assert_eq!(navigation_target("rust").as_deref(), Some("/search?q=rust"));
    assert_eq!(
        navigation_target("a b&c=d").as_deref(),
        Some("/search?q=a%20b%26c%3Dd")
    );
    assert_eq!(
        navigation_target(" padded ").as_deref(),
        Some("/search?q=%20padded%20")
    );
    assert_eq!(
        navigation_target("日本").as_deref(),
        Some("/search?q=%E6%97%A5%E6%9C%AC")
    );
}

#[test]
fn test_navigation_target_blank() {
    assert!(navigation_target("").is_none());
    assert!(navigation_target("   ").is_none());
    assert!(navigation_target("\t\n").is_none());
}
