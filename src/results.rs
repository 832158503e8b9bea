use std::fmt;
use std::str::FromStr;

use crate::client::SearchClient;
use crate::data_models::SearchResult;

/// Which data the results view renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultsSource {
    /// Locally fabricated cards only. The backend is never called.
    #[default]
    Placeholder,
    /// Whatever `/api/search` returns.
    Backend,
    /// Placeholder cards followed by the backend results.
    Merged,
}

#[derive(Debug, thiserror::Error)]
#[error("unknown results source {0:?}, expected placeholder, backend or merged")]
pub struct ParseResultsSourceError(String);

impl FromStr for ResultsSource {
    type Err = ParseResultsSourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "placeholder" => Ok(ResultsSource::Placeholder),
            "backend" => Ok(ResultsSource::Backend),
            "merged" => Ok(ResultsSource::Merged),
            _ => Err(ParseResultsSourceError(s.to_string())),
        }
    }
}

impl fmt::Display for ResultsSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ResultsSource::Placeholder => "placeholder",
            ResultsSource::Backend => "backend",
            ResultsSource::Merged => "merged",
        };
        f.write_str(name)
    }
}

pub fn placeholder_results(query: &str) -> Vec<SearchResult> {
    vec![
        SearchResult::new("n.ai.in – The Smarter Search", "https://n.ai.in")
            .with_snippet("Smarter than Google. Get results, code, news in 0.4s."),
        SearchResult::new(
            format!("You searched for \"{query}\""),
            format!("https://example.com?q={query}"),
        )
        .with_snippet("Example results for your query."),
    ]
}

/// Everything the results page needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView {
    pub query: String,
    pub results: Vec<SearchResult>,
    /// The "About N results" figure.
    pub about: u32,
}

fn fabricated_count() -> u32 {
    fastrand::u32(..10_000)
}

fn received_count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

impl ResultsView {
    pub async fn assemble(source: ResultsSource, query: &str, client: &SearchClient) -> ResultsView {
        let placeholders = placeholder_results(query);

        let (results, about) = match source {
            ResultsSource::Placeholder => (placeholders, fabricated_count()),
            ResultsSource::Backend => match client.search(query).await {
                Ok(payload) => {
                    let about = received_count(payload.results.len());
                    (payload.results, about)
                }
                Err(e) => {
                    tracing::warn!("search backend unavailable, showing placeholders: {:#}", e);
                    (placeholders, fabricated_count())
                }
            },
            ResultsSource::Merged => {
                let mut results = placeholders;
                match client.search(query).await {
                    Ok(payload) => results.extend(payload.results),
                    Err(e) => {
                        tracing::warn!("search backend unavailable, showing placeholders: {:#}", e);
                    }
                }
                (results, fabricated_count())
            }
        };

        ResultsView {
            query: query.to_string(),
            results,
            about,
        }
    }
}

#[test]
fn test_results_source_parse() {
    assert_eq!("placeholder".parse::<ResultsSource>().unwrap(), ResultsSource::Placeholder);
    assert_eq!(" Backend ".parse::<ResultsSource>().unwrap(), ResultsSource::Backend);
    assert_eq!("MERGED".parse::<ResultsSource>().unwrap(), ResultsSource::Merged);
    assert!("both".parse::<ResultsSource>().is_err());
    assert_eq!(ResultsSource::Merged.to_string(), "merged");
}

#[test]
fn test_placeholder_results() {
    let results = placeholder_results("rust");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].link, "https://n.ai.in");
    assert_eq!(results[1].title, "You searched for \"rust\"");
    assert_eq!(results[1].link, "https://example.com?q=rust");
    assert!(results.iter().all(|r| r.snippet.is_some()));
}

#[test]
fn test_received_count_saturates() {
    assert_eq!(received_count(2), 2);
    assert_eq!(received_count(u32::MAX as usize), u32::MAX);
    #[cfg(target_pointer_width = "64")]
    assert_eq!(received_count(usize::MAX), u32::MAX);
}
