//! HTML lookup route for GoldenDict-style "website" dictionary sources.
//!
//! Accepts either `?word=cat&source=en&target=zh` or the positional form
//! `?en-zh-cat`, where everything after the second dash is the word.

use std::sync::Arc;

use axum::extract::{RawQuery, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use tracing::{error, warn};

use super::lookup::status_for;
use crate::api::server::AppState;
use crate::config::check_word_length;
use crate::lookup::Definition;

const INVALID_FORMAT: &str = "Invalid request format.";
const UNPARSEABLE_DEFINITION: &str = "Failed to parse AI JSON response.";

/// A decoded GoldenDict request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoldenDictQuery {
    pub word: String,
    pub source: String,
    pub target: String,
}

impl GoldenDictQuery {
    fn new(word: String, source: String, target: String) -> Option<Self> {
        if word.is_empty() || source.is_empty() || target.is_empty() {
            return None;
        }
        Some(Self {
            word,
            source,
            target,
        })
    }
}

/// Decode the raw query string. `None` means the request is malformed.
pub fn parse_query(raw: &str) -> Option<GoldenDictQuery> {
    let pairs: Vec<(String, String)> = url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect();

    if pairs.iter().any(|(k, _)| k == "word") {
        let param = |name: &str| {
            pairs
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };
        return GoldenDictQuery::new(param("word"), param("source"), param("target"));
    }

    // Positional form: split the raw string, then percent-decode each part.
    // `+` and `&` are literal here.
    let mut parts = raw.splitn(3, '-');
    let source = percent_decode(parts.next()?)?;
    let target = percent_decode(parts.next()?)?;
    let word = percent_decode(parts.next()?)?;
    GoldenDictQuery::new(word, source, target)
}

fn percent_decode(part: &str) -> Option<String> {
    urlencoding::decode(part).ok().map(|s| s.into_owned())
}

fn render_error(
    state: &AppState,
    status: StatusCode,
    word: Option<&str>,
    message: &str,
) -> Response {
    match state.renderer.render_error(word, message) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render error page");
            (StatusCode::INTERNAL_SERVER_ERROR, message.to_string()).into_response()
        }
    }
}

/// GET /golden-dict — definition rendered as an HTML page.
pub async fn golden_dict(
    State(state): State<Arc<AppState>>,
    RawQuery(raw): RawQuery,
) -> Response {
    let Some(query) = raw.as_deref().and_then(parse_query) else {
        return render_error(&state, StatusCode::BAD_REQUEST, None, INVALID_FORMAT);
    };
    if let Err(e) = check_word_length(&query.word, state.max_input_chars) {
        return render_error(
            &state,
            StatusCode::BAD_REQUEST,
            Some(&query.word),
            &e.to_string(),
        );
    }

    let bytes = match state
        .engine
        .get_definition(&query.word, &query.source, &query.target)
        .await
    {
        Ok(bytes) => bytes,
        Err(e) => {
            warn!(word = %query.word, error = %e, "GoldenDict lookup failed");
            return render_error(&state, status_for(&e), Some(&query.word), &e.to_string());
        }
    };

    let definition = match Definition::from_slice(&bytes) {
        Ok(d) => d,
        Err(e) => {
            warn!(word = %query.word, error = %e, "Cached definition is not valid JSON");
            return render_error(
                &state,
                StatusCode::INTERNAL_SERVER_ERROR,
                Some(&query.word),
                UNPARSEABLE_DEFINITION,
            );
        }
    };

    match state.renderer.render_definition(&query.word, &definition) {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to render definition page");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::server::build_router;
    use crate::api::server::test_support::{body_string, offline_state, state_with};
    use crate::cache::{DefinitionStore, MemoryStore};
    use crate::providers::MockCompletionClient;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn query(word: &str, source: &str, target: &str) -> Option<GoldenDictQuery> {
        Some(GoldenDictQuery {
            word: word.into(),
            source: source.into(),
            target: target.into(),
        })
    }

    #[test]
    fn test_parse_named_params() {
        assert_eq!(
            parse_query("word=cat&source=en&target=zh"),
            query("cat", "en", "zh")
        );
    }

    #[test]
    fn test_parse_named_params_missing_target() {
        assert_eq!(parse_query("word=cat&source=en"), None);
    }

    #[test]
    fn test_parse_positional() {
        assert_eq!(parse_query("en-zh-cat"), query("cat", "en", "zh"));
    }

    #[test]
    fn test_parse_positional_word_keeps_dashes() {
        assert_eq!(
            parse_query("en-zh-well-known"),
            query("well-known", "en", "zh")
        );
    }

    #[test]
    fn test_parse_positional_percent_encoded() {
        assert_eq!(
            parse_query("zh-en-%E7%8C%AB"),
            query("猫", "zh", "en")
        );
        assert_eq!(parse_query("en-zh-ice%20cream"), query("ice cream", "en", "zh"));
    }

    #[test]
    fn test_parse_positional_keeps_plus_and_ampersand() {
        assert_eq!(parse_query("en-zh-c++"), query("c++", "en", "zh"));
        assert_eq!(parse_query("en-zh-1+1"), query("1+1", "en", "zh"));
        assert_eq!(parse_query("en-zh-AT&T"), query("AT&T", "en", "zh"));
    }

    #[test]
    fn test_parse_positional_invalid_utf8() {
        assert_eq!(parse_query("en-zh-%FF"), None);
    }

    #[test]
    fn test_parse_positional_too_few_parts() {
        assert_eq!(parse_query("en-zh"), None);
        assert_eq!(parse_query("en-zh-"), None);
        assert_eq!(parse_query(""), None);
    }

    #[tokio::test]
    async fn test_golden_dict_renders_definition() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert(
                "en-zh:cat",
                r#"{"p":"kæt","defs":[{"pos":"n.","m":"猫","ex":"A cat purrs."}]}"#,
            )
            .await
            .unwrap();
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();
        let app = build_router(state_with(store, client, 50), None);

        let resp = app.oneshot(get("/golden-dict?en-zh-Cat")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(resp.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/html"));
        let html = body_string(resp).await;
        assert!(html.contains("猫"));
        assert!(html.contains("A cat purrs."));
    }

    #[tokio::test]
    async fn test_golden_dict_generates_on_miss() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|prompt: &str| prompt == "fr run")
            .times(1)
            .returning(|_| {
                Ok("```json\n{\"p\":\"run\",\"defs\":[{\"pos\":\"v.\",\"m\":\"courir\",\"ex\":\"\"}]}\n```".to_string())
            });
        let app = build_router(state_with(Arc::new(MemoryStore::new()), client, 50), None);

        let resp = app
            .oneshot(get("/golden-dict?word=run&source=en&target=fr"))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(body_string(resp).await.contains("courir"));
    }

    #[tokio::test]
    async fn test_golden_dict_positional_word_with_symbols() {
        let mut client = MockCompletionClient::new();
        client
            .expect_complete()
            .withf(|prompt: &str| prompt == "zh at&t")
            .times(1)
            .returning(|_| Ok(r#"{"p":"AT&T","defs":[]}"#.to_string()));
        let store = Arc::new(MemoryStore::new());
        let app = build_router(state_with(store.clone(), client, 50), None);

        let resp = app.oneshot(get("/golden-dict?en-zh-AT&T")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert!(store.get("en-zh:at&t").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_golden_dict_invalid_format() {
        let app = build_router(offline_state(50), None);
        let resp = app.oneshot(get("/golden-dict?en")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(resp).await.contains(INVALID_FORMAT));
    }

    #[tokio::test]
    async fn test_golden_dict_no_query() {
        let app = build_router(offline_state(50), None);
        let resp = app.oneshot(get("/golden-dict")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_golden_dict_unsupported_pair_page() {
        let app = build_router(offline_state(50), None);
        let resp = app.oneshot(get("/golden-dict?en-xx-cat")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(resp)
            .await
            .contains("unsupported language pair: en-xx"));
    }

    #[tokio::test]
    async fn test_golden_dict_unparseable_definition() {
        let store = Arc::new(MemoryStore::new());
        store
            .insert("en-zh:cat", "I am not JSON")
            .await
            .unwrap();
        let mut client = MockCompletionClient::new();
        client.expect_complete().never();
        let app = build_router(state_with(store, client, 50), None);

        let resp = app.oneshot(get("/golden-dict?en-zh-cat")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_string(resp).await.contains(UNPARSEABLE_DEFINITION));
    }

    #[tokio::test]
    async fn test_golden_dict_too_long() {
        let app = build_router(offline_state(3), None);
        let resp = app.oneshot(get("/golden-dict?en-zh-abcd")).await.unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(body_string(resp).await.contains("Max 3 characters"));
    }
}
