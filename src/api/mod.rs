use crate::prelude::*;
use warp::{Filter, http::Response};
use std::{convert::Infallible, net::SocketAddr};

mod bodies;
mod stats;
mod validate;
mod word;
use {
    bodies::*,
    stats::*,
    validate::*,
    word::*,
};

/// Version constant reported by the stats endpoints.
pub const API_VERSION: &str = "1.1.0";

pub fn routes(dictionaries: Dictionaries) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let hello = warp::path::end().map(|| "Daily word API. Try /api/v1/word?lang=en");

    let d = dictionaries.clone();
    let today_word_v1 = warp::get()
        .and(warp::path!("api" / "v1" / "word"))
        .and(warp::query::<LangQuery>())
        .map(move |q: LangQuery| (q, d.clone()))
        .and_then(today_word);

    let d = dictionaries.clone();
    let word_by_date_v1 = warp::get()
        .and(warp::path!("api" / "v1" / "word" / String))
        .and(warp::query::<LangQuery>())
        .map(move |date: String, q: LangQuery| (date, q, d.clone()))
        .and_then(word_by_date);

    let d = dictionaries.clone();
    let validate_v1 = warp::get()
        .and(warp::path!("api" / "v1" / "validate" / String))
        .and(warp::query::<LangQuery>())
        .map(move |w: String, q: LangQuery| (w, q, d.clone()))
        .and_then(validate);

    let d = dictionaries.clone();
    let stats_v1 = warp::get()
        .and(warp::path!("api" / "v1" / "stats"))
        .and(warp::query::<LangQuery>())
        .map(move |q: LangQuery| (q, d.clone()))
        .and_then(stats);

    // Unversioned aliases kept for clients predating the v1 prefix
    let d = dictionaries.clone();
    let today_word_legacy = warp::get()
        .and(warp::path!("api" / "word"))
        .and(warp::query::<LangQuery>())
        .map(move |q: LangQuery| (q, d.clone()))
        .and_then(today_word);

    let d = dictionaries.clone();
    let word_by_date_legacy = warp::get()
        .and(warp::path!("api" / "word" / String))
        .and(warp::query::<LangQuery>())
        .map(move |date: String, q: LangQuery| (date, q, d.clone()))
        .and_then(word_by_date);

    let d = dictionaries.clone();
    let validate_legacy = warp::get()
        .and(warp::path!("api" / "validate" / String))
        .and(warp::query::<LangQuery>())
        .map(move |w: String, q: LangQuery| (w, q, d.clone()))
        .and_then(validate);

    let d = dictionaries;
    let stats_legacy = warp::get()
        .and(warp::path!("api" / "stats"))
        .and(warp::query::<LangQuery>())
        .map(move |q: LangQuery| (q, d.clone()))
        .and_then(stats);

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type"])
        .allow_methods(vec!["GET"]);

    warp::any().and(
        hello
            .or(today_word_v1)
            .or(word_by_date_v1)
            .or(validate_v1)
            .or(stats_v1)
            .or(today_word_legacy)
            .or(word_by_date_legacy)
            .or(validate_legacy)
            .or(stats_legacy)
    ).with(cors)
}

pub async fn serve_api(api_addr: &str, dictionaries: Dictionaries) {
    info!("API listening on http://{api_addr}/api/v1/word");
    warp::serve(routes(dictionaries)).run(api_addr.parse::<SocketAddr>().unwrap()).await;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn test_dictionaries() -> Dictionaries {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words_en.json"), r#"["APPLE","BRAVE","CRANE"]"#).unwrap();
        fs::write(dir.path().join("words_es.json"), r#"["GATOS","PERRO","TIGRE"]"#).unwrap();
        Dictionaries::load(dir.path()).unwrap()
    }

    async fn get(path: &str) -> (u16, serde_json::Value) {
        let routes = routes(test_dictionaries());
        let resp = warp::test::request().path(path).reply(&routes).await;
        let body = serde_json::from_slice(resp.body()).unwrap_or(serde_json::Value::Null);
        (resp.status().as_u16(), body)
    }

    #[tokio::test]
    async fn word_by_date_returns_pinned_word() {
        let (status, body) = get("/api/v1/word/2024-01-01?lang=en").await;
        assert_eq!(status, 200);
        assert_eq!(body["word"], "BRAVE");
        assert_eq!(body["date"], "2024-01-01");
        assert_eq!(body["lang"], "en");
    }

    #[tokio::test]
    async fn lang_defaults_to_english() {
        let (status, body) = get("/api/v1/word/2024-01-01").await;
        assert_eq!(status, 200);
        assert_eq!(body["word"], "BRAVE");
        assert_eq!(body["lang"], "en");
    }

    #[tokio::test]
    async fn unknown_lang_echoes_resolved_code() {
        let (status, body) = get("/api/v1/word/2024-01-01?lang=fr").await;
        assert_eq!(status, 200);
        assert_eq!(body["word"], "BRAVE");
        assert_eq!(body["lang"], "en");
    }

    #[tokio::test]
    async fn spanish_list_is_independent() {
        let (status, body) = get("/api/v1/word/2024-01-01?lang=es").await;
        assert_eq!(status, 200);
        assert_eq!(body["word"], "GATOS");
        assert_eq!(body["lang"], "es");
    }

    #[tokio::test]
    async fn malformed_dates_are_rejected() {
        for path in ["/api/v1/word/2024-13-40", "/api/v1/word/not-a-date", "/api/v1/word/2024-02-30"] {
            let (status, body) = get(path).await;
            assert_eq!(status, 400);
            assert_eq!(body["error"], "Invalid date format. Use YYYY-MM-DD");
        }
    }

    #[tokio::test]
    async fn today_word_uses_current_date() {
        let (status, body) = get("/api/v1/word?lang=en").await;
        assert_eq!(status, 200);
        assert_eq!(body["date"], today());
        let word = body["word"].as_str().unwrap();
        assert!(["APPLE", "BRAVE", "CRANE"].contains(&word));
    }

    #[tokio::test]
    async fn validate_checks_membership_and_shape() {
        let (status, body) = get("/api/v1/validate/crane?lang=en").await;
        assert_eq!(status, 200);
        assert_eq!(body["word"], "CRANE");
        assert_eq!(body["valid"], true);
        assert_eq!(body["lang"], "en");

        let (_, body) = get("/api/v1/validate/cranes?lang=en").await;
        assert_eq!(body["word"], "CRANES");
        assert_eq!(body["valid"], false);

        let (_, body) = get("/api/v1/validate/gatos?lang=es").await;
        assert_eq!(body["valid"], true);
    }

    #[tokio::test]
    async fn stats_report_list_size_and_version() {
        let (status, body) = get("/api/v1/stats?lang=es").await;
        assert_eq!(status, 200);
        assert_eq!(body["total_words"], 3);
        assert_eq!(body["api_version"], API_VERSION);
        assert_eq!(body["lang"], "es");
    }

    #[tokio::test]
    async fn legacy_aliases_match_v1() {
        for (legacy, v1) in [
            ("/api/word/2024-01-01?lang=en", "/api/v1/word/2024-01-01?lang=en"),
            ("/api/validate/crane?lang=en", "/api/v1/validate/crane?lang=en"),
            ("/api/stats?lang=es", "/api/v1/stats?lang=es"),
        ] {
            let (legacy_status, legacy_body) = get(legacy).await;
            let (v1_status, v1_body) = get(v1).await;
            assert_eq!(legacy_status, v1_status);
            assert_eq!(legacy_body, v1_body);
        }
    }

    #[tokio::test]
    async fn empty_list_is_a_server_error() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("words_en.json"), "[]").unwrap();
        fs::write(dir.path().join("words_es.json"), "[]").unwrap();
        let routes = routes(Dictionaries::load(dir.path()).unwrap());
        let resp = warp::test::request().path("/api/v1/word/2024-01-01").reply(&routes).await;
        assert_eq!(resp.status().as_u16(), 500);
        let body: serde_json::Value = serde_json::from_slice(resp.body()).unwrap();
        assert_eq!(body["error"], "Word list is empty");
    }
}
