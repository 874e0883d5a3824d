use super::*;

pub(super) async fn stats((query, dictionaries): (LangQuery, Dictionaries)) -> Result<impl warp::Reply, Infallible> {
    let lang = query.resolve();
    Ok(Response::builder()
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&StatsResponse {
            total_words: dictionaries.get(lang).len(),
            api_version: API_VERSION,
            lang: lang.code(),
        }).unwrap())
        .unwrap())
}
