use super::*;

pub(super) async fn validate((candidate, query, dictionaries): (String, LangQuery, Dictionaries)) -> Result<impl warp::Reply, Infallible> {
    let lang = query.resolve();
    let (word, valid) = validate_word(dictionaries.get(lang), &candidate);
    trace!("Validated {word:?} for {lang}: {valid}");
    Ok(Response::builder()
        .header("Content-Type", "application/json")
        .body(serde_json::to_string(&ValidateResponse { word, valid, lang: lang.code() }).unwrap())
        .unwrap())
}
