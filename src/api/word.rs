use super::*;

pub(super) async fn today_word((query, dictionaries): (LangQuery, Dictionaries)) -> Result<impl warp::Reply, Infallible> {
    let date = today();
    Ok(word_response(&dictionaries, query.resolve(), &date))
}

pub(super) async fn word_by_date((date, query, dictionaries): (String, LangQuery, Dictionaries)) -> Result<impl warp::Reply, Infallible> {
    if NaiveDate::parse_from_str(&date, "%Y-%m-%d").is_err() {
        debug!("Rejected date parameter {date:?}");
        return Ok(Response::builder()
            .status(400)
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(&ErrorResponse { error: "Invalid date format. Use YYYY-MM-DD" }).unwrap())
            .unwrap());
    }
    Ok(word_response(&dictionaries, query.resolve(), &date))
}

fn word_response(dictionaries: &Dictionaries, lang: Lang, date: &str) -> Response<String> {
    match select_word(dictionaries.get(lang), lang, date) {
        Ok(word) => Response::builder()
            .header("Content-Type", "application/json")
            .body(serde_json::to_string(&WordResponse { word, date, lang: lang.code() }).unwrap())
            .unwrap(),
        Err(e) => {
            error!("Failed to select word for {lang} on {date}: {e}");
            Response::builder()
                .status(500)
                .header("Content-Type", "application/json")
                .body(serde_json::to_string(&ErrorResponse { error: "Word list is empty" }).unwrap())
                .unwrap()
        }
    }
}
