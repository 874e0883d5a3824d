use super::*;

#[derive(Deserialize, Serialize)]
pub(super) struct LangQuery {
    pub lang: Option<String>,
}

impl LangQuery {
    pub fn resolve(&self) -> Lang {
        self.lang.as_deref().map(Lang::resolve).unwrap_or(DEFAULT_LANG)
    }
}

#[derive(Serialize)]
pub(super) struct WordResponse<'a> {
    pub word: &'a str,
    pub date: &'a str,
    pub lang: &'static str,
}

#[derive(Serialize)]
pub(super) struct ValidateResponse {
    pub word: String,
    pub valid: bool,
    pub lang: &'static str,
}

#[derive(Serialize)]
pub(super) struct StatsResponse {
    pub total_words: usize,
    pub api_version: &'static str,
    pub lang: &'static str,
}

#[derive(Serialize)]
pub(super) struct ErrorResponse {
    pub error: &'static str,
}
