use crate::prelude::*;

/// Languages the service ships a word list for.
///
/// Resolution is total: any code outside this set falls back to [`DEFAULT_LANG`],
/// so callers never deal with an "unknown language" error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    En,
    Es,
}

pub const DEFAULT_LANG: Lang = Lang::En;

impl Lang {
    pub const ALL: [Lang; 2] = [Lang::En, Lang::Es];

    pub fn resolve(code: &str) -> Lang {
        match code {
            "en" => Lang::En,
            "es" => Lang::Es,
            _ => DEFAULT_LANG,
        }
    }

    /// Canonical lowercase code, as used in seeds, file names and responses.
    pub fn code(&self) -> &'static str {
        match self {
            Lang::En => "en",
            Lang::Es => "es",
        }
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}
