use crate::prelude::*;

/// Ordered word list for one language.
///
/// The order of the underlying JSON array is the seed space for daily-word
/// selection, so it is kept exactly as loaded. A set over the same words
/// backs membership checks.
pub struct Dictionary {
    words: Vec<String>,
    word_set: HashSet<String>,
}

impl Dictionary {
    pub fn new(words: Vec<String>) -> Dictionary {
        let word_set = words.iter().cloned().collect();
        Dictionary { words, word_set }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[derive(Debug)]
pub enum DictionaryError {
    Unavailable(IoError),
    Malformed(serde_json::Error),
}

impl From<IoError> for DictionaryError {
    fn from(e: IoError) -> Self {
        DictionaryError::Unavailable(e)
    }
}

impl From<serde_json::Error> for DictionaryError {
    fn from(e: serde_json::Error) -> Self {
        DictionaryError::Malformed(e)
    }
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DictionaryError::Unavailable(e) => write!(f, "word list unavailable: {e}"),
            DictionaryError::Malformed(e) => write!(f, "word list malformed: {e}"),
        }
    }
}

/// Read-only cache of the word lists for all supported languages.
///
/// Built once at startup, before the API binds, so no request can observe a
/// partially loaded cache. Cheap to clone.
#[derive(Clone)]
pub struct Dictionaries {
    inner: Arc<HashMap<Lang, Dictionary>>,
}

impl Dictionaries {
    /// Loads `words_<code>.json` for every supported language from `dir`.
    pub fn load(dir: &Path) -> Result<Dictionaries, DictionaryError> {
        let mut inner = HashMap::new();
        for lang in Lang::ALL {
            let path = dir.join(format!("words_{lang}.json"));
            let json = std::fs::read_to_string(&path)?;
            let words: Vec<String> = serde_json::from_str(&json)?;
            info!("Loaded {} words for {lang} from {}", words.len(), path.display());
            inner.insert(lang, Dictionary::new(words));
        }
        Ok(Dictionaries { inner: Arc::new(inner) })
    }

    pub fn get(&self, lang: Lang) -> &Dictionary {
        &self.inner[&lang]
    }
}
