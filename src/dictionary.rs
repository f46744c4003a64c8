use crate::board::letter::normalize_str;
use crate::error::LexiResult;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

/// A word as listed, alongside the normalized form used for lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub word: String,
}

/// A duplicate-free word list, sorted by normalized form.
///
/// Words that normalize alike are one entry; the first spelling seen is
/// the one kept for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    entries: Vec<Entry>,
}

impl Dictionary {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut by_key: BTreeMap<String, String> = BTreeMap::new();
        for w in words {
            let word = w.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            by_key
                .entry(normalize_str(word))
                .or_insert_with(|| word.to_string());
        }
        Self {
            entries: by_key
                .into_iter()
                .map(|(key, word)| Entry { key, word })
                .collect(),
        }
    }

    /// Reads one word per line. Extra tab-separated columns (frequencies,
    /// tags) are ignored, as are blank lines and lines starting with `#`.
    pub fn load_from_reader<R: Read>(reader: R) -> LexiResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .quoting(false)
            .flexible(true)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut raw = Vec::new();
        let mut skipped = 0;
        for (row_idx, result) in rdr.records().enumerate() {
            match result {
                Ok(rec) => match rec.get(0).map(str::trim) {
                    Some(word) if !word.is_empty() => raw.push(word.to_string()),
                    _ => skipped += 1,
                },
                Err(e) => {
                    warn!("[Row {}] word list parse error: {}", row_idx + 1, e);
                    skipped += 1;
                }
            }
        }

        let dict = Self::from_words(raw);
        debug!(
            "Loaded {} words ({} rows skipped)",
            dict.len(),
            skipped
        );
        Ok(dict)
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> LexiResult<Self> {
        let file = File::open(path)?;
        Self::load_from_reader(file)
    }

    pub fn contains(&self, word: &str) -> bool {
        let key = normalize_str(word);
        self.entries
            .binary_search_by(|e| e.key.as_str().cmp(&key))
            .is_ok()
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Words in their listed spelling.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.word.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
