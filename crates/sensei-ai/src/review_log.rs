//! In-memory log of completed reviews for the current session.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use sensei_common::Language;

/// Number of entries in [`ReviewStats::recent`].
const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReviewRecord {
    pub language: Language,
    pub code: String,
    pub question: Option<String>,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl ReviewRecord {
    pub fn new(
        language: Language,
        code: impl Into<String>,
        question: Option<&str>,
        response: impl Into<String>,
    ) -> Self {
        Self {
            language,
            code: code.into(),
            question: question.map(str::to_string),
            response: response.into(),
            created_at: Utc::now(),
        }
    }

    fn matches(&self, needle: &str) -> bool {
        self.code.to_lowercase().contains(needle)
            || self
                .question
                .as_deref()
                .is_some_and(|q| q.to_lowercase().contains(needle))
            || self.language.as_str().contains(needle)
    }
}

/// Summary numbers over the log.
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewStats {
    pub total: usize,
    pub languages_used: usize,
    /// Mean code length in characters; zero for an empty log.
    pub average_code_chars: f64,
    pub by_language: BTreeMap<Language, usize>,
    /// Most recent first.
    pub recent: Vec<ReviewRecord>,
}

#[derive(Debug, Clone, Default)]
pub struct ReviewLog {
    records: Vec<ReviewRecord>,
}

impl ReviewLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, record: ReviewRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[ReviewRecord] {
        &self.records
    }

    /// Records in any of `languages` whose code, question or language tag
    /// contains `term`, case-insensitively.
    ///
    /// An empty language list and a blank term each match everything.
    pub fn query(&self, term: &str, languages: &[Language]) -> Vec<&ReviewRecord> {
        let needle = term.trim().to_lowercase();
        self.records
            .iter()
            .filter(|r| languages.is_empty() || languages.contains(&r.language))
            .filter(|r| needle.is_empty() || r.matches(&needle))
            .collect()
    }

    pub fn stats(&self) -> ReviewStats {
        let mut by_language = BTreeMap::new();
        for r in &self.records {
            *by_language.entry(r.language).or_insert(0) += 1;
        }

        let total_chars: usize = self.records.iter().map(|r| r.code.chars().count()).sum();
        let average_code_chars = if self.records.is_empty() {
            0.0
        } else {
            total_chars as f64 / self.records.len() as f64
        };

        ReviewStats {
            total: self.records.len(),
            languages_used: by_language.len(),
            average_code_chars,
            by_language,
            recent: self.records.iter().rev().take(RECENT_LIMIT).cloned().collect(),
        }
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
