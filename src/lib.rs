pub mod input;
pub mod matcher;
pub mod report;
pub mod scorer;

/// Absolute-difference threshold used instead of exact float equality,
/// both when sorting and when searching.
pub const TOLERANCE: f64 = 0.01;

/// A Russian entry: one input line, scored by `index` alone.
#[derive(Debug, Clone, PartialEq)]
pub struct RuEntry {
    pub text: String,
    pub index: f64,
}

impl RuEntry {
    pub fn new(text: String) -> Self {
        RuEntry { text, index: 0.0 }
    }

    /// Write-once scoring pass; the entry is only read after this.
    pub fn score(&mut self) {
        self.index = scorer::affinity_index(&self.text);
    }
}

/// An English entry: a `text|comment` input line, scored by
/// `index + comment_index` combined.
#[derive(Debug, Clone, PartialEq)]
pub struct EnEntry {
    pub text: String,
    pub index: f64,
    pub comment: String,
    pub comment_index: f64,
}

impl EnEntry {
    pub fn new(text: String, comment: String) -> Self {
        EnEntry {
            text,
            index: 0.0,
            comment,
            comment_index: 0.0,
        }
    }

    /// Write-once scoring pass; the entry is only read after this.
    pub fn score(&mut self) {
        self.index = scorer::affinity_index(&self.text);
        self.comment_index = scorer::comment_index(&self.comment);
    }

    /// The sort and search key for English entries.
    pub fn combined(&self) -> f64 {
        self.index + self.comment_index
    }
}
