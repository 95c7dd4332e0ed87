//! Book catalogue: the fixed, ordered list of audiobooks shown by the carousel

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::fields::FieldId;

/// Sample catalogue bundled with the binary
const SAMPLE_CATALOG: &str = include_str!("../assets/books.json");

/// One audiobook record, immutable once loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// File path or URL of the cover image
    pub cover_art: String,
    pub book_title: String,
    pub book_subtitle: String,
    pub rating_star: f32,
    pub number_of_reviews: String,
    pub book_cash_price: f32,
    pub discount: String,
    pub author: String,
    pub narrator: String,
    pub length: String,
    pub release_date: String,
    #[serde(default)]
    pub language: String,
    pub publisher: String,
    pub category: String,
    pub ai_summary: String,
    pub ai_review: String,
    /// Comma-delimited tag list
    pub topic_tags: String,
}

/// Raw value of one field, borrowed from a book
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(f32),
}

impl Book {
    pub fn value(&self, field: FieldId) -> FieldValue<'_> {
        match field {
            FieldId::BookTitle => FieldValue::Text(&self.book_title),
            FieldId::BookSubtitle => FieldValue::Text(&self.book_subtitle),
            FieldId::RatingStar => FieldValue::Number(self.rating_star),
            FieldId::NumberOfReviews => FieldValue::Text(&self.number_of_reviews),
            FieldId::BookCashPrice => FieldValue::Number(self.book_cash_price),
            FieldId::Discount => FieldValue::Text(&self.discount),
            FieldId::Length => FieldValue::Text(&self.length),
            FieldId::Author => FieldValue::Text(&self.author),
            FieldId::Narrator => FieldValue::Text(&self.narrator),
            FieldId::ReleaseDate => FieldValue::Text(&self.release_date),
            FieldId::Publisher => FieldValue::Text(&self.publisher),
            FieldId::Category => FieldValue::Text(&self.category),
            FieldId::AiSummary => FieldValue::Text(&self.ai_summary),
            FieldId::AiReview => FieldValue::Text(&self.ai_review),
            FieldId::TopicTags => FieldValue::Text(&self.topic_tags),
        }
    }
}

/// Non-empty ordered list of books
#[derive(Debug, Clone)]
pub struct Catalog {
    books: Vec<Book>,
}

impl Catalog {
    /// Build a catalogue, rejecting an empty book list
    pub fn new(books: Vec<Book>) -> Result<Self> {
        if books.is_empty() {
            bail!("Book catalogue is empty");
        }
        Ok(Self { books })
    }

    /// The catalogue embedded in the binary
    pub fn sample() -> Result<Self> {
        Self::from_json(SAMPLE_CATALOG).context("Failed to parse bundled sample catalogue")
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        let books: Vec<Book> =
            serde_json::from_str(contents).context("Invalid book catalogue JSON")?;
        Self::new(books)
    }

    /// Load a catalogue from a JSON file holding an array of book records
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalogue from {}", path.display()))?;
        let catalog = Self::from_json(&contents)
            .with_context(|| format!("Failed to load catalogue from {}", path.display()))?;
        info!(path = %path.display(), books = catalog.len(), "Loaded book catalogue");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Book at `index`, wrapping modulo the catalogue length
    pub fn get(&self, index: usize) -> &Book {
        &self.books[index % self.books.len()]
    }
}
