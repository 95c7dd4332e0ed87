//! Field catalogue: the fixed set of metadata fields a card can display

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Identifier of a displayable book metadata field
///
/// Serialized with the camelCase names used by the book data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldId {
    BookTitle,
    BookSubtitle,
    RatingStar,
    NumberOfReviews,
    BookCashPrice,
    Discount,
    Length,
    Author,
    Narrator,
    ReleaseDate,
    Publisher,
    Category,
    AiSummary,
    AiReview,
    TopicTags,
}

impl FieldId {
    /// Every field, in descriptor order
    pub const ALL: [FieldId; 15] = [
        FieldId::BookTitle,
        FieldId::BookSubtitle,
        FieldId::RatingStar,
        FieldId::NumberOfReviews,
        FieldId::BookCashPrice,
        FieldId::Discount,
        FieldId::Length,
        FieldId::Author,
        FieldId::Narrator,
        FieldId::ReleaseDate,
        FieldId::Publisher,
        FieldId::Category,
        FieldId::AiSummary,
        FieldId::AiReview,
        FieldId::TopicTags,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::BookTitle => "bookTitle",
            FieldId::BookSubtitle => "bookSubtitle",
            FieldId::RatingStar => "ratingStar",
            FieldId::NumberOfReviews => "numberOfReviews",
            FieldId::BookCashPrice => "bookCashPrice",
            FieldId::Discount => "discount",
            FieldId::Length => "length",
            FieldId::Author => "author",
            FieldId::Narrator => "narrator",
            FieldId::ReleaseDate => "releaseDate",
            FieldId::Publisher => "publisher",
            FieldId::Category => "category",
            FieldId::AiSummary => "aiSummary",
            FieldId::AiReview => "aiReview",
            FieldId::TopicTags => "topicTags",
        }
    }

    /// Position of this field in the fixed descriptor order
    pub fn ordinal(self) -> usize {
        self as usize
    }

    pub fn descriptor(self) -> &'static FieldDescriptor {
        &DESCRIPTORS[self.ordinal()]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown field identifier '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FieldId {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

/// How a field's raw value is typed in the book record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Number,
}

/// Static description of one displayable field
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: &'static str,
    pub kind: ValueKind,
    pub default_position: Position,
}

const fn descriptor(
    id: FieldId,
    label: &'static str,
    kind: ValueKind,
    x: f32,
    y: f32,
) -> FieldDescriptor {
    FieldDescriptor {
        id,
        label,
        kind,
        default_position: Position::new(x, y),
    }
}

/// Indexed by `FieldId::ordinal`
pub static DESCRIPTORS: [FieldDescriptor; 15] = [
    descriptor(FieldId::BookTitle, "Title", ValueKind::Text, -200.0, -150.0),
    descriptor(FieldId::BookSubtitle, "Subtitle", ValueKind::Text, 200.0, -150.0),
    descriptor(FieldId::RatingStar, "Rating Stars", ValueKind::Number, -200.0, 0.0),
    descriptor(FieldId::NumberOfReviews, "Reviews", ValueKind::Text, 200.0, 0.0),
    descriptor(FieldId::BookCashPrice, "Price", ValueKind::Number, -150.0, 150.0),
    descriptor(FieldId::Discount, "Discount", ValueKind::Text, 150.0, 150.0),
    descriptor(FieldId::Length, "Length", ValueKind::Text, 0.0, -200.0),
    descriptor(FieldId::Author, "Author", ValueKind::Text, -180.0, -120.0),
    descriptor(FieldId::Narrator, "Narrator", ValueKind::Text, 180.0, -120.0),
    descriptor(FieldId::ReleaseDate, "Release Date", ValueKind::Text, -160.0, 80.0),
    descriptor(FieldId::Publisher, "Publisher", ValueKind::Text, 160.0, 80.0),
    descriptor(FieldId::Category, "Category", ValueKind::Text, 0.0, 200.0),
    descriptor(FieldId::AiSummary, "AI Summary", ValueKind::Text, -120.0, -180.0),
    descriptor(FieldId::AiReview, "AI Review", ValueKind::Text, 120.0, -180.0),
    descriptor(FieldId::TopicTags, "Topics", ValueKind::Text, 0.0, 180.0),
];

/// Fields shown on the center card before the user customizes anything
pub const DEFAULT_ACTIVE: [FieldId; 5] = [
    FieldId::BookTitle,
    FieldId::BookSubtitle,
    FieldId::Author,
    FieldId::Narrator,
    FieldId::RatingStar,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_table_matches_ordinals() {
        for id in FieldId::ALL {
            assert_eq!(id.descriptor().id, id, "descriptor out of order for {id}");
        }
    }

    #[test]
    fn test_parse_roundtrips_every_identifier() {
        for id in FieldId::ALL {
            assert_eq!(id.as_str().parse::<FieldId>(), Ok(id));
        }
    }

    #[test]
    fn test_parse_unknown_identifier() {
        let err = "coverArt".parse::<FieldId>().unwrap_err();
        assert_eq!(err, UnknownField("coverArt".to_string()));
        assert_eq!(err.to_string(), "unknown field identifier 'coverArt'");
        assert!("".parse::<FieldId>().is_err());
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let json = serde_json::to_string(&FieldId::NumberOfReviews).unwrap();
        assert_eq!(json, "\"numberOfReviews\"");
        let parsed: FieldId = serde_json::from_str("\"aiSummary\"").unwrap();
        assert_eq!(parsed, FieldId::AiSummary);
    }

    #[test]
    fn test_value_kinds() {
        assert_eq!(FieldId::RatingStar.descriptor().kind, ValueKind::Number);
        assert_eq!(FieldId::BookCashPrice.descriptor().kind, ValueKind::Number);
        assert_eq!(FieldId::NumberOfReviews.descriptor().kind, ValueKind::Text);
    }

    #[test]
    fn test_default_active_is_unique() {
        let mut seen = std::collections::HashSet::new();
        assert!(DEFAULT_ACTIVE.iter().all(|id| seen.insert(*id)));
        assert_eq!(FieldId::Author.label(), "Author");
    }
}
