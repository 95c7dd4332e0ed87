//! Field formatting: raw book values to display fragments
//!
//! Two flavours exist. The card formatter renders the center card of the
//! carousel; the compact formatter renders single-line values inside bubbles
//! and preview rows of the edit overlay.

use crate::catalog::{Book, FieldValue};
use crate::fields::FieldId;

const STAR: char = '★';
const MAX_STARS: usize = 5;

/// A formatted value ready for rendering
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Text(String),
    /// Star glyphs followed by the numeric rating
    Stars { glyphs: String, rating: f32 },
    /// Individual tag chips
    Tags(Vec<String>),
}

fn value_text(value: FieldValue<'_>) -> String {
    match value {
        FieldValue::Text(text) => text.to_string(),
        FieldValue::Number(number) => number.to_string(),
    }
}

fn price(value: FieldValue<'_>) -> String {
    format!("${}", value_text(value))
}

/// Split a comma-delimited tag list, trimming whitespace and dropping empties
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Format a field for the center card
pub fn card_fragment(field: FieldId, book: &Book) -> Fragment {
    let value = book.value(field);
    match field {
        // Always five glyphs, the numeric rating carries the precision
        FieldId::RatingStar => Fragment::Stars {
            glyphs: STAR.to_string().repeat(MAX_STARS),
            rating: book.rating_star,
        },
        FieldId::BookCashPrice => Fragment::Text(price(value)),
        FieldId::TopicTags => Fragment::Tags(split_tags(&book.topic_tags)),
        FieldId::Author => Fragment::Text(format!("By {}", book.author)),
        FieldId::Narrator => Fragment::Text(format!("Narrated by {}", book.narrator)),
        _ => Fragment::Text(value_text(value)),
    }
}

/// Format a field as one compact line (bubbles, preview rows)
pub fn compact_value(field: FieldId, book: &Book) -> String {
    let value = book.value(field);
    match field {
        FieldId::RatingStar => {
            let count = book.rating_star.floor().clamp(0.0, MAX_STARS as f32) as usize;
            STAR.to_string().repeat(count)
        }
        FieldId::BookCashPrice => price(value),
        FieldId::NumberOfReviews => format!("{} reviews", book.number_of_reviews),
        _ => value_text(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn book() -> Book {
        let mut book = Catalog::sample().unwrap().get(0).clone();
        book.rating_star = 4.6;
        book.book_cash_price = 24.99;
        book.number_of_reviews = "2,841".to_string();
        book.topic_tags = "Coastal, Mystery , ,Found Family".to_string();
        book
    }

    #[test]
    fn test_card_rating_always_five_stars() {
        let fragment = card_fragment(FieldId::RatingStar, &book());
        assert_eq!(
            fragment,
            Fragment::Stars {
                glyphs: "★★★★★".to_string(),
                rating: 4.6
            }
        );
    }

    #[test]
    fn test_card_price_and_people() {
        let book = book();
        assert_eq!(card_fragment(FieldId::BookCashPrice, &book), Fragment::Text("$24.99".into()));
        assert_eq!(card_fragment(FieldId::Author, &book), Fragment::Text("By Mara Ellison".into()));
        assert_eq!(
            card_fragment(FieldId::Narrator, &book),
            Fragment::Text("Narrated by Tomas Reyes".into())
        );
        // Reviews are shown raw on the card, the rating row provides context
        assert_eq!(card_fragment(FieldId::NumberOfReviews, &book), Fragment::Text("2,841".into()));
    }

    #[test]
    fn test_card_whole_price_has_no_decimals() {
        let mut book = book();
        book.book_cash_price = 15.0;
        assert_eq!(card_fragment(FieldId::BookCashPrice, &book), Fragment::Text("$15".into()));
    }

    #[test]
    fn test_card_tags_split_and_trimmed() {
        let fragment = card_fragment(FieldId::TopicTags, &book());
        assert_eq!(
            fragment,
            Fragment::Tags(vec!["Coastal".into(), "Mystery".into(), "Found Family".into()])
        );
    }

    #[test]
    fn test_compact_rating_floors_and_clamps() {
        let mut book = book();
        assert_eq!(compact_value(FieldId::RatingStar, &book), "★★★★");

        book.rating_star = 7.2;
        assert_eq!(compact_value(FieldId::RatingStar, &book), "★★★★★");

        book.rating_star = -1.0;
        assert_eq!(compact_value(FieldId::RatingStar, &book), "");
    }

    #[test]
    fn test_compact_reviews_and_price() {
        let book = book();
        assert_eq!(compact_value(FieldId::NumberOfReviews, &book), "2,841 reviews");
        assert_eq!(compact_value(FieldId::BookCashPrice, &book), "$24.99");
        assert_eq!(compact_value(FieldId::Author, &book), "Mara Ellison");
    }
}
