//! Center card composition
//!
//! Some fields are never shown on their own row: the price rides along with
//! the discount and the review count rides along with the rating. The pairing
//! lives in [`PAIRED_FIELDS`].

use crate::catalog::Book;
use crate::fields::FieldId;
use crate::format::{Fragment, card_fragment};

/// `(primary, secondary)`: the secondary renders beside the primary
pub const PAIRED_FIELDS: [(FieldId, FieldId); 2] = [
    (FieldId::Discount, FieldId::BookCashPrice),
    (FieldId::RatingStar, FieldId::NumberOfReviews),
];

pub fn paired_secondary(primary: FieldId) -> Option<FieldId> {
    PAIRED_FIELDS
        .iter()
        .find(|(p, _)| *p == primary)
        .map(|(_, secondary)| *secondary)
}

/// True for fields that only ever render beside their primary
pub fn is_secondary(field: FieldId) -> bool {
    PAIRED_FIELDS.iter().any(|(_, secondary)| *secondary == field)
}

/// One row of the center card
#[derive(Debug, Clone, PartialEq)]
pub enum CardRow {
    Single {
        field: FieldId,
        fragment: Fragment,
    },
    Paired {
        field: FieldId,
        fragment: Fragment,
        /// Present only when the secondary field is also active
        secondary: Option<(FieldId, Fragment)>,
    },
}

impl CardRow {
    pub fn field(&self) -> FieldId {
        match self {
            CardRow::Single { field, .. } | CardRow::Paired { field, .. } => *field,
        }
    }
}

/// Build the card rows for `book` in the order of `active`
pub fn card_rows(active: &[FieldId], book: &Book) -> Vec<CardRow> {
    active
        .iter()
        .filter(|field| !is_secondary(**field))
        .map(|&field| match paired_secondary(field) {
            Some(secondary) => CardRow::Paired {
                field,
                fragment: card_fragment(field, book),
                secondary: active
                    .contains(&secondary)
                    .then(|| (secondary, card_fragment(secondary, book))),
            },
            None => CardRow::Single {
                field,
                fragment: card_fragment(field, book),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn book() -> Book {
        Catalog::sample().unwrap().get(0).clone()
    }

    #[test]
    fn test_pairing_table() {
        assert_eq!(paired_secondary(FieldId::Discount), Some(FieldId::BookCashPrice));
        assert_eq!(paired_secondary(FieldId::RatingStar), Some(FieldId::NumberOfReviews));
        assert_eq!(paired_secondary(FieldId::BookTitle), None);
        assert!(is_secondary(FieldId::BookCashPrice));
        assert!(is_secondary(FieldId::NumberOfReviews));
        assert!(!is_secondary(FieldId::Discount));
    }

    #[test]
    fn test_rating_row_absorbs_reviews() {
        let book = book();
        let active = [FieldId::BookTitle, FieldId::RatingStar, FieldId::NumberOfReviews];
        let rows = card_rows(&active, &book);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0],
            CardRow::Single {
                field: FieldId::BookTitle,
                fragment: Fragment::Text(book.book_title.clone()),
            }
        );
        match &rows[1] {
            CardRow::Paired { field, fragment, secondary } => {
                assert_eq!(*field, FieldId::RatingStar);
                assert!(matches!(fragment, Fragment::Stars { glyphs, .. } if glyphs.chars().count() == 5));
                assert_eq!(
                    secondary,
                    &Some((FieldId::NumberOfReviews, Fragment::Text(book.number_of_reviews.clone())))
                );
            }
            other => panic!("expected paired rating row, got {other:?}"),
        }
    }

    #[test]
    fn test_secondary_before_primary_still_folds() {
        let book = book();
        let active = [FieldId::BookCashPrice, FieldId::Author, FieldId::Discount];
        let rows = card_rows(&active, &book);

        let fields: Vec<FieldId> = rows.iter().map(CardRow::field).collect();
        assert_eq!(fields, vec![FieldId::Author, FieldId::Discount]);
        assert!(matches!(
            &rows[1],
            CardRow::Paired { secondary: Some((FieldId::BookCashPrice, _)), .. }
        ));
    }

    #[test]
    fn test_lone_secondary_never_renders() {
        let book = book();
        let rows = card_rows(&[FieldId::NumberOfReviews, FieldId::BookCashPrice], &book);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_primary_without_secondary() {
        let book = book();
        let rows = card_rows(&[FieldId::Discount], &book);
        assert_eq!(
            rows,
            vec![CardRow::Paired {
                field: FieldId::Discount,
                fragment: Fragment::Text(book.discount.clone()),
                secondary: None,
            }]
        );
    }
}
