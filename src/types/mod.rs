//! Core types for extracted race results.
//!
//! The type system maps directly onto the archive's weekly results pages:
//! - [`WeekResults`] is one week's event: a Strava segment reference plus
//!   the men's and women's result lists
//! - [`Entry`] is a single parsed table row
//! - [`Rider`] identifies a competitor by series-wide id and display name
//! - [`Division`] is the competitive category a table caption names
//!
//! All types are immutable once constructed and serializable, so callers can
//! re-render them in whatever flat format they need without reparsing.

mod entry;
mod results;

pub use entry::{Entry, Rider};
pub use results::{Division, WeekResults};

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;

    proptest! {
        #[test]
        fn unrecognized_captions_never_map_to_a_division(caption in "[a-zA-Z ]{0,24}") {
            prop_assume!(caption != "Men" && caption != "Women");
            prop_assert!(Division::from_caption(&caption).is_none());
        }
    }

    #[test]
    fn caption_mapping_is_exact() {
        assert_eq!(Division::from_caption("Men"), Some(Division::Male));
        assert_eq!(Division::from_caption("Women"), Some(Division::Female));
        // Casing and pluralization variants are not recognized
        assert_eq!(Division::from_caption("men"), None);
        assert_eq!(Division::from_caption("MEN"), None);
        assert_eq!(Division::from_caption("Woman"), None);
        assert_eq!(Division::from_caption(" Men "), None);
    }

    #[test]
    fn division_codes() {
        assert_eq!(Division::Male.code(), "M");
        assert_eq!(Division::Female.code(), "F");
    }
}
