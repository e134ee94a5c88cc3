//! Field validators and display status
//!
//! Validators are pure: a raw value (and, for the album, the current
//! store) in, a boolean out.

use std::fmt;

use crate::store::RecordStore;

/// The four form fields, in form order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Album,
    Artist,
    Year,
    Genre,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Album, Field::Artist, Field::Year, Field::Genre];

    pub fn name(self) -> &'static str {
        match self {
            Field::Album => "album",
            Field::Artist => "artist",
            Field::Year => "year",
            Field::Genre => "genre",
        }
    }

    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(name))
    }

    /// Position in `Field::ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    /// Run this field's validator
    pub fn validate(self, value: &str, store: &RecordStore) -> bool {
        match self {
            Field::Album => validate_album(value, store),
            Field::Artist => validate_artist(value),
            Field::Year => validate_year(value),
            Field::Genre => validate_genre(value),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Non-empty and not already in the store (case-insensitive)
pub fn validate_album(value: &str, store: &RecordStore) -> bool {
    !value.is_empty() && !store.contains_album(value)
}

pub fn validate_artist(value: &str) -> bool {
    !value.is_empty()
}

/// Exactly four ASCII digits
pub fn validate_year(value: &str) -> bool {
    value.len() == 4 && value.bytes().all(|b| b.is_ascii_digit())
}

pub fn validate_genre(value: &str) -> bool {
    !value.is_empty()
}

/// Presentation status of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    /// Nothing entered yet
    Empty,
    Valid,
    /// Something entered that fails the check
    Invalid,
}

impl FieldStatus {
    pub fn derive(value: &str, valid: bool) -> Self {
        if value.is_empty() {
            FieldStatus::Empty
        } else if valid {
            FieldStatus::Valid
        } else {
            FieldStatus::Invalid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rcm_common::Record;

    #[test]
    fn test_year_validator() {
        assert!(validate_year("1979"));
        assert!(validate_year("0000"));
        assert!(!validate_year("79"));
        assert!(!validate_year("19799"));
        assert!(!validate_year(""));
        assert!(!validate_year("19a9"));
        assert!(!validate_year(" 1979"));
        assert!(!validate_year("1979\n"));
        // Non-ASCII digits are rejected
        assert!(!validate_year("١٩٧٩"));
    }

    #[test]
    fn test_album_uniqueness() {
        let store = RecordStore::from_records(vec![Record::new("A", "x", "2000", "y")]);

        assert!(!validate_album("A", &store));
        assert!(!validate_album("a", &store));
        assert!(validate_album("B", &store));
        assert!(!validate_album("", &store));
    }

    #[test]
    fn test_album_on_empty_store() {
        let store = RecordStore::new();
        assert!(validate_album("Anything", &store));
    }

    #[test]
    fn test_artist_and_genre_accept_any_non_empty() {
        assert!(validate_artist("x"));
        assert!(validate_artist(" "));
        assert!(!validate_artist(""));
        assert!(validate_genre("Rock"));
        assert!(!validate_genre(""));
    }

    #[test]
    fn test_field_dispatch() {
        let store = RecordStore::new();
        assert!(Field::Year.validate("2020", &store));
        assert!(!Field::Year.validate("twenty", &store));
        assert!(Field::Artist.validate("Radiohead", &store));
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::from_name("album"), Some(Field::Album));
        assert_eq!(Field::from_name("GENRE"), Some(Field::Genre));
        assert_eq!(Field::from_name("label"), None);
        assert_eq!(Field::Year.to_string(), "year");
        for (i, field) in Field::ALL.into_iter().enumerate() {
            assert_eq!(field.index(), i);
        }
    }

    #[test]
    fn test_field_status() {
        assert_eq!(FieldStatus::derive("", false), FieldStatus::Empty);
        assert_eq!(FieldStatus::derive("1979", true), FieldStatus::Valid);
        assert_eq!(FieldStatus::derive("79", false), FieldStatus::Invalid);
    }
}
