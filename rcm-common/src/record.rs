//! Music record data type
//!
//! A `Record` is the unit exchanged by `GET /records` (as a JSON array) and
//! `POST /records/new` (as a single object). All four fields are plain
//! strings on the wire, including `year`.

use serde::{Deserialize, Serialize};

/// A music album entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub album: String,
    pub artist: String,
    pub year: String,
    pub genre: String,
}

impl Record {
    pub fn new(
        album: impl Into<String>,
        artist: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            album: album.into(),
            artist: artist.into(),
            year: year.into(),
            genre: genre.into(),
        }
    }

    /// Field values in declaration order (album, artist, year, genre)
    pub fn values(&self) -> [&str; 4] {
        [&self.album, &self.artist, &self.year, &self.genre]
    }

    /// Parse a JSON array of records (the `GET /records` body)
    pub fn list_from_json(bytes: &[u8]) -> crate::Result<Vec<Record>> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_order() {
        let record = Record::new("OK Computer", "Radiohead", "1997", "Rock");
        assert_eq!(record.values(), ["OK Computer", "Radiohead", "1997", "Rock"]);
    }

    #[test]
    fn test_json_field_names() {
        let record = Record::new("Kind of Blue", "Miles Davis", "1959", "Jazz");
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["album"], "Kind of Blue");
        assert_eq!(value["artist"], "Miles Davis");
        assert_eq!(value["year"], "1959");
        assert_eq!(value["genre"], "Jazz");
    }

    #[test]
    fn test_year_must_be_string_on_wire() {
        let json = r#"{"album":"A","artist":"B","year":1979,"genre":"C"}"#;
        assert!(serde_json::from_str::<Record>(json).is_err());
    }

    #[test]
    fn test_list_from_json() {
        let json = br#"[{"album":"A","artist":"B","year":"1979","genre":"C"}]"#;
        let records = Record::list_from_json(json).unwrap();
        assert_eq!(records, vec![Record::new("A", "B", "1979", "C")]);

        assert!(Record::list_from_json(b"{not json").is_err());
    }
}
