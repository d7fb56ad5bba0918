//! The bundled record type: a bibliographic article keyed by its DOI.

use std::io;
use std::io::BufRead;
use std::io::Write;

use crate::hash_table::Keyed;
use crate::persist::Codec;
use crate::persist::read_field;

/// A bibliographic record, immutable once built.
///
/// The DOI is the designated key; the table never compares any other field.
///
/// # Examples
///
/// ```rust
/// use probe_hash::Article;
///
/// let article = Article::new("10.1000/182", "A Title", "An Author", 2001);
/// assert_eq!(article.doi(), "10.1000/182");
/// assert_eq!(article.year(), 2001);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    doi: String,
    title: String,
    author: String,
    year: u32,
}

impl Article {
    /// Builds a record. The fields cannot be changed afterwards.
    pub fn new(
        doi: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        year: u32,
    ) -> Self {
        Self {
            doi: doi.into(),
            title: title.into(),
            author: author.into(),
            year,
        }
    }

    /// The designated key.
    pub fn doi(&self) -> &str {
        &self.doi
    }

    /// The article's title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The article's author line.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// The publication year.
    pub fn year(&self) -> u32 {
        self.year
    }
}

impl Keyed for Article {
    fn key(&self) -> &str {
        &self.doi
    }
}

/// Newline-delimited, one field per line: DOI, title, author, year.
impl Codec for Article {
    fn encode<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", self.doi)?;
        writeln!(out, "{}", self.title)?;
        writeln!(out, "{}", self.author)?;
        writeln!(out, "{}", self.year)
    }

    fn decode<In: BufRead>(input: &mut In) -> io::Result<Option<Self>> {
        let Some(doi) = read_field(input)? else {
            return Ok(None);
        };
        let Some(title) = read_field(input)? else {
            return Ok(None);
        };
        let Some(author) = read_field(input)? else {
            return Ok(None);
        };
        let Some(year_text) = read_field(input)? else {
            return Ok(None);
        };
        let Ok(year) = year_text.parse() else {
            return Ok(None);
        };
        Ok(Some(Article {
            doi,
            title,
            author,
            year,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_return_the_built_fields() {
        let article = Article::new("10.1000/182", "A Title", "An Author", 2001);
        assert_eq!(article.doi(), "10.1000/182");
        assert_eq!(article.title(), "A Title");
        assert_eq!(article.author(), "An Author");
        assert_eq!(article.year(), 2001);
    }

    #[test]
    fn equality_covers_every_field() {
        let a = Article::new("DOI", "Title", "Author", 2000);
        let b = Article::new("DOI", "Title", "Author", 2000);
        let c = Article::new("DOI", "Title", "Author", 2001);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn encode_writes_one_field_per_line() {
        let article = Article::new("10.1000/182", "A Title", "An Author", 2001);
        let mut buffer = Vec::new();
        article.encode(&mut buffer).unwrap();
        assert_eq!(buffer, b"10.1000/182\nA Title\nAn Author\n2001\n");
    }

    #[test]
    fn decode_round_trips() {
        let original = Article::new("DOI with spaces", "Title_without", "Author with spaces", 1987);
        let mut buffer = Vec::new();
        original.encode(&mut buffer).unwrap();

        let decoded = Article::decode(&mut buffer.as_slice()).unwrap().unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn decode_accepts_a_missing_final_newline() {
        let mut stream: &[u8] = b"DOI\nTitle\nAuthor\n2001";
        let decoded = Article::decode(&mut stream).unwrap().unwrap();
        assert_eq!(decoded.year(), 2001);
    }

    #[test]
    fn decode_of_an_empty_stream_is_none() {
        let mut stream: &[u8] = b"";
        assert!(Article::decode(&mut stream).unwrap().is_none());
    }

    #[test]
    fn truncated_record_decodes_to_none() {
        let mut stream: &[u8] = b"DOI\nTitle\n";
        assert!(Article::decode(&mut stream).unwrap().is_none());
    }

    #[test]
    fn unparseable_year_decodes_to_none() {
        let mut stream: &[u8] = b"DOI\nTitle\nAuthor\nnineteen-eighty\n";
        assert!(Article::decode(&mut stream).unwrap().is_none());
    }
}
