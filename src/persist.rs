//! Dump and load: the byte-oriented persistence format.
//!
//! A dump stream is the table's capacity in decimal text, newline-terminated,
//! followed by every occupied record's encoded form in slot-index order.
//! There is no record count; the reader runs to the end of the stream.
//! Tombstones are never written, so loading replays a clean insertion
//! sequence against the dumped capacity.

use std::io;
use std::io::BufRead;
use std::io::Write;

use thiserror::Error;

use crate::hash_table::HashTable;
use crate::hash_table::Keyed;

/// Per-record text codec used by [`dump`] and [`load`].
pub trait Codec: Sized {
    /// Writes one record in its newline-delimited form.
    fn encode<W: Write>(&self, out: &mut W) -> io::Result<()>;

    /// Reads one record, or `None` when no complete record is left.
    ///
    /// A truncated or corrupt trailing record is `None`, not an error; only
    /// transport failures are errors.
    fn decode<In: BufRead>(input: &mut In) -> io::Result<Option<Self>>;
}

/// Failure to reconstruct a table from a dump stream.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The underlying stream failed.
    #[error("failed to read the dump stream")]
    Io(#[from] io::Error),
    /// The stream does not begin with a decimal capacity.
    #[error("the dump stream does not begin with a capacity")]
    MissingCapacity,
    /// The stream names a capacity the engine refuses.
    #[error("the dumped capacity {0} cannot address a probe sequence")]
    BadCapacity(usize),
}

/// Reads one newline-delimited field: everything up to, but not including,
/// the next newline. `Ok(None)` at end of stream.
pub(crate) fn read_field<In: BufRead>(input: &mut In) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    if line.ends_with('\n') {
        line.pop();
    }
    Ok(Some(line))
}

/// Writes `table` to `out`: the capacity, then every record in slot order.
///
/// # Examples
///
/// ```rust
/// use probe_hash::Article;
/// use probe_hash::HashTable;
/// use probe_hash::persist;
///
/// let mut catalogue = HashTable::new();
/// catalogue
///     .insert(Article::new("10.1000/182", "A Title", "An Author", 2001))
///     .unwrap();
///
/// let mut buffer = Vec::new();
/// persist::dump(&catalogue, &mut buffer).unwrap();
/// assert_eq!(buffer, b"13\n10.1000/182\nA Title\nAn Author\n2001\n");
/// ```
pub fn dump<R, W>(table: &HashTable<R>, out: &mut W) -> io::Result<()>
where
    R: Keyed + Codec,
    W: Write,
{
    writeln!(out, "{}", table.capacity())?;
    for record in table.iter() {
        record.encode(out)?;
    }
    Ok(())
}

/// Rebuilds a table from a dump stream.
///
/// The table is created empty, resized to the dumped capacity before any
/// insert, and then fed records exactly as an external caller would.
/// Decoding stops at the first incomplete record; everything read before it
/// is kept.
///
/// # Examples
///
/// ```rust
/// use probe_hash::Article;
/// use probe_hash::HashTable;
/// use probe_hash::persist;
///
/// let mut catalogue = HashTable::new();
/// catalogue
///     .insert(Article::new("10.1000/182", "A Title", "An Author", 2001))
///     .unwrap();
///
/// let mut buffer = Vec::new();
/// persist::dump(&catalogue, &mut buffer).unwrap();
///
/// let restored: HashTable<Article> = persist::load(&mut buffer.as_slice()).unwrap();
/// assert_eq!(restored.len(), 1);
/// assert_eq!(restored.capacity(), catalogue.capacity());
/// ```
pub fn load<R, In>(input: &mut In) -> Result<HashTable<R>, LoadError>
where
    R: Keyed + Codec,
    In: BufRead,
{
    let capacity = read_field(input)?
        .and_then(|line| line.parse::<usize>().ok())
        .ok_or(LoadError::MissingCapacity)?;

    let mut table = HashTable::new();
    table
        .resize(capacity)
        .map_err(|_| LoadError::BadCapacity(capacity))?;

    while let Some(record) = R::decode(input)? {
        if table.insert(record).is_err() {
            // Every slot holds some other key; nothing further can be placed.
            break;
        }
    }
    Ok(table)
}
