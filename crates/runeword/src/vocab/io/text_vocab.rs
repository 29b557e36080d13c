//! # Delimited Text Vocabulary IO

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
};

use crate::{
    errors::{RWResult, RunewordError},
    types::TokenType,
    vocab::{VocabLine, VocabTable},
};

/// Load a [`VocabTable`] from a delimited text vocab file.
///
/// The file is open only for the duration of the read.
///
/// ## Arguments
/// * `path` - the path to the vocabulary file.
/// * `separator` - the field separator.
/// * `unk_token` - the fallback token for lookups which miss.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(path)))]
pub fn load_vocab_path<T, P>(
    path: P,
    separator: &str,
    unk_token: &str,
) -> RWResult<VocabTable<T>>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    log::debug!("vocab: loading {}", path.display());

    let reader = BufReader::new(File::open(path)?);
    read_vocab(reader, separator, unk_token)
}

/// Read a [`VocabTable`] from a delimited text line reader.
///
/// Lines are one of:
/// ```terminaloutput
/// {TOKEN}
/// {ID}{SEP}{TOKEN}
/// {TOKEN}{SEP}{ID}
/// ```
///
/// ## Arguments
/// * `reader` - the line reader.
/// * `separator` - the field separator.
/// * `unk_token` - the fallback token for lookups which miss.
pub fn read_vocab<T, R>(
    reader: R,
    separator: &str,
    unk_token: &str,
) -> RWResult<VocabTable<T>>
where
    T: TokenType,
    R: BufRead,
{
    let lines = reader.lines().collect::<Result<Vec<String>, _>>()?;
    VocabTable::from_lines(lines, separator, unk_token)
}

/// Save a [`VocabTable`] to a delimited text vocab file.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `path` - the path to save the vocabulary to.
/// * `separator` - the field separator.
pub fn save_vocab_path<T, P>(
    vocab: &VocabTable<T>,
    path: P,
    separator: &str,
) -> RWResult<()>
where
    T: TokenType,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_vocab(vocab, &mut writer, separator)?;
    writer.flush()?;
    Ok(())
}

/// Write a [`VocabTable`] to a [`Write`] writer.
///
/// Lines are written in id order:
/// ```terminaloutput
/// {ID}{SEP}{TOKEN}
/// ```
///
/// The unknown token is not recorded; it is supplied again on load.
///
/// Every line must parse back to the same id and token. A token which is
/// empty, ends in whitespace, or contains the separator or a line break
/// fails with [`RunewordError::UnwritableToken`], and nothing is written.
///
/// ## Arguments
/// * `vocab` - the vocabulary to save.
/// * `writer` - the writer to target.
/// * `separator` - the field separator.
pub fn write_vocab<T, W>(
    vocab: &VocabTable<T>,
    writer: &mut W,
    separator: &str,
) -> RWResult<()>
where
    T: TokenType,
    W: Write,
{
    if separator.is_empty() {
        return Err(RunewordError::EmptySeparator);
    }

    let mut items: Vec<(T, &str)> = vocab.iter().map(|(token, id)| (id, token)).collect();
    items.sort_by_key(|&(id, _)| id);

    if let Some(&(_, token)) = items
        .iter()
        .find(|&&(id, token)| !is_writable_entry(id, token, separator))
    {
        return Err(RunewordError::UnwritableToken {
            token: token.to_string(),
            separator: separator.to_string(),
        });
    }

    for (id, token) in items {
        writeln!(writer, "{id}{separator}{token}")?;
    }

    Ok(())
}

/// Does `{ID}{SEP}{TOKEN}` read back as the same entry?
fn is_writable_entry<T: TokenType>(
    id: T,
    token: &str,
    separator: &str,
) -> bool {
    if token.contains(['\n', '\r']) {
        return false;
    }
    let Some(id) = id.to_u64() else {
        return false;
    };
    let line = format!("{id}{separator}{token}");
    VocabLine::parse(&line, separator) == Some(VocabLine::IdToken(id, token))
}
