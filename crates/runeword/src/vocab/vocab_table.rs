//! # Vocabulary Table ``{ String <-> T }``

use crate::{
    errors::{RWResult, RunewordError},
    types::{TokenType, hash_map_with_capacity},
    vocab::{IdTokenMap, ModelVocab, TokenIdMap, VocabLine},
};

/// Bidirectional token vocabulary, with an unknown-token fallback.
///
/// Every entry in `token_map` has exactly one reciprocal entry in `id_map`.
/// The table is immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct VocabTable<T: TokenType> {
    token_map: TokenIdMap<T>,
    id_map: IdTokenMap<T>,
    unk_token: String,
}

impl<T: TokenType> VocabTable<T> {
    /// Build a table from vocabulary lines.
    ///
    /// Each line is one of the [`VocabLine`] shapes; single-field lines take
    /// their 0-based line index as their id. Later lines replace earlier
    /// entries sharing their token or their id.
    ///
    /// ## Arguments
    /// * `lines` - the vocabulary lines.
    /// * `separator` - the field separator, e.g. ``"\t"``.
    /// * `unk_token` - the fallback token for lookups which miss.
    ///
    /// ## Returns
    /// A [`RunewordError::MalformedVocabLine`] naming the first bad line
    /// (1-based); the table otherwise.
    pub fn from_lines<I, S>(
        lines: I,
        separator: &str,
        unk_token: &str,
    ) -> RWResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if separator.is_empty() {
            return Err(RunewordError::EmptySeparator);
        }

        let lines = lines.into_iter();
        let capacity = lines.size_hint().0;
        let mut vocab = Self {
            token_map: hash_map_with_capacity(capacity),
            id_map: hash_map_with_capacity(capacity),
            unk_token: unk_token.to_string(),
        };

        let mut replaced = 0;
        for (idx, line) in lines.enumerate() {
            let line = line.as_ref();
            let malformed = || RunewordError::MalformedVocabLine {
                line: idx + 1,
                content: line.to_string(),
            };

            let parsed = VocabLine::parse(line, separator).ok_or_else(malformed)?;
            let id = match parsed.id() {
                Some(id) => T::from_u64(id),
                None => T::from_usize(idx),
            }
            .ok_or_else(malformed)?;

            if vocab.insert(parsed.token(), id) {
                replaced += 1;
            }
        }

        vocab.token_map.shrink_to_fit();
        vocab.id_map.shrink_to_fit();

        if replaced > 0 {
            log::debug!("vocab: {replaced} entries replaced by later lines");
        }
        log::debug!(
            "vocab: built {} entries; unk token {:?}",
            vocab.len(),
            vocab.unk_token
        );

        Ok(vocab)
    }

    /// Insert an entry, evicting stale reciprocal entries.
    ///
    /// ## Returns
    /// `true` if an earlier entry shared the token or the id.
    fn insert(
        &mut self,
        token: &str,
        id: T,
    ) -> bool {
        let mut replaced = false;

        if let Some(old_id) = self.token_map.insert(token.to_string(), id) {
            replaced = true;
            if old_id != id {
                self.id_map.remove(&old_id);
            }
        }

        if let Some(old_token) = self.id_map.insert(id, token.to_string()) {
            replaced = true;
            if old_token != token {
                self.token_map.remove(&old_token);
            }
        }

        replaced
    }

    /// The number of entries in the table.
    pub fn len(&self) -> usize {
        self.token_map.len()
    }

    /// Returns true if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The configured unknown token.
    pub fn unk_token(&self) -> &str {
        &self.unk_token
    }

    /// The id of the unknown token, if it is in the table.
    pub fn unk_id(&self) -> Option<T> {
        self.lookup_id(&self.unk_token)
    }

    /// Get the ``{ String -> T }`` map.
    pub fn token_map(&self) -> &TokenIdMap<T> {
        &self.token_map
    }

    /// Get the ``{ T -> String }`` map.
    pub fn id_map(&self) -> &IdTokenMap<T> {
        &self.id_map
    }

    /// Iterate over the ``(token, id)`` entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, T)> {
        self.token_map
            .iter()
            .map(|(token, &id)| (token.as_str(), id))
    }

    /// Return the id for a token, without fallback.
    pub fn lookup_id(
        &self,
        token: &str,
    ) -> Option<T> {
        self.token_map.get(token).copied()
    }

    /// Return the token for an id, without fallback.
    pub fn lookup_token(
        &self,
        id: T,
    ) -> Option<&str> {
        self.id_map.get(&id).map(String::as_str)
    }

    fn missing_unk(
        &self,
        key: String,
    ) -> RunewordError {
        RunewordError::MissingUnknownToken {
            unk_token: self.unk_token.clone(),
            key,
        }
    }

    /// Resolve a token to its id, falling back to the unknown token's id.
    ///
    /// ## Returns
    /// [`RunewordError::MissingUnknownToken`] if the token misses,
    /// and the unknown token is not in the table.
    pub fn try_token_to_id(
        &self,
        token: &str,
    ) -> RWResult<T> {
        self.lookup_id(token)
            .or_else(|| self.unk_id())
            .ok_or_else(|| self.missing_unk(token.to_string()))
    }

    /// Resolve an id to its token, falling back to the unknown token.
    ///
    /// ## Returns
    /// [`RunewordError::MissingUnknownToken`] if the id misses,
    /// and the unknown token is not in the table.
    pub fn try_id_to_token(
        &self,
        id: T,
    ) -> RWResult<&str> {
        if let Some(token) = self.lookup_token(id) {
            return Ok(token);
        }
        if self.token_map.contains_key(&self.unk_token) {
            return Ok(&self.unk_token);
        }
        Err(self.missing_unk(id.to_string()))
    }

    /// Resolve each token in order; stops at the first failure.
    pub fn try_tokens_to_ids<S: AsRef<str>>(
        &self,
        tokens: &[S],
    ) -> RWResult<Vec<T>> {
        tokens
            .iter()
            .map(|token| self.try_token_to_id(token.as_ref()))
            .collect()
    }

    /// Resolve each id in order; stops at the first failure.
    pub fn try_ids_to_tokens(
        &self,
        ids: &[T],
    ) -> RWResult<Vec<&str>> {
        ids.iter().map(|&id| self.try_id_to_token(id)).collect()
    }
}

impl<T: TokenType> ModelVocab for VocabTable<T> {
    type Token = T;

    fn vocab_pairs(&self) -> impl Iterator<Item = (&str, T)> {
        self.iter()
    }

    fn unk_token(&self) -> &str {
        &self.unk_token
    }

    fn try_token_to_id(
        &self,
        token: &str,
    ) -> RWResult<T> {
        VocabTable::try_token_to_id(self, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: &[&str] = &["738\t以", "1040\t冬", "1282\t及", "8000\tOOV"];

    #[test]
    fn test_from_lines() {
        type T = u32;
        let vocab: VocabTable<T> = VocabTable::from_lines(LINES, "\t", "OOV").unwrap();

        assert_eq!(vocab.len(), 4);
        assert!(!vocab.is_empty());
        assert_eq!(vocab.unk_token(), "OOV");
        assert_eq!(vocab.unk_id(), Some(8000));
        assert_eq!(vocab.lookup_id("冬"), Some(1040));
        assert_eq!(vocab.lookup_token(1282), Some("及"));
        assert_eq!(vocab.token_map().len(), vocab.id_map().len());
    }

    #[test]
    fn test_single_field_lines_use_line_index() {
        let vocab: VocabTable<u16> =
            VocabTable::from_lines(["[UNK]", "a", "b"], "\t", "[UNK]").unwrap();

        assert_eq!(vocab.lookup_id("[UNK]"), Some(0));
        assert_eq!(vocab.lookup_id("a"), Some(1));
        assert_eq!(vocab.lookup_id("b"), Some(2));
    }

    #[test]
    fn test_mixed_shapes() {
        let lines = ["8000\tOOV", "春\t3266", "x"];
        let vocab: VocabTable<u32> = VocabTable::from_lines(lines, "\t", "OOV").unwrap();

        assert_eq!(vocab.lookup_id("OOV"), Some(8000));
        assert_eq!(vocab.lookup_id("春"), Some(3266));
        assert_eq!(vocab.lookup_id("x"), Some(2));
    }

    #[test]
    fn test_empty() {
        let vocab: VocabTable<u32> =
            VocabTable::from_lines(Vec::<String>::new(), "\t", "OOV").unwrap();
        assert!(vocab.is_empty());
        assert_eq!(vocab.unk_id(), None);
    }

    #[test]
    fn test_malformed_lines() {
        let err = VocabTable::<u32>::from_lines(["a\t1", "x\ty\tz"], "\t", "OOV").unwrap_err();
        match err {
            RunewordError::MalformedVocabLine { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "x\ty\tz");
            }
            other => panic!("unexpected error: {other:?}"),
        }

        let err = VocabTable::<u32>::from_lines([" a\tb "], "\t", "OOV").unwrap_err();
        assert!(matches!(
            err,
            RunewordError::MalformedVocabLine { line: 1, ref content } if content == " a\tb "
        ));
    }

    #[test]
    fn test_id_out_of_range_is_malformed() {
        let err = VocabTable::<u8>::from_lines(["300\tbig"], "\t", "OOV").unwrap_err();
        assert!(matches!(
            err,
            RunewordError::MalformedVocabLine { line: 1, .. }
        ));
    }

    #[test]
    fn test_empty_separator() {
        assert!(matches!(
            VocabTable::<u32>::from_lines(["a"], "", "OOV"),
            Err(RunewordError::EmptySeparator)
        ));
    }

    #[test]
    fn test_last_write_wins() {
        // "a" is re-assigned; id 1 is re-assigned.
        let lines = ["1\ta", "2\ta", "1\tb"];
        let vocab: VocabTable<u32> = VocabTable::from_lines(lines, "\t", "OOV").unwrap();

        assert_eq!(vocab.len(), 2);
        assert_eq!(vocab.lookup_id("a"), Some(2));
        assert_eq!(vocab.lookup_id("b"), Some(1));
        assert_eq!(vocab.lookup_token(2), Some("a"));
        assert_eq!(vocab.lookup_token(1), Some("b"));

        // A shared id drops the earlier token entirely.
        let vocab: VocabTable<u32> =
            VocabTable::from_lines(["5\tx", "5\ty"], "\t", "OOV").unwrap();
        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.lookup_id("x"), None);
        assert_eq!(vocab.lookup_token(5), Some("y"));
    }

    #[test]
    fn test_round_trip() {
        let vocab: VocabTable<u32> = VocabTable::from_lines(LINES, "\t", "OOV").unwrap();
        for (token, id) in vocab.iter() {
            assert_eq!(vocab.try_token_to_id(token).unwrap(), id);
            assert_eq!(vocab.try_id_to_token(id).unwrap(), token);
        }
    }

    #[test]
    fn test_unknown_fallback() {
        let vocab: VocabTable<u32> = VocabTable::from_lines(LINES, "\t", "OOV").unwrap();
        assert_eq!(vocab.try_token_to_id("雪").unwrap(), 8000);
        assert_eq!(vocab.try_id_to_token(1).unwrap(), "OOV");

        let vocab: VocabTable<u32> = VocabTable::from_lines(LINES, "\t", "[UNK]").unwrap();
        match vocab.try_token_to_id("雪").unwrap_err() {
            RunewordError::MissingUnknownToken { unk_token, key } => {
                assert_eq!(unk_token, "[UNK]");
                assert_eq!(key, "雪");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            vocab.try_id_to_token(1),
            Err(RunewordError::MissingUnknownToken { ref key, .. }) if key == "1"
        ));
        // Hits never consult the unknown token.
        assert_eq!(vocab.try_token_to_id("以").unwrap(), 738);
    }

    #[test]
    fn test_sequence_lookups_fail_fast() {
        let vocab: VocabTable<u32> = VocabTable::from_lines(LINES, "\t", "OOV").unwrap();
        assert_eq!(
            vocab.try_tokens_to_ids(&["以", "雪", "及"]).unwrap(),
            vec![738, 8000, 1282]
        );
        assert_eq!(
            vocab.try_ids_to_tokens(&[1040, 7]).unwrap(),
            vec!["冬", "OOV"]
        );

        let vocab: VocabTable<u32> = VocabTable::from_lines(LINES, "\t", "[UNK]").unwrap();
        assert!(vocab.try_tokens_to_ids(&["以", "雪"]).is_err());
        assert!(vocab.try_ids_to_tokens(&[738, 7, 1040]).is_err());
    }

    #[test]
    fn test_model_vocab() {
        fn unk_of<V: ModelVocab>(vocab: &V) -> String {
            vocab.unk_token().to_string()
        }

        let vocab: VocabTable<u32> = VocabTable::from_lines(LINES, "\t", "OOV").unwrap();
        assert_eq!(unk_of(&vocab), "OOV");
        assert_eq!(ModelVocab::try_token_to_id(&vocab, "?").unwrap(), 8000);

        let mut pairs: Vec<(&str, u32)> = vocab.vocab_pairs().collect();
        pairs.sort_by_key(|&(_, id)| id);
        assert_eq!(
            pairs,
            vec![("以", 738), ("冬", 1040), ("及", 1282), ("OOV", 8000)]
        );
    }
}
