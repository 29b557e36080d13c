//! # Model Vocabulary Capability

use crate::{errors::RWResult, types::TokenType};

/// The vocabulary capability which backs word-level and rune-level models.
///
/// Any vocabulary which can enumerate its entries, name its unknown token,
/// and resolve tokens (with unknown-token fallback) can back a model.
pub trait ModelVocab: Send + Sync {
    /// The id type: T.
    type Token: TokenType;

    /// Iterate over all ``(token, id)`` entries, in no particular order.
    fn vocab_pairs(&self) -> impl Iterator<Item = (&str, Self::Token)>;

    /// The token substituted for lookups which miss.
    fn unk_token(&self) -> &str;

    /// Resolve a token to its id, falling back to the unknown token.
    ///
    /// ## Returns
    /// An error if neither the token nor the unknown token are present.
    fn try_token_to_id(
        &self,
        token: &str,
    ) -> RWResult<Self::Token>;
}
