//! # Vocabulary IO
//!
//! ## Loading A Vocab
//!
//! ```rust,no_run
//! use runeword::vocab::{VocabTable, io::load_vocab_path};
//!
//! fn example() -> runeword::RWResult<VocabTable<u32>> {
//!     load_vocab_path("vocab.txt", "\t", "[UNK]")
//! }
//! ```

mod text_vocab;

#[doc(inline)]
pub use text_vocab::*;
