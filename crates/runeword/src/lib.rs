//! # `runeword` Vocabulary Tokenizer Glue
//!
//! `runeword` loads plain delimited vocabulary tables, builds word-level
//! or rune-level models over them, and batch-encodes text through a
//! [`tokenizers`] engine with optional batch padding.
//!
//! See:
//! * [`vocab`] to parse, query, load and save vocabulary tables.
//! * [`models`] for the word-level and rune-level models.
//! * [`engine`] for the tokenizer engine seam.
//! * [`tokenizer`] for batch encoding and tokenizer configuration.
//!
//! ## Encoding A Batch
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use runeword::{
//!     ModelKind,
//!     tokenizer::{NormalizerOptions, PaddingOptions, TokenizerOptions},
//!     vocab::VocabTable,
//! };
//!
//! fn example() -> runeword::RWResult<()> {
//!     let lines = ["738\t以", "1282\t及", "8000\tOOV"];
//!     let vocab: Arc<VocabTable<u32>> = VocabTable::from_lines(&lines, "\t", "OOV")?.into();
//!
//!     let tokenizer = TokenizerOptions::default()
//!         .with_model(ModelKind::WordLevel)
//!         .with_normalizer(Some(NormalizerOptions::default().with_handle_chinese_chars(true)))
//!         .with_padding(Some(PaddingOptions::default()))
//!         .build(vocab)?;
//!
//!     let encodings = tokenizer.try_encode_batch_texts(&["以及", "以"], false)?;
//!     assert_eq!(encodings[1].get_ids(), &[738, 0]);
//!     Ok(())
//! }
//! ```
//!
//! ## Crate Features
#![doc = document_features::document_features!()]
#![warn(missing_docs, unused)]

pub mod engine;
pub mod errors;
pub mod models;
pub mod tokenizer;
pub mod types;
pub mod vocab;

#[doc(inline)]
pub use engine::TokenizerEngine;
#[doc(inline)]
pub use errors::{RWResult, RunewordError};
#[doc(inline)]
pub use models::{ModelKind, RuneLevel, VocabModel};
#[doc(inline)]
pub use tokenizer::{BatchTokenizer, TokenizerOptions, VocabTokenizer};
#[doc(inline)]
pub use types::TokenType;
#[doc(inline)]
pub use vocab::{ModelVocab, VocabTable};
