//! `stringtools_core` is the library behind the `stringtools` command. It
//! holds a catalog of text transforms that each take a buffer (plus a few
//! parameters) and return a new buffer.
//!
//! ## Line model
//!
//! Transforms work line by line. A buffer is split on every `\r` and every
//! `\n`, trailing empty lines are dropped, and the result is joined back with
//! `\n`. See [`lines`].
//!
//! ## Modules
//!
//! - [`indent`]: indent/outdent, inserting at line edges, trimming characters.
//! - [`bullets`]: converting and re-nesting bullet markers.
//! - [`replace`]: regex replace and case-aware "smart" replace.
//! - [`line_set`]: sorting, filtering and deduplicating lines.
//! - [`template`]: expanding a `%1`/`%2` template per line.
//! - [`wiki`]: Javadoc to MediaWiki conversion.
//! - [`doc_propagation`]: copying field docs onto accessors.
//! - [`regex_info`]: reporting what a regex matches.
//! - [`uuids`]: batches of random UUIDs.
//!
//! ## Key Types
//!
//! - [`Operation`]: a transform with its parameters, deserializable from TOML.
//! - [`TextBuffer`]: the edit buffer with its undo history.
//! - [`Script`]: a list of operations (and undos) to run on a buffer.
//! - [`ToolsConfig`]: configuration loaded from `stringtools.toml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use stringtools_core::Operation;
//! use stringtools_core::SortOrder;
//! use stringtools_core::TextBuffer;
//! use stringtools_core::ToolsConfig;
//!
//! let config = ToolsConfig::default();
//! let mut buffer = TextBuffer::new("banana\napple\nbanana");
//!
//! buffer
//! 	.apply(&Operation::Dedupe { ignore_case: false }, &config)
//! 	.unwrap();
//! buffer
//! 	.apply(
//! 		&Operation::Sort {
//! 			order: SortOrder::Ascending,
//! 			ignore_case: false,
//! 		},
//! 		&config,
//! 	)
//! 	.unwrap();
//! assert_eq!(buffer.text(), "apple\nbanana");
//!
//! buffer.undo();
//! assert_eq!(buffer.text(), "banana\napple");
//! ```

pub use buffer::*;
pub use config::*;
pub use error::*;
pub use indent::LineEdge;
pub use indent::TrimSide;
pub use line_set::LineFilter;
pub use line_set::SortOrder;
pub use operation::*;
pub use regex_info::RegexFlags;
pub use regex_info::RegexMatchReport;

mod buffer;
pub mod bullets;
pub mod case;
pub mod config;
pub mod doc_propagation;
#[allow(unused_assignments)]
mod error;
pub mod indent;
pub mod line_set;
pub mod lines;
mod operation;
pub mod regex_info;
pub mod replace;
pub mod samples;
pub mod template;
pub mod uuids;
pub mod wiki;

#[cfg(test)]
mod __fixtures;
