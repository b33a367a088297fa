//! Extracts ordered, typed-as-text test arguments from literal input lines
//! using a human-readable format template.
//!
//! A format string such as `"{0} + {1} = {2}"` compiles once into a
//! [`FormatSpec`], which is then applied to each input line written in that
//! shape (`"1 + 2 = 3"`), yielding the argument values in order. This lets
//! test-case tables be written as readable sentences rather than raw
//! delimited data.
//!
//! Two placeholder dialects exist, selected via [`PlaceholderStyle`]: indexed
//! (`{0}`, `{1}`, ...) and fixed-token (any repeated token, e.g. `?`).
//! Captured values pass through a normalization pipeline — whitespace trim,
//! quote unwrapping, null-token substitution, quoted-empty substitution —
//! controlled by an [`ExtractionConfig`]. Values are always text or explicit
//! null (`None`); conversion into other types is the caller's concern.
//!
//! ```
//! use formatted_source::{compile, ExtractionConfig, PlaceholderStyle};
//!
//! let spec = compile("{0} plus {1} gives {2}", PlaceholderStyle::Indexed, 3)?;
//! let config = ExtractionConfig::new().with_null_token("nothing");
//!
//! for result in spec.extract_all(["1 plus 2 gives 3", "4 plus nothing gives 4"], &config) {
//!     let args = result?;
//!     assert_eq!(args.len(), 3);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod errors;
mod extract;
mod format;

pub use config::ExtractionConfig;
pub use errors::{ExtractionError, TemplateError};
pub use extract::{ExtractedArguments, normalize_value};
pub use format::{FormatSpec, PlaceholderStyle, compile};
