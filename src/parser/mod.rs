//! The parser combinator core.
//!
//! `Parser<T>` is a capability with one operation, `attempt`, which maps an
//! input `Span` to an optional value plus the remaining span. Everything else
//! is built by composing parsers:
//!
//! - Transformation (`map`, `map_value`, `filter`, `flat_map`)
//! - Choice (`or`, `|`, `one_of`, `one_of!`)
//! - Sequencing (`and_then`, `chain`, `cons`, `zip`, `zip3`, `zip_many!`, `zip_and_get!`)
//! - Repetition (`zero_or_more`, `one_or_more`, `sep_by`, `skip_many`)
//! - Deferred construction for recursive grammars (`lazy`)
//! - Escalation of failure to a fatal error (`or_throw`)

pub mod combinators;
pub mod parser;
pub mod tuple;

pub use combinators::*;
pub use parser::Parser;
