//! fln - header-driven line decoder
//!
//! Decodes a single delimited text line into a typed record, using a header
//! line declared up front to map column positions to field names. The
//! name-to-column mapping is computed once per [`Decoder`] and reused for
//! every line.
//!
//! This library provides:
//! - Header indexing with tag / name / lower-camel field resolution
//! - A pluggable [`ConversionRegistry`] of per-kind parsing functions
//! - Typed decode targets through [`Record`] and [`impl_record!`]
//! - Serde decode targets through [`Decoder::deserialize`]
//!
//! ## Example
//!
//! ```rust
//! use fln::Decoder;
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct Person {
//!     name: String,
//!     my_age: i64,
//!     address: String,
//!     male: bool,
//! }
//!
//! fln::impl_record!(Person {
//!     #[column = "myname"]
//!     name: String,
//!     #[column = "age"]
//!     my_age: i64,
//!     address: String,
//!     #[column = "mymale"]
//!     male: bool,
//! });
//!
//! let decoder = Decoder::from_header("name,age,address,male", ",").unwrap();
//! let person: Person = decoder.decode_new("crastom,10,home,true").unwrap();
//!
//! assert_eq!(person.name, "crastom");
//! assert_eq!(person.my_age, 10);
//! assert!(person.male);
//! ```

pub mod config;
pub mod constants;
pub mod decoder;
pub mod error;
pub mod header;
pub mod record;
pub mod registry;

// Re-export commonly used types
pub use config::DecoderConfig;
pub use decoder::Decoder;
pub use error::{BoxError, FlnError, Result};
pub use header::HeaderIndex;
pub use record::{FieldDescriptor, Record, Schema, SchemaBuilder};
pub use registry::{ConversionRegistry, Converter, FieldType, Kind, Value};
