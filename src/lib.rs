//! # veneer
//!
//! A library for carrying opaque template-directive text through an HTML
//! parse/transform/serialize round trip.
//!
//! ## Features
//!
//! - Browser-style HTML parsing (html5ever) into a decorated DOM
//! - Decoration text (`lead`/`trail`) re-emitted immediately outside an
//!   element's tag boundaries, with a `text_only` mode that replaces the
//!   structural tags entirely
//! - Sibling-level redistribution that repairs duplicated directive
//!   markers left behind by upstream tree edits
//! - Namespace-aware attribute rendering, void-element and raw-text
//!   handling, hidden attributes, template contents
//! - A pluggable escape hook (identity by default, entity escaping
//!   available)
//!
//! ## Quick Start
//!
//! ```
//! use veneer::{parse_fragment, serialize};
//! use veneer::dom::find_element;
//!
//! let fragment = parse_fragment("<div><p>this is me</p></div>");
//!
//! let p = find_element(&fragment, "p").unwrap();
//! p.set_lead_text(Some("{#if param}".to_string()));
//! p.set_trail_text(Some("{/if}".to_string()));
//!
//! let html = serialize(&fragment);
//! assert_eq!(html, "<div>{#if param}<p>this is me</p>{/if}</div>");
//! ```
//!
//! Serialization mutates the input tree's decoration fields in place; see
//! the [`serialize`](crate::serialize()) docs for the full contract.

pub mod dom;
pub mod error;
pub mod parse;
pub mod serialize;

pub use dom::{Attribute, Decor, Handle, Node, NodeData};
pub use error::{Error, Result};
pub use parse::{parse_document, parse_fragment};
pub use serialize::{
    DomAdapter, NodeKind, SerializeOpts, TreeAdapter, escape_entities, escape_string, serialize,
    serialize_to, serialize_with,
};
