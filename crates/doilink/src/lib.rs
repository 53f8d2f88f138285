//! DOI resolution and bibliographic metadata normalization.
//!
//! `doilink` turns a Digital Object Identifier into a uniform [`PaperMetadata`] record:
//!
//! - Registration agency detection through the `doiRA` lookup service
//! - Agency-specific extraction from Crossref and DataCite
//! - Abstract recovery from inline JATS markup or, for publishers that omit it, from the landing
//!   page
//! - Author normalization with ORCID links
//! - Surface-agnostic rendering through the [`TextTransformer`] trait
//!
//! # Getting Started
//!
//! ```no_run
//! use doilink::{prelude::*, Resolver};
//!
//! # struct Markdown;
//! # impl TextTransformer for Markdown {
//! #   fn bold(&self, text: &str) -> String { format!("**{text}**") }
//! #   fn hyperlink(&self, text: &str, url: &str) -> String { format!("[{text}]({url})") }
//! # }
//! #[tokio::main]
//! async fn main() -> Result<(), DoilinkError> {
//!   let resolver = Resolver::new();
//!   let paper = resolver.resolve("10.1145/3453483.3454092").await?;
//!
//!   println!("{}", paper.render_title(&Markdown));
//!   println!("{}: {}", paper.author_label(), paper.render_authors(&Markdown));
//!   Ok(())
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`agency`]: Registration agency lookup and the agency tag
//! - [`extractor`]: Agency-specific metadata extractors
//! - [`resolver`]: Dispatch from a raw DOI to the matching extractor
//! - [`author`] and [`paper`]: The normalized output model
//! - [`transformer`]: The rendering capability supplied by each consuming surface
//! - [`config`]: Upstream endpoint configuration
//! - [`error`]: Error kinds surfaced to callers

#![warn(missing_docs, clippy::missing_docs_in_private_items)]

use std::{
  collections::HashMap,
  fmt::Display,
  path::{Path, PathBuf},
  str::FromStr,
};

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, trace};
#[cfg(test)] use tracing_test::traced_test;

pub mod agency;
pub mod author;
pub mod config;
pub mod error;
pub mod extractor;
pub mod paper;
pub mod resolver;
pub mod transformer;

pub use crate::{
  agency::{Agency, AgencyRecord},
  author::Author,
  config::Config,
  paper::PaperMetadata,
  resolver::Resolver,
  transformer::TextTransformer,
};
use crate::error::*;

/// Resolves a DOI with a [`Resolver`] built from the default [`Config`].
///
/// Prefer holding a [`Resolver`] when resolving more than one DOI, since it keeps a single
/// connection pool.
pub async fn resolve(doi: &str) -> Result<PaperMetadata> { Resolver::new().resolve(doi).await }

/// Common traits and types for ergonomic imports.
///
/// ```
/// use doilink::prelude::*;
///
/// fn render<T: TextTransformer>(paper: &PaperMetadata, transformer: &T) -> String {
///   paper.render_title(transformer)
/// }
/// ```
pub mod prelude {
  pub use crate::{
    error::DoilinkError, extractor::Extractor, paper::PaperMetadata,
    transformer::TextTransformer,
  };
}
