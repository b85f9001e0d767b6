//! # Folio
//!
//! Renders a single-page developer portfolio from one JSON content document.
//! Every section is optional; anything the document leaves out is filled in
//! with a sensible default, so `{}` already produces a complete page.
//!
//! # Pipeline
//!
//! ```text
//! config.toml ─┐
//! content.json ┼─▶ SiteContext ─▶ resolve ─▶ render ─▶ generate ─▶ dist/index.html
//! schema.json ─┘   (immutable)    (views)    (maud)    (document)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`config`] | `config.toml` loading, validation, merging, and theme CSS |
//! | [`content`] | Content document model, loading, schema presence checks |
//! | [`layout`] | Closed layout enums with lenient parsing |
//! | [`resolve`] | Fallback chains that produce the effective value of every field |
//! | [`render`] | One maud renderer per page section plus shared components |
//! | [`generate`] | Page assembly, document shells, writing `index.html` |
//! | [`output`] | CLI output formatting for `check` and `build` |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is generated with [Maud](https://maud.lambda.xyz/). Templates are Rust
//! expressions, checked at compile time, and every interpolation is escaped,
//! so content text can never inject markup.
//!
//! ## Resolution Before Rendering
//!
//! Renderers never look at raw `Option`s. The [`resolve`] module turns each
//! section into a view whose fields are already final, which keeps the
//! default rules in one place and the templates free of fallback logic.
//!
//! ## No Client-Side Rendering
//!
//! The page is rendered once at build time. The only script shipped is a small
//! interactivity layer keyed on `data-*` markers in the markup.

pub mod config;
pub mod content;
pub mod generate;
pub mod layout;
pub mod output;
pub mod render;
pub mod resolve;

#[cfg(test)]
pub(crate) mod test_helpers;
