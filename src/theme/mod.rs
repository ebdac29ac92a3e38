//! Retro theme tokens and their scoped propagation.
//!
//! A [`Theme`] is an immutable set of style tokens grouped into colors,
//! effects, fonts and shadows. [`ThemeProvider`] publishes a theme built from
//! the default plus a [`ThemeRefinement`] for the elements beneath it, and
//! hands those elements a [`ThemeScope`] to read it from.

mod schema;
pub use schema::*;

mod refinement;
pub use refinement::*;

mod scope;
pub use scope::*;

mod variables;
pub use variables::*;

mod values;
pub use values::*;

mod error;
pub use error::*;
