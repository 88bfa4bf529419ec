//! Theme system providing breakpoints and grid overlay colors.
//!
//! The built-in theme is embedded as JSON and used until the application
//! installs its own with [`ThemeExt::set_theme`].

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;
