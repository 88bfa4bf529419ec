mod grid_debugger;
pub use grid_debugger::*;

mod root;
pub use root::Root;
