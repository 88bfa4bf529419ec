mod key_toggle;
pub use key_toggle::*;
