mod lengths;
pub use lengths::*;
