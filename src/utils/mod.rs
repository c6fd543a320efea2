//! Utility functions for ryc

pub mod archive;
pub mod filename;
pub mod url;

pub use self::archive::*;
pub use self::filename::*;
pub use self::url::*;
