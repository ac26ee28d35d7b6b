//! Turning intervals into text.

mod iso;
pub use self::iso::Iso;
