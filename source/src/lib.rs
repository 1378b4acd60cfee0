mod range;
mod ucd;

pub use range::CodepointRange;
pub use range::MAX_CODEPOINT;

pub use ucd::parse_property_line;
pub use ucd::PropertyFile;
