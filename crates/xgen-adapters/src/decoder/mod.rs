//! Template descriptor decoders.

mod plist;

pub use self::plist::PlistDecoder;
