pub mod chunk;
pub mod decoder;
pub mod encoder;
pub mod format;

pub use decoder::decode;
pub use encoder::{encode, encode_solid, write};
