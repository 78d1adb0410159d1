mod decoded;
mod encoded;

pub use decoded::DecodedToken;
pub use encoded::EncodedToken;

pub(crate) use decoded::decode_header;
