pub mod base64url;

pub use base64url::{DecodeError, decode, encode};
