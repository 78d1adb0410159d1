//! Size limit constants for input validation
//!
//! Every limit is checked on decode. `encode` refuses to produce a token
//! longer than [`MAX_TOKEN_LENGTH`], so anything it returns also decodes.

/// Maximum length for a JWT token string (64KB)
pub const MAX_TOKEN_LENGTH: usize = 64 * 1024;

/// Maximum size for decoded JWT header JSON (8KB)
pub const MAX_DECODED_HEADER_SIZE: usize = 8 * 1024;

/// Maximum size for decoded JWT payload JSON (48KB)
///
/// Base64URL spends four characters on every three bytes, so a segment that
/// fits in [`MAX_TOKEN_LENGTH`] never decodes to more than this.
pub const MAX_DECODED_PAYLOAD_SIZE: usize = MAX_TOKEN_LENGTH / 4 * 3;

/// Maximum length for the algorithm (alg) header value (16 bytes)
pub const MAX_ALG_LENGTH: usize = 16;
