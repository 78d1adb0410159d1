//! Algorithm registry for HMAC-signed JWTs
//!
//! The registry is a compile-time table mapping the `alg` header value to a
//! hash family. Lookups are keyed by exact, case-sensitive identifier.

pub mod hmac;

use crate::error::{Error, Result};
use crate::limits::MAX_ALG_LENGTH;
use serde_json::{Map, Value};

/// Hash function family backing an HMAC algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashFamily {
    Sha256,
    Sha384,
    Sha512,
}

impl HashFamily {
    /// Hash name as used by keyed-hash primitives ("sha256", ...)
    pub const fn name(&self) -> &'static str {
        match self {
            HashFamily::Sha256 => "sha256",
            HashFamily::Sha384 => "sha384",
            HashFamily::Sha512 => "sha512",
        }
    }

    /// Digest length in bytes
    pub const fn digest_len(&self) -> usize {
        match self {
            HashFamily::Sha256 => 32,
            HashFamily::Sha384 => 48,
            HashFamily::Sha512 => 64,
        }
    }
}

impl std::fmt::Display for HashFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Algorithm identifier from JWT header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// HMAC with SHA-256
    HS256,

    /// HMAC with SHA-384
    HS384,

    /// HMAC with SHA-512
    HS512,
}

/// One registry entry: a header `alg` value and its hash family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSpec {
    pub algorithm: Algorithm,
    pub hash: HashFamily,
}

impl AlgorithmSpec {
    const fn of(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            hash: algorithm.hash_family(),
        }
    }
}

/// Every algorithm this crate can sign and verify
pub const REGISTRY: [AlgorithmSpec; 3] = [
    AlgorithmSpec::of(Algorithm::HS256),
    AlgorithmSpec::of(Algorithm::HS384),
    AlgorithmSpec::of(Algorithm::HS512),
];

/// Look up the hash family for an `alg` header value
pub fn hash_family_for(alg: &str) -> Result<HashFamily> {
    Algorithm::from_str(alg).map(|algorithm| algorithm.hash_family())
}

impl Algorithm {
    /// Parse algorithm string from JWT header
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self> {
        // Validate algorithm string length before matching
        if s.len() > MAX_ALG_LENGTH {
            return Err(Error::AlgorithmUnsupported(format!(
                "Algorithm string too long: {} bytes (maximum: {} bytes)",
                s.len(),
                MAX_ALG_LENGTH
            )));
        }

        if s == "none" {
            return Err(Error::AlgorithmNoneRejected);
        }

        REGISTRY
            .iter()
            .find(|spec| spec.algorithm.as_str() == s)
            .map(|spec| spec.algorithm)
            .ok_or_else(|| Error::AlgorithmUnsupported(s.into()))
    }

    /// Read and parse the `alg` value of a header mapping
    pub fn from_header(header: &Map<String, Value>) -> Result<Self> {
        let alg = header
            .get("alg")
            .and_then(Value::as_str)
            .ok_or(Error::AlgorithmMissing)?;
        Self::from_str(alg)
    }

    /// Convert to string representation
    pub const fn as_str(&self) -> &'static str {
        match self {
            Algorithm::HS256 => "HS256",
            Algorithm::HS384 => "HS384",
            Algorithm::HS512 => "HS512",
        }
    }

    /// The hash family this algorithm signs with
    pub const fn hash_family(&self) -> HashFamily {
        match self {
            Algorithm::HS256 => HashFamily::Sha256,
            Algorithm::HS384 => HashFamily::Sha384,
            Algorithm::HS512 => HashFamily::Sha512,
        }
    }

    /// Conventional header for this algorithm: `{"alg": ..., "typ": "JWT"}`
    pub fn header(&self) -> Map<String, Value> {
        let mut header = Map::new();
        header.insert("alg".into(), Value::from(self.as_str()));
        header.insert("typ".into(), Value::from("JWT"));
        header
    }
}

impl std::fmt::Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl AsRef<str> for Algorithm {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Policy for allowed algorithms
#[derive(Debug, Clone)]
pub struct AlgorithmPolicy {
    allowed: Vec<Algorithm>,
}

impl AlgorithmPolicy {
    /// Create a policy that allows only specific algorithms
    pub fn allow_only(algorithms: Vec<Algorithm>) -> Self {
        Self {
            allowed: algorithms,
        }
    }

    /// Policy that allows only HS256
    ///
    /// This is the recommended policy when you control both the signing key
    /// and the algorithm.
    pub fn hs256_only() -> Self {
        Self::allow_only(vec![Algorithm::HS256])
    }

    /// Policy that allows only HS384
    pub fn hs384_only() -> Self {
        Self::allow_only(vec![Algorithm::HS384])
    }

    /// Policy that allows only HS512
    pub fn hs512_only() -> Self {
        Self::allow_only(vec![Algorithm::HS512])
    }

    /// Policy that allows any HMAC algorithm (HS256, HS384, HS512)
    ///
    /// Equivalent to `Default::default()`.
    pub fn hmac_any() -> Self {
        Self::allow_only(REGISTRY.iter().map(|spec| spec.algorithm).collect())
    }

    /// Check if an algorithm is allowed
    pub fn is_allowed(&self, algorithm: &Algorithm) -> bool {
        self.allowed.contains(algorithm)
    }

    /// Validate algorithm against policy
    pub fn validate(&self, algorithm: &Algorithm) -> Result<()> {
        if self.is_allowed(algorithm) {
            Ok(())
        } else {
            Err(Error::AlgorithmNotAllowed {
                found: algorithm.to_string(),
                allowed: self.allowed.iter().map(ToString::to_string).collect(),
            })
        }
    }

    /// Get list of allowed algorithms
    pub fn allowed_algorithms(&self) -> &[Algorithm] {
        &self.allowed
    }
}

impl Default for AlgorithmPolicy {
    fn default() -> Self {
        Self::hmac_any()
    }
}
