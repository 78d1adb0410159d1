//! Sign, decode and verify a token with logging enabled
//!
//! Run with `RUST_LOG=jwtlite=trace cargo run --example basic` to see the
//! library's own log lines.

use jwtlite::{Algorithm, AlgorithmPolicy, Verifier, jwt};
use serde::{Deserialize, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    name: String,
    admin: bool,
    iat: u64,
}

fn main() -> jwtlite::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("{}=debug,jwtlite=debug", env!("CARGO_CRATE_NAME")).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secret = b"your-384-bit-secret";
    let claims = Claims {
        sub: "1234567890".into(),
        name: "John Doe".into(),
        admin: true,
        iat: 1516239022,
    };

    let token = jwt::encode_claims(&Algorithm::HS384.header(), &claims, secret)?;
    tracing::info!(%token, "issued token");

    let decoded = jwt::decode(&token)?;
    let algorithm = decoded.algorithm()?;
    tracing::info!(%algorithm, typ = ?decoded.token_type(), "decoded header");

    let verifier = Verifier::new()
        .algorithms(AlgorithmPolicy::hs384_only())
        .build();

    let trusted: Claims = verifier.decode_verified(&token, secret)?.claims()?;
    tracing::info!(?trusted, "signature verified");

    let valid = verifier.verify(&token, b"not-the-secret")?;
    tracing::info!(valid, "checked with the wrong secret");

    if let Err(e) = Verifier::new()
        .algorithms(AlgorithmPolicy::hs256_only())
        .build()
        .verify(&token, secret)
    {
        tracing::warn!(error = %e, kind = ?e.kind(), "rejected by HS256-only verifier");
    }

    Ok(())
}
