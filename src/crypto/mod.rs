//! Key generation and address derivation.
//!
//! This module provides:
//! - The `WalletGenerator` capability the search engine runs against
//! - secp256k1 key pairs rendered as Cosmos-SDK bech32 or EVM hex addresses
//! - The `Candidate` value produced by every generation call

mod address;
mod generator;

pub use address::{bech32_address, hash160, EvmAddress};
pub use generator::{Bech32Generator, HexGenerator};

/// One generated key pair plus its derived textual address.
#[derive(Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The full address, chain prefix included
    pub address: String,
    /// Serialized public key (compressed for bech32, uncompressed for hex)
    pub public_key: Vec<u8>,
    /// The 32 private key bytes
    pub private_key: Vec<u8>,
}

impl std::fmt::Debug for Candidate {
    // Keep private key material out of logs and panic messages.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("address", &self.address)
            .field("public_key", &hex::encode(&self.public_key))
            .finish_non_exhaustive()
    }
}

/// Errors raised by a wallet generator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalletError {
    #[error("invalid address prefix {prefix:?}: {reason}")]
    InvalidPrefix { prefix: String, reason: String },

    #[error("address encoding failed: {0}")]
    Encoding(String),

    #[error("key generation failed: {0}")]
    KeyGeneration(String),
}

/// Produces fresh candidates for one chain.
///
/// Implementations are shared by every search worker, so `generate` must be
/// callable concurrently without external locking.
pub trait WalletGenerator: Send + Sync {
    /// Generates one random key pair and its address.
    fn generate(&self) -> Result<Candidate, WalletError>;
}
