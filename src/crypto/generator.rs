//! secp256k1 wallet generators.

use bech32::Hrp;
use secp256k1::{All, PublicKey, Secp256k1, SecretKey};

use super::address::{bech32_address, hash160, EvmAddress};
use super::{Candidate, WalletError};

/// Generates Cosmos-SDK style wallets: `bech32(hrp, hash160(compressed pubkey))`.
#[derive(Debug, Clone)]
pub struct Bech32Generator {
    secp: Secp256k1<All>,
    hrp: Hrp,
}

impl Bech32Generator {
    /// Creates a generator for the given human-readable part (e.g. `cosmos`).
    pub fn new(hrp: &str) -> Result<Self, WalletError> {
        let hrp = Hrp::parse(hrp).map_err(|e| WalletError::InvalidPrefix {
            prefix: hrp.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self {
            secp: Secp256k1::new(),
            hrp,
        })
    }

    /// Builds the candidate for a known secret key.
    pub fn candidate_from_secret(&self, secret: &[u8; 32]) -> Result<Candidate, WalletError> {
        let secret_key = parse_secret(secret)?;
        let public_key = PublicKey::from_secret_key(&self.secp, &secret_key);
        self.candidate(&secret_key, &public_key)
    }

    fn candidate(
        &self,
        secret_key: &SecretKey,
        public_key: &PublicKey,
    ) -> Result<Candidate, WalletError> {
        let compressed = public_key.serialize();
        let address = bech32_address(self.hrp, &hash160(&compressed))?;

        Ok(Candidate {
            address,
            public_key: compressed.to_vec(),
            private_key: secret_key.secret_bytes().to_vec(),
        })
    }
}

impl super::WalletGenerator for Bech32Generator {
    #[inline]
    fn generate(&self) -> Result<Candidate, WalletError> {
        let (secret_key, public_key) = self.secp.generate_keypair(&mut rand::thread_rng());
        self.candidate(&secret_key, &public_key)
    }
}

/// Generates EVM wallets with EIP-55 checksummed `0x` addresses.
#[derive(Debug, Clone)]
pub struct HexGenerator {
    secp: Secp256k1<All>,
}

impl HexGenerator {
    /// Creates a generator with its own secp256k1 context.
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Builds the candidate for a known secret key.
    pub fn candidate_from_secret(&self, secret: &[u8; 32]) -> Result<Candidate, WalletError> {
        let secret_key = parse_secret(secret)?;
        let public_key = PublicKey::from_secret_key(&self.secp, &secret_key);
        Ok(Self::candidate(&secret_key, &public_key))
    }

    fn candidate(secret_key: &SecretKey, public_key: &PublicKey) -> Candidate {
        let uncompressed = public_key.serialize_uncompressed();
        let address = EvmAddress::from_uncompressed_key(&uncompressed);

        Candidate {
            address: address.to_checksum(),
            public_key: uncompressed.to_vec(),
            private_key: secret_key.secret_bytes().to_vec(),
        }
    }
}

impl Default for HexGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl super::WalletGenerator for HexGenerator {
    #[inline]
    fn generate(&self) -> Result<Candidate, WalletError> {
        let (secret_key, public_key) = self.secp.generate_keypair(&mut rand::thread_rng());
        Ok(Self::candidate(&secret_key, &public_key))
    }
}

fn parse_secret(secret: &[u8; 32]) -> Result<SecretKey, WalletError> {
    SecretKey::from_slice(secret).map_err(|e| WalletError::KeyGeneration(e.to_string()))
}
