//! Address derivation for the supported encodings.

use std::fmt;

use bech32::{Bech32, Hrp};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use tiny_keccak::{Hasher, Keccak};

use super::WalletError;

/// An EVM address (20 bytes).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EvmAddress([u8; 20]);

impl EvmAddress {
    /// Creates an address from raw bytes.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// Derives the address from an uncompressed SEC1 public key.
    ///
    /// The leading `0x04` tag is skipped, the remaining 64 bytes are hashed
    /// with Keccak-256 and the last 20 bytes of the digest are kept.
    pub fn from_uncompressed_key(public_key: &[u8; 65]) -> Self {
        let mut hasher = Keccak::v256();
        hasher.update(&public_key[1..]);

        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut address_bytes = [0u8; 20];
        address_bytes.copy_from_slice(&hash[12..]);
        Self(address_bytes)
    }

    /// Returns the address as a lowercase hex string (without 0x prefix).
    #[inline]
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Returns the address with checksum encoding (EIP-55).
    pub fn to_checksum(&self) -> String {
        let hex_addr = self.to_hex();
        let mut hasher = Keccak::v256();
        hasher.update(hex_addr.as_bytes());
        let mut hash = [0u8; 32];
        hasher.finalize(&mut hash);

        let mut checksum = String::with_capacity(42);
        checksum.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_byte = hash[i / 2];
            let hash_nibble = if i % 2 == 0 {
                hash_byte >> 4
            } else {
                hash_byte & 0x0f
            };

            if c.is_ascii_alphabetic() && hash_nibble >= 8 {
                checksum.push(c.to_ascii_uppercase());
            } else {
                checksum.push(c);
            }
        }

        checksum
    }
}

impl fmt::Debug for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EvmAddress({})", self.to_checksum())
    }
}

/// RIPEMD160(SHA256(data)), the account hash used by Cosmos-SDK chains.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    Ripemd160::digest(sha).into()
}

/// Encodes a 20-byte account hash as `<hrp>1<data><checksum>`.
///
/// The bytes are regrouped into 5-bit words directly; unlike segwit there is
/// no witness version in front.
pub fn bech32_address(hrp: Hrp, account: &[u8; 20]) -> Result<String, WalletError> {
    bech32::encode::<Bech32>(hrp, account).map_err(|e| WalletError::Encoding(e.to_string()))
}
