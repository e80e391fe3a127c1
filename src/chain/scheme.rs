//! Per-scheme capabilities.
//!
//! Every piece of scheme-specific behavior (alphabets, length limits and the
//! wallet generator) lives in one table indexed by [`Scheme`].

use std::fmt;
use std::sync::Arc;

use crate::crypto::{Bech32Generator, HexGenerator, WalletError, WalletGenerator};
use crate::matcher::Alphabet;

use super::Chain;

/// Signature and address-encoding family of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scheme {
    /// secp256k1 keys, bech32 encoded hash160 (Cosmos-SDK)
    Bech32 = 0,
    /// secp256k1 ECDSA keys, EIP-55 hex encoded Keccak address (EVM)
    Hex = 1,
}

impl Scheme {
    /// Looks up the capabilities of this scheme.
    #[inline]
    pub fn capability(self) -> &'static SchemeCapability {
        &CAPABILITIES[self as usize]
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.capability().name)
    }
}

type BuildGenerator = fn(&Chain) -> Result<Arc<dyn WalletGenerator>, WalletError>;

/// Everything the search engine needs to know about one scheme.
pub struct SchemeCapability {
    pub scheme: Scheme,
    /// Encoding name used in validation messages
    pub name: &'static str,
    /// Digit and letter classes; also provides the required-count checks
    pub alphabet: Alphabet,
    /// Number of characters after the chain prefix
    pub max_body_len: usize,
    build_generator: BuildGenerator,
}

static CAPABILITIES: [SchemeCapability; 2] = [
    SchemeCapability {
        scheme: Scheme::Bech32,
        name: "bech32",
        // bech32 leaves out 1, b, i and o
        alphabet: Alphabet::new(
            "023456789",
            "acdefghjklmnpqrstuvwxyzACDEFGHJKLMNPQRSTUVWXYZ",
        ),
        max_body_len: 38,
        build_generator: bech32_generator,
    },
    SchemeCapability {
        scheme: Scheme::Hex,
        name: "bech16",
        alphabet: Alphabet::new("0123456789", "abcdefABCDEF"),
        max_body_len: 40,
        build_generator: hex_generator,
    },
];

fn bech32_generator(chain: &Chain) -> Result<Arc<dyn WalletGenerator>, WalletError> {
    Ok(Arc::new(Bech32Generator::new(&chain.address_prefix)?))
}

fn hex_generator(_: &Chain) -> Result<Arc<dyn WalletGenerator>, WalletError> {
    Ok(Arc::new(HexGenerator::new()))
}

impl SchemeCapability {
    /// Builds the wallet generator for a chain using this scheme.
    pub fn generator(&self, chain: &Chain) -> Result<Arc<dyn WalletGenerator>, WalletError> {
        (self.build_generator)(chain)
    }

    /// Validates a search string and character requirements for this scheme.
    pub fn validate_input(&self, search: &str, letters: i64, digits: i64) -> Vec<String> {
        let max = self.max_body_len;
        let mut errs = Vec::new();

        if !self.alphabet.contains_only(search) {
            errs.push(format!(
                "{} contains {} incompatible characters.",
                search, self.name
            ));
        }
        if search.chars().count() > max {
            errs.push(format!("{} is too long. Must be max {} characters.", search, max));
        }
        if letters < 0 || digits < 0 {
            errs.push("Can't require negative amount of characters.".to_string());
        }
        if letters.saturating_add(digits) > max as i64 {
            errs.push(format!("Can't require more than {} characters.", max));
        }

        errs
    }
}

impl fmt::Debug for SchemeCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SchemeCapability")
            .field("scheme", &self.scheme)
            .field("name", &self.name)
            .field("max_body_len", &self.max_body_len)
            .finish_non_exhaustive()
    }
}
