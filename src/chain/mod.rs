//! Chain descriptors and the registry of supported chains.

mod scheme;

pub use scheme::{Scheme, SchemeCapability};

/// An immutable description of one target chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    pub name: String,
    /// Human-readable part fed to the address encoder (`cosmos`, `0x`)
    pub address_prefix: String,
    /// Literal prefix every address starts with (`cosmos1`, `0x`)
    pub full_prefix: String,
    pub scheme: Scheme,
}

impl Chain {
    /// Creates a chain from its name, encoder prefix, literal prefix and scheme.
    pub fn new(name: &str, address_prefix: &str, full_prefix: &str, scheme: Scheme) -> Self {
        Self {
            name: name.to_string(),
            address_prefix: address_prefix.to_string(),
            full_prefix: full_prefix.to_string(),
            scheme,
        }
    }

    /// A Cosmos-SDK chain whose addresses read `<hrp>1...`.
    pub fn cosmos_sdk(name: &str, hrp: &str) -> Self {
        Self::new(name, hrp, &format!("{}1", hrp), Scheme::Bech32)
    }

    /// An EVM chain with `0x` addresses.
    pub fn evm(name: &str) -> Self {
        Self::new(name, "0x", "0x", Scheme::Hex)
    }

    /// Returns the capabilities of this chain's scheme.
    #[inline]
    pub fn capability(&self) -> &'static SchemeCapability {
        self.scheme.capability()
    }
}

/// Read-only set of chains known to the program.
///
/// Built once at startup and consulted only while resolving configuration.
#[derive(Debug, Clone)]
pub struct ChainRegistry {
    chains: Vec<Chain>,
}

impl ChainRegistry {
    /// Creates a registry from an explicit list of chains.
    pub fn new(chains: Vec<Chain>) -> Self {
        Self { chains }
    }

    /// The chains supported out of the box.
    pub fn builtin() -> Self {
        Self::new(vec![
            Chain::cosmos_sdk("celestia", "celestia"),
            Chain::cosmos_sdk("cosmos", "cosmos"),
            Chain::cosmos_sdk("dydx", "dydx"),
            Chain::evm("berachain"),
        ])
    }

    /// Looks up a chain by its exact name.
    pub fn get(&self, name: &str) -> Option<&Chain> {
        self.chains.iter().find(|chain| chain.name == name)
    }

    /// Returns the chain names in registration order.
    pub fn names(&self) -> Vec<&str> {
        self.chains.iter().map(|chain| chain.name.as_str()).collect()
    }

}

impl Default for ChainRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
