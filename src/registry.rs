//! Static registry of tracked tokens
//!
//! Maps a token symbol to its on-chain contract, the balance-query
//! interface it speaks, its decimal-scaling convention, and the quote id
//! used against the price provider. Loaded once at startup from trusted
//! data and read-only afterwards; a lookup miss is a configuration bug,
//! not a user error.

use alloy_chains::NamedChain;
use alloy_primitives::Address;

use crate::errors::RegistryError;
use crate::types::tokens::DecimalConvention;

/// Which statically-declared balance-query binding a token speaks.
///
/// Every tracked token today exposes the standard ERC-20 `balanceOf`; the
/// enum keeps the registry extensible to tokens with a different read
/// interface without loosening the typed dispatch in the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BalanceCall {
    /// Standard ERC-20 `balanceOf(address) -> uint256`
    Erc20BalanceOf,
}

/// Immutable descriptor for one tracked token.
#[derive(Debug, Clone)]
pub struct TokenDescriptor {
    /// Display symbol (also the registry lookup key, case-insensitive)
    pub symbol: &'static str,
    /// Token contract on the registry's chain, canonical form
    pub contract: Address,
    /// Balance-query interface the contract speaks
    pub balance_call: BalanceCall,
    /// Decimal-scaling convention for raw balances
    pub convention: DecimalConvention,
    /// Quote id requested from the price provider. sOHM carries OHM's id:
    /// a rebasing token priced 1:1 against its peg is never quoted
    /// independently.
    pub quote_id: &'static str,
}

// (symbol, contract, decimals convention, quote id)
const MAINNET_TOKENS: &[(&str, &str, DecimalConvention, &str)] = &[
    (
        "OHM",
        "0x383518188c0c6d7730d91b2c03a03c837814a899",
        DecimalConvention::Subunit(9),
        "OHM",
    ),
    (
        "sOHM",
        "0x04f2694c8fcee23e8fd0dfea1d4f5bb8c352111f",
        DecimalConvention::Subunit(9),
        "OHM",
    ),
    (
        "wsOHM",
        "0xca76543cf381ebbb277be79574059e32108e3e65",
        DecimalConvention::Native,
        "WSOHM",
    ),
];

/// Read-only lookup table of tracked tokens.
///
/// Construct once with [`TokenRegistry::mainnet`] and share behind `Arc`.
/// Construction parses every contract address and fails fast on a
/// malformed descriptor instead of failing later mid-cycle.
#[derive(Debug)]
pub struct TokenRegistry {
    chain: NamedChain,
    tokens: Vec<TokenDescriptor>,
}

impl TokenRegistry {
    /// Build the registry of Olympus tokens on Ethereum mainnet.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MalformedDescriptor`] if a contract address
    /// literal fails to parse.
    pub fn mainnet() -> Result<Self, RegistryError> {
        let mut tokens = Vec::with_capacity(MAINNET_TOKENS.len());
        for &(symbol, contract, convention, quote_id) in MAINNET_TOKENS {
            let contract = contract
                .parse::<Address>()
                .map_err(|e| RegistryError::malformed_descriptor(symbol, e))?;
            tokens.push(TokenDescriptor {
                symbol,
                contract,
                balance_call: BalanceCall::Erc20BalanceOf,
                convention,
                quote_id,
            });
        }

        Ok(Self {
            chain: NamedChain::Mainnet,
            tokens,
        })
    }

    /// The chain all descriptors in this registry belong to.
    pub fn chain(&self) -> NamedChain {
        self.chain
    }

    /// Look up a token descriptor by symbol, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::UnknownToken`] if the symbol is not tracked.
    pub fn lookup(&self, symbol: &str) -> Result<&TokenDescriptor, RegistryError> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
            .ok_or_else(|| RegistryError::unknown_token(symbol))
    }

    /// All tracked descriptors in declaration (display) order.
    pub fn descriptors(&self) -> &[TokenDescriptor] {
        &self.tokens
    }

    /// Quote ids to request from the price provider, deduplicated in
    /// declaration order. sOHM contributes no id of its own.
    pub fn quote_ids(&self) -> Vec<&'static str> {
        let mut ids = Vec::new();
        for token in &self.tokens {
            if !ids.contains(&token.quote_id) {
                ids.push(token.quote_id);
            }
        }
        ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mainnet_registry_builds() {
        let registry = TokenRegistry::mainnet().unwrap();
        assert_eq!(registry.chain(), NamedChain::Mainnet);
        assert_eq!(registry.descriptors().len(), 3);
    }

    #[test]
    fn test_lookup_known_symbols() {
        let registry = TokenRegistry::mainnet().unwrap();

        let ohm = registry.lookup("OHM").unwrap();
        assert_eq!(ohm.convention, DecimalConvention::Subunit(9));
        assert_eq!(ohm.quote_id, "OHM");
        assert_eq!(ohm.balance_call, BalanceCall::Erc20BalanceOf);

        let wsohm = registry.lookup("wsOHM").unwrap();
        assert_eq!(wsohm.convention, DecimalConvention::Native);
        assert_eq!(wsohm.quote_id, "WSOHM");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let registry = TokenRegistry::mainnet().unwrap();
        assert_eq!(registry.lookup("sohm").unwrap().symbol, "sOHM");
        assert_eq!(registry.lookup("SOHM").unwrap().symbol, "sOHM");
        assert_eq!(registry.lookup("WSOHM").unwrap().symbol, "wsOHM");
    }

    #[test]
    fn test_lookup_unknown_symbol() {
        let registry = TokenRegistry::mainnet().unwrap();
        let err = registry.lookup("GOHM").unwrap_err();
        assert!(matches!(
            err,
            RegistryError::UnknownToken { ref symbol } if symbol == "GOHM"
        ));
    }

    #[test]
    fn test_sohm_pegs_to_ohm_quote() {
        let registry = TokenRegistry::mainnet().unwrap();
        let ohm = registry.lookup("OHM").unwrap();
        let sohm = registry.lookup("sOHM").unwrap();
        assert_eq!(sohm.quote_id, ohm.quote_id);
        assert_ne!(sohm.contract, ohm.contract);
    }

    #[test]
    fn test_quote_ids_deduplicated_in_order() {
        let registry = TokenRegistry::mainnet().unwrap();
        assert_eq!(registry.quote_ids(), vec!["OHM", "WSOHM"]);
    }

    #[test]
    fn test_contracts_are_canonical() {
        let registry = TokenRegistry::mainnet().unwrap();
        let ohm = registry.lookup("OHM").unwrap();
        assert_eq!(
            ohm.contract.to_string(),
            "0x383518188C0C6d7730D91b2c03a03C837814a899"
        );
    }
}
