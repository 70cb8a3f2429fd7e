/* Copyright (c) 2026 Olle Mårtensson. This Source Code Form is subject to the terms of the Eclipse Public License, v. 2.0. */
//! Registry deployments per chain.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{AgentMetaError, AgentMetaResult};

/// A 20-byte account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Address = Address([0u8; 20]);

    /// Decode a `0x`-prefixed, 40-digit hex literal at compile time.
    pub const fn from_hex_literal(literal: &str) -> Self {
        let bytes = literal.as_bytes();
        assert!(bytes.len() == 42 && bytes[0] == b'0' && bytes[1] == b'x');
        let mut out = [0u8; 20];
        let mut idx = 0;
        while idx < 20 {
            out[idx] = (nibble(bytes[2 + 2 * idx]) << 4) | nibble(bytes[3 + 2 * idx]);
            idx += 1;
        }
        Address(out)
    }

    pub fn parse(input: &str) -> AgentMetaResult<Self> {
        let digits = input.strip_prefix("0x").unwrap_or(input);
        let decoded =
            hex::decode(digits).map_err(|err| AgentMetaError::InvalidAddress(err.to_string()))?;
        let bytes: [u8; 20] = decoded.try_into().map_err(|raw: Vec<u8>| {
            AgentMetaError::InvalidAddress(format!("expected 20 bytes, got {}", raw.len()))
        })?;
        Ok(Address(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

const fn nibble(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => panic!("invalid hex digit in address literal"),
    }
}

impl Display for Address {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", hex::encode(self.0))
    }
}

impl FromStr for Address {
    type Err = AgentMetaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Address::parse(s)
    }
}

/// Registry contracts deployed on one chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContractAddresses {
    pub identity_registry: Address,
    pub reputation_registry: Address,
    pub validation_registry: Address,
}

impl ContractAddresses {
    pub const UNSUPPORTED: ContractAddresses = ContractAddresses {
        identity_registry: Address::ZERO,
        reputation_registry: Address::ZERO,
        validation_registry: Address::ZERO,
    };

    const fn new(identity: &str, reputation: &str, validation: &str) -> Self {
        Self {
            identity_registry: Address::from_hex_literal(identity),
            reputation_registry: Address::from_hex_literal(reputation),
            validation_registry: Address::from_hex_literal(validation),
        }
    }
}

struct Deployment {
    chain_id: u64,
    name: &'static str,
    contracts: ContractAddresses,
}

const DEPLOYMENTS: &[Deployment] = &[
    Deployment {
        chain_id: 1,
        name: "Ethereum Mainnet",
        // validation registry not deployed
        contracts: ContractAddresses::new(
            "0x8004A169FB4a3325136EB29fA0ceB6D2e539a432",
            "0x8004BAa17C55a88189AE136b182e5fdA19dE9b63",
            "0x0000000000000000000000000000000000000000",
        ),
    },
    Deployment {
        chain_id: 11155111,
        name: "Ethereum Sepolia",
        contracts: ContractAddresses::new(
            "0x8004a6090Cd10A7288092483047B097295Fb8847",
            "0x8004B8FD1A363aa02fDC07635C0c5F94f6Af5B7E",
            "0x8004CB39f29c09145F24Ad9dDe2A108C1A2cdfC5",
        ),
    },
    Deployment {
        chain_id: 84532,
        name: "Base Sepolia",
        contracts: ContractAddresses::new(
            "0x8004AA63c570c570eBF15376c0dB199918BFe9Fb",
            "0x8004bd8daB57f14Ed299135749a5CB5c42d341BF",
            "0x8004C269D0A5647E51E121FeB226200ECE932d55",
        ),
    },
    Deployment {
        chain_id: 59141,
        name: "Linea Sepolia",
        contracts: ContractAddresses::new(
            "0x8004aa7C931bCE1233973a0C6A667f73F66282e7",
            "0x8004bd8483b99310df121c46ED8858616b2Bba02",
            "0x8004c44d1EFdd699B2A26e781eF7F77c56A9a4EB",
        ),
    },
    Deployment {
        chain_id: 80002,
        name: "Polygon Amoy",
        contracts: ContractAddresses::new(
            "0x8004ad19E14B9e0654f73353e8a0B600D46C2898",
            "0x8004B12F4C2B42d00c46479e859C92e39044C930",
            "0x8004C11C213ff7BaD36489bcBDF947ba5eee289B",
        ),
    },
    Deployment {
        chain_id: 296,
        name: "Hedera Testnet",
        contracts: ContractAddresses::new(
            "0x4c74ebd72921d537159ed2053f46c12a7d8e5923",
            "0xc565edcba77e3abeade40bfd6cf6bf583b3293e0",
            "0x18df085d85c586e9241e0cd121ca422f571c2da6",
        ),
    },
    Deployment {
        chain_id: 998,
        name: "HyperEVM Testnet",
        contracts: ContractAddresses::new(
            "0x8004A9560C0edce880cbD24Ba19646470851C986",
            "0x8004b490779A65D3290a31fD96471122050dF671",
            "0x8004C86198fdB8d8169c0405D510EC86cc7B0551",
        ),
    },
    Deployment {
        chain_id: 1351057110,
        name: "SKALE Base Sepolia Testnet",
        contracts: ContractAddresses::new(
            "0x4fa7900596c9830664406d3796952c59ec4133d9",
            "0x9b9d23a47697691ef1016906d1f8ddfc009e6a69",
            "0x34ae1196b1609e01ebc90b75c802b2ea87203f13",
        ),
    },
];

fn deployment(chain_id: u64) -> Option<&'static Deployment> {
    DEPLOYMENTS.iter().find(|d| d.chain_id == chain_id)
}

/// Registry addresses for `chain_id`; all zero when the chain is unsupported.
pub fn contract_addresses(chain_id: u64) -> ContractAddresses {
    deployment(chain_id)
        .map(|d| d.contracts)
        .unwrap_or(ContractAddresses::UNSUPPORTED)
}

pub fn chain_name(chain_id: u64) -> String {
    match deployment(chain_id) {
        Some(d) => d.name.to_string(),
        None => format!("Unsupported Chain {chain_id}"),
    }
}

pub fn is_supported(chain_id: u64) -> bool {
    deployment(chain_id).is_some()
}
