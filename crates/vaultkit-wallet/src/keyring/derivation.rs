//! SLIP-0010 ed25519 key derivation.
//!
//! ed25519 only supports hardened derivation, so every path segment must
//! carry the `'` marker.

use crate::error::WalletError;
use hmac::{Hmac, Mac};
use sha2::Sha512;
use zeroize::Zeroizing;

type HmacSha512 = Hmac<Sha512>;

const CURVE_SEED: &[u8] = b"ed25519 seed";

pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// A private key together with its chain code.
pub struct ExtendedKey {
    key: Zeroizing<[u8; 32]>,
    chain_code: [u8; 32],
}

impl ExtendedKey {
    pub fn private_key(&self) -> &[u8; 32] {
        &self.key
    }

    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    fn from_hmac(key: &[u8], data: &[&[u8]]) -> Result<Self, WalletError> {
        let mut mac = HmacSha512::new_from_slice(key)
            .map_err(|e| WalletError::KeyDerivation(e.to_string()))?;
        for chunk in data {
            mac.update(chunk);
        }
        let mut digest = Zeroizing::new([0u8; 64]);
        digest.copy_from_slice(&mac.finalize().into_bytes());

        let mut out = ExtendedKey {
            key: Zeroizing::new([0u8; 32]),
            chain_code: [0u8; 32],
        };
        out.key.copy_from_slice(&digest[..32]);
        out.chain_code.copy_from_slice(&digest[32..]);
        Ok(out)
    }

    /// Master key for `seed`.
    pub fn master(seed: &[u8]) -> Result<Self, WalletError> {
        Self::from_hmac(CURVE_SEED, &[seed])
    }

    /// Hardened child at `index` (the hardened offset is added here).
    pub fn derive_child(&self, index: u32) -> Result<Self, WalletError> {
        if index >= HARDENED_OFFSET {
            return Err(WalletError::KeyDerivation(format!(
                "child index {} out of range",
                index
            )));
        }
        let ser = (index | HARDENED_OFFSET).to_be_bytes();
        Self::from_hmac(&self.chain_code, &[&[0u8][..], &self.key[..], &ser[..]])
    }
}

/// Parse `m/44'/101010'/0'/0'/0'` into unhardened indices.
pub fn parse_path(path: &str) -> Result<Vec<u32>, WalletError> {
    let mut segments = path.split('/');
    if segments.next() != Some("m") {
        return Err(WalletError::KeyDerivation(format!(
            "path must start with m/: {:?}",
            path
        )));
    }

    segments
        .map(|seg| {
            let index = seg
                .strip_suffix('\'')
                .or_else(|| seg.strip_suffix('h'))
                .ok_or_else(|| {
                    WalletError::KeyDerivation(format!(
                        "ed25519 requires hardened segments, got {:?}",
                        seg
                    ))
                })?;
            index
                .parse::<u32>()
                .ok()
                .filter(|i| *i < HARDENED_OFFSET)
                .ok_or_else(|| {
                    WalletError::KeyDerivation(format!("invalid path segment {:?}", seg))
                })
        })
        .collect()
}

/// Derive the key at `path` from `seed`.
pub fn derive_path(seed: &[u8], path: &str) -> Result<ExtendedKey, WalletError> {
    let indices = parse_path(path)?;
    let mut key = ExtendedKey::master(seed)?;
    for index in indices {
        key = key.derive_child(index)?;
    }
    Ok(key)
}
