//! Credential encryption.
//!
//! Private keys and seeds are stored encrypted under the user's password.
//! The vault only ever consumes this as `decrypt(password, blob) -> bytes`
//! through [`KeyCipher`]; [`PasswordCipher`] is the reference implementation
//! using Argon2id key derivation + AES-256-GCM.
//!
//! Blob layout (self-contained apart from the password):
//!
//! ```text
//! magic "VKCB" | version u8 | t_cost u32le | m_cost u32le | parallelism u32le
//!              | salt [32] | nonce [12] | ciphertext+tag
//! ```

use crate::error::WalletError;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Key, Nonce};
use argon2::{Algorithm, Argon2, Params, Version};
use rand::RngCore;
use zeroize::Zeroizing;

/// Magic bytes identifying an encrypted credential blob.
const MAGIC: &[u8; 4] = b"VKCB";

const VERSION: u8 = 1;

const SALT_LEN: usize = 32;
const NONCE_LEN: usize = 12;

/// 4 (magic) + 1 (version) + 12 (argon2 params) + 32 (salt) + 12 (nonce).
const HEADER_SIZE: usize = 4 + 1 + 12 + SALT_LEN + NONCE_LEN;

/// Symmetric password-based cipher for stored key material.
pub trait KeyCipher: Send + Sync {
    fn encrypt(&self, password: &str, plaintext: &[u8]) -> Result<Vec<u8>, WalletError>;

    fn decrypt(&self, password: &str, blob: &[u8]) -> Result<Vec<u8>, WalletError>;
}

/// Argon2id cost parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherParams {
    pub t_cost: u32,
    /// Memory cost in KiB.
    pub m_cost: u32,
    pub parallelism: u32,
}

impl Default for CipherParams {
    /// OWASP recommended minimums.
    fn default() -> Self {
        Self {
            t_cost: 3,
            m_cost: 65536,
            parallelism: 4,
        }
    }
}

/// Argon2id + AES-256-GCM cipher.
#[derive(Debug, Clone, Default)]
pub struct PasswordCipher {
    params: CipherParams,
}

impl PasswordCipher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cipher writing blobs with custom cost parameters. Decryption always
    /// uses the parameters stored in the blob.
    pub fn with_params(params: CipherParams) -> Self {
        Self { params }
    }

    fn derive_key(
        password: &[u8],
        salt: &[u8],
        params: CipherParams,
    ) -> Result<Zeroizing<[u8; 32]>, WalletError> {
        let argon_params = Params::new(params.m_cost, params.t_cost, params.parallelism, Some(32))
            .map_err(|e| WalletError::Encryption(format!("argon2 params: {}", e)))?;
        let argon = Argon2::new(Algorithm::Argon2id, Version::V0x13, argon_params);

        let mut key = Zeroizing::new([0u8; 32]);
        argon
            .hash_password_into(password, salt, &mut key[..])
            .map_err(|e| WalletError::Encryption(e.to_string()))?;
        Ok(key)
    }
}

impl KeyCipher for PasswordCipher {
    #[allow(deprecated)] // aes-gcm 0.10 uses generic-array 0.x
    fn encrypt(&self, password: &str, plaintext: &[u8]) -> Result<Vec<u8>, WalletError> {
        let mut rng = rand::thread_rng();
        let mut salt = [0u8; SALT_LEN];
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rng.fill_bytes(&mut salt);
        rng.fill_bytes(&mut nonce_bytes);

        let key_bytes = Self::derive_key(password.as_bytes(), &salt, self.params)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes[..]));
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext)
            .map_err(|e| WalletError::Encryption(e.to_string()))?;

        let mut output = Vec::with_capacity(HEADER_SIZE + ciphertext.len());
        output.extend_from_slice(MAGIC);
        output.push(VERSION);
        output.extend_from_slice(&self.params.t_cost.to_le_bytes());
        output.extend_from_slice(&self.params.m_cost.to_le_bytes());
        output.extend_from_slice(&self.params.parallelism.to_le_bytes());
        output.extend_from_slice(&salt);
        output.extend_from_slice(&nonce_bytes);
        output.extend_from_slice(&ciphertext);
        Ok(output)
    }

    #[allow(deprecated)] // aes-gcm 0.10 uses generic-array 0.x
    fn decrypt(&self, password: &str, blob: &[u8]) -> Result<Vec<u8>, WalletError> {
        if blob.len() <= HEADER_SIZE {
            return Err(WalletError::InvalidBlob("blob too short".into()));
        }
        if &blob[0..4] != MAGIC {
            return Err(WalletError::InvalidBlob("invalid magic bytes".into()));
        }
        if blob[4] != VERSION {
            return Err(WalletError::InvalidBlob(format!(
                "unsupported version: {}",
                blob[4]
            )));
        }

        let read_u32 = |at: usize| {
            let mut b = [0u8; 4];
            b.copy_from_slice(&blob[at..at + 4]);
            u32::from_le_bytes(b)
        };
        let params = CipherParams {
            t_cost: read_u32(5),
            m_cost: read_u32(9),
            parallelism: read_u32(13),
        };
        let salt = &blob[17..17 + SALT_LEN];
        let nonce_bytes = &blob[17 + SALT_LEN..HEADER_SIZE];
        let ciphertext = &blob[HEADER_SIZE..];

        let key_bytes = Self::derive_key(password.as_bytes(), salt, params)?;
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&key_bytes[..]));
        cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| WalletError::DecryptionFailed)
    }
}
