//! AES-256-CBC encryption of a single token.
//!
//! Every call draws a fresh 32-byte key and 16-byte IV, PKCS#7-pads the UTF-8
//! bytes of the token and returns `base64(iv || ciphertext)` together with
//! `base64(key)`.
//!
//! There is no MAC over the payload: it provides confidentiality only. The
//! consuming application decrypts with plain AES/CBC/PKCS5Padding, so adding an
//! authentication tag would change the wire format on both sides.

use aes::Aes256;
use base64::{engine::general_purpose, Engine as _};
use cbc::cipher::{block_padding::NoPadding, BlockEncryptMut, KeyIvInit};
use rand::{rngs::OsRng, CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::error::TokenError;

type Aes256CbcEnc = cbc::Encryptor<Aes256>;

pub const KEY_LEN: usize = 32;
pub const IV_LEN: usize = 16;
pub const BLOCK_SIZE: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedToken {
    /// `base64(iv || ciphertext)`
    pub encrypted: String,
    /// `base64(key)`
    pub key: String,
}

pub struct TokenEncryptor<R = OsRng> {
    rng: R,
}

impl Default for TokenEncryptor<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenEncryptor<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> TokenEncryptor<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn encrypt(&mut self, secret: &str) -> Result<EncryptedToken, TokenError> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        self.rng.try_fill_bytes(&mut key[..])?;

        let mut iv = Zeroizing::new([0u8; IV_LEN]);
        self.rng.try_fill_bytes(&mut iv[..])?;

        Ok(encrypt_with(&key, &iv, secret))
    }
}

/// Deterministic core of [`TokenEncryptor::encrypt`].
pub fn encrypt_with(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], secret: &str) -> EncryptedToken {
    let payload = seal(key, iv, secret.as_bytes());
    debug!(
        "Encrypted {} plaintext bytes into a {} byte payload",
        secret.len(),
        payload.len()
    );

    EncryptedToken {
        encrypted: general_purpose::STANDARD.encode(&payload),
        key: general_purpose::STANDARD.encode(key),
    }
}

/// Returns `iv || AES-256-CBC(key, iv, pkcs7_pad(plaintext))`.
fn seal(key: &[u8; KEY_LEN], iv: &[u8; IV_LEN], plaintext: &[u8]) -> Vec<u8> {
    let padded = Zeroizing::new(pkcs7_pad(plaintext));

    // Input is already block-aligned, so NoPadding never rejects it.
    let ciphertext = Aes256CbcEnc::new(key.into(), iv.into())
        .encrypt_padded_vec_mut::<NoPadding>(&padded);

    let mut payload = Vec::with_capacity(IV_LEN + padded_len(plaintext.len()));
    payload.extend_from_slice(iv);
    payload.extend_from_slice(&ciphertext);
    payload
}

/// Length of `data` after PKCS#7 padding. Aligned input gains a whole block.
pub fn padded_len(len: usize) -> usize {
    len + (BLOCK_SIZE - len % BLOCK_SIZE)
}

pub fn pkcs7_pad(data: &[u8]) -> Vec<u8> {
    let total = padded_len(data.len());
    let pad_length = (total - data.len()) as u8;

    let mut padded = Vec::with_capacity(total);
    padded.extend_from_slice(data);
    padded.resize(total, pad_length);
    padded
}
