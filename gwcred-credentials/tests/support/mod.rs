//! Shared test helpers: gateway key pairs and a gateway-side opener for
//! both wire formats.

#![allow(dead_code)]

use std::sync::OnceLock;

use aes::cipher::block_padding::Pkcs7;
use aes::cipher::{BlockDecryptMut, KeyIvInit};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use gwcred_credentials::PublicKey;
use gwcred_crypto::{AeAlgorithms, AeMac, BLOCK_SIZE, RSA_1024_BLOCK_LEN, oaep_base64_len};
use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Encrypt, RsaPrivateKey};
use sha2::{Sha256, Sha384, Sha512};

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

pub fn rsa_1024() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut OsRng, 1024).expect("1024-bit keygen"))
}

pub fn rsa_2048() -> &'static RsaPrivateKey {
    static KEY: OnceLock<RsaPrivateKey> = OnceLock::new();
    KEY.get_or_init(|| RsaPrivateKey::new(&mut OsRng, 2048).expect("2048-bit keygen"))
}

/// The key as the service publishes it: base64 modulus and exponent.
pub fn published(key: &RsaPrivateKey) -> PublicKey {
    PublicKey::new(
        STANDARD.encode(key.n().to_bytes_be()),
        STANDARD.encode(key.e().to_bytes_be()),
    )
}

/// Decrypts a segmented payload (base64 of concatenated 128-byte blocks).
pub fn open_segmented(key: &RsaPrivateKey, payload: &str) -> Vec<u8> {
    let blocks = STANDARD.decode(payload).expect("segmented payload is base64");
    assert_eq!(blocks.len() % RSA_1024_BLOCK_LEN, 0, "partial block");
    blocks
        .chunks(RSA_1024_BLOCK_LEN)
        .flat_map(|block| key.decrypt(Pkcs1v15Encrypt, block).expect("pkcs1 decrypt"))
        .collect()
}

/// Unwraps the key blob of a hybrid payload and opens its envelope.
pub fn open_hybrid(key: &RsaPrivateKey, payload: &str) -> Vec<u8> {
    let (wrapped_b64, envelope_b64) = payload.split_at(oaep_base64_len(key.size()));
    let wrapped = STANDARD.decode(wrapped_b64).expect("oaep half is base64");
    let envelope = STANDARD.decode(envelope_b64).expect("envelope half is base64");

    let blob = key
        .decrypt(Oaep::new::<Sha256>(), &wrapped)
        .expect("oaep decrypt");
    assert_eq!(blob.len(), 98);
    assert_eq!(&blob[..2], &[0x00, 0x01]);
    let (aes_key, hmac_key) = blob[2..].split_at(32);

    open_envelope(aes_key, hmac_key, &envelope).expect("envelope opens")
}

/// Verifies the tag and decrypts an authenticated-encryption envelope.
pub fn open_envelope(key_enc: &[u8], key_mac: &[u8], envelope: &[u8]) -> Result<Vec<u8>, String> {
    if envelope.len() < 2 {
        return Err("truncated header".into());
    }
    let algorithms =
        AeAlgorithms::from_ids([envelope[0], envelope[1]]).map_err(|e| e.to_string())?;
    let tag_len = algorithms.mac.tag_len();
    if envelope.len() < 2 + tag_len + BLOCK_SIZE {
        return Err("truncated envelope".into());
    }

    let (ids, rest) = envelope.split_at(2);
    let (tag, body) = rest.split_at(tag_len);
    let (iv, ciphertext) = body.split_at(BLOCK_SIZE);

    let parts: [&[u8]; 3] = [ids, iv, ciphertext];
    match algorithms.mac {
        AeMac::HmacSha256 => verify_tag::<Hmac<Sha256>>(key_mac, &parts, tag)?,
        AeMac::HmacSha384 => verify_tag::<Hmac<Sha384>>(key_mac, &parts, tag)?,
        AeMac::HmacSha512 => verify_tag::<Hmac<Sha512>>(key_mac, &parts, tag)?,
    }

    Aes256CbcDec::new_from_slices(&key_enc[..32], iv)
        .map_err(|e| e.to_string())?
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| "bad padding".to_string())
}

/// The MAC id byte written into a hybrid payload's envelope.
pub fn hybrid_mac_id(key: &RsaPrivateKey, payload: &str) -> u8 {
    let envelope_b64 = &payload[oaep_base64_len(key.size())..];
    STANDARD.decode(envelope_b64).expect("envelope half is base64")[1]
}

fn verify_tag<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]], tag: &[u8]) -> Result<(), String> {
    let mut mac = <M as KeyInit>::new_from_slice(key).map_err(|e| e.to_string())?;
    for part in parts {
        mac.update(part);
    }
    mac.verify_slice(tag).map_err(|_| "mac mismatch".to_string())
}
