// src/infrastructure/security/signify.rs
//! Detached Ed25519 signatures in the OpenBSD signify container format.
//!
//! A container is an `untrusted comment: ` line followed by one base64 line.
//! Decoded, a public key is `Ed` + 8-byte key number + 32-byte key, and a
//! signature is `Ed` + 8-byte key number + 64-byte signature.
use crate::domain::article::{SignatureError, SignatureVerifier};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use ed25519_dalek::{Signature, Verifier as _, VerifyingKey};

const COMMENT_PREFIX: &str = "untrusted comment: ";
const ALGORITHM: &[u8; 2] = b"Ed";
const KEYNUM_LEN: usize = 8;
const PUBLIC_KEY_LEN: usize = 2 + KEYNUM_LEN + 32;
const SIGNATURE_LEN: usize = 2 + KEYNUM_LEN + 64;

#[derive(Debug, Default, Clone, Copy)]
pub struct SignifyVerifier;

struct Payload<'a> {
    keynum: &'a [u8],
    material: &'a [u8],
}

fn decode_container(kind: &'static str, data: &[u8]) -> Result<Vec<u8>, SignatureError> {
    let text = std::str::from_utf8(data).map_err(|_| SignatureError::Encoding(kind))?;
    let mut lines = text.lines();

    match lines.next() {
        Some(comment) if comment.starts_with(COMMENT_PREFIX) => {}
        _ => return Err(SignatureError::MissingComment(kind)),
    }

    let payload = lines
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .ok_or(SignatureError::MissingPayload(kind))?;

    STANDARD
        .decode(payload)
        .map_err(|err| SignatureError::Base64 {
            kind,
            reason: err.to_string(),
        })
}

fn split_payload<'a>(
    kind: &'static str,
    decoded: &'a [u8],
    expected: usize,
) -> Result<Payload<'a>, SignatureError> {
    if decoded.len() != expected {
        return Err(SignatureError::Length {
            kind,
            expected,
            actual: decoded.len(),
        });
    }
    let (algorithm, rest) = decoded.split_at(ALGORITHM.len());
    if algorithm != ALGORITHM {
        return Err(SignatureError::Algorithm(kind));
    }
    let (keynum, material) = rest.split_at(KEYNUM_LEN);
    Ok(Payload { keynum, material })
}

fn to_array<const N: usize>(kind: &'static str, bytes: &[u8]) -> Result<[u8; N], SignatureError> {
    bytes.try_into().map_err(|_| SignatureError::Length {
        kind,
        expected: N,
        actual: bytes.len(),
    })
}

impl SignatureVerifier for SignifyVerifier {
    /// `Ok(false)` when the key numbers differ or the signature does not
    /// match the message. Every decode problem is an error instead.
    fn verify(
        &self,
        public_key: &[u8],
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool, SignatureError> {
        let key_bytes = decode_container("public key", public_key)?;
        let key = split_payload("public key", &key_bytes, PUBLIC_KEY_LEN)?;
        let sig_bytes = decode_container("signature", signature)?;
        let sig = split_payload("signature", &sig_bytes, SIGNATURE_LEN)?;

        if key.keynum != sig.keynum {
            tracing::debug!("signature key number does not match the public key");
            return Ok(false);
        }

        let verifying_key = VerifyingKey::from_bytes(&to_array("public key", key.material)?)
            .map_err(|_| SignatureError::InvalidKey)?;
        let signature = Signature::from_bytes(&to_array("signature", sig.material)?);

        Ok(verifying_key.verify(message, &signature).is_ok())
    }
}
