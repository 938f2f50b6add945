// tests/support/mocks/signing.rs
//! signify 形式の鍵と署名を生成する
use base64::{Engine as _, engine::general_purpose::STANDARD};
use ed25519_dalek::{Signer as _, SigningKey};

pub struct TestSigner {
    key: SigningKey,
    keynum: [u8; 8],
}

impl TestSigner {
    pub fn new(seed: u8) -> Self {
        Self {
            key: SigningKey::from_bytes(&[seed; 32]),
            keynum: [seed; 8],
        }
    }

    /// Contents of a `.pub` file.
    pub fn public_key(&self) -> Vec<u8> {
        let mut payload = b"Ed".to_vec();
        payload.extend_from_slice(&self.keynum);
        payload.extend_from_slice(self.key.verifying_key().as_bytes());
        container("signify public key", &payload)
    }

    /// Contents of a detached `.sig` file over `message`.
    pub fn sign(&self, message: &[u8]) -> Vec<u8> {
        let mut payload = b"Ed".to_vec();
        payload.extend_from_slice(&self.keynum);
        payload.extend_from_slice(&self.key.sign(message).to_bytes());
        container("verify with test.pub", &payload)
    }
}

fn container(comment: &str, payload: &[u8]) -> Vec<u8> {
    format!("untrusted comment: {comment}\n{}\n", STANDARD.encode(payload)).into_bytes()
}
