// src/domain/article/signature.rs
use thiserror::Error;

/// Failure to decode or parse a key or signature container.
///
/// A container that decodes cleanly but does not validate the message is not
/// an error; verifiers report it as `Ok(false)`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignatureError {
    #[error("{0} container is not valid UTF-8")]
    Encoding(&'static str),
    #[error("{0} container is missing the untrusted comment line")]
    MissingComment(&'static str),
    #[error("{0} container is missing its payload line")]
    MissingPayload(&'static str),
    #[error("{kind} payload is not valid base64: {reason}")]
    Base64 { kind: &'static str, reason: String },
    #[error("{kind} payload has length {actual}, expected {expected}")]
    Length {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("{0} uses an unsupported algorithm")]
    Algorithm(&'static str),
    #[error("public key is not a valid Ed25519 point")]
    InvalidKey,
}

/// Checks a detached signature over a message with a named public key.
pub trait SignatureVerifier: Send + Sync {
    fn verify(
        &self,
        public_key: &[u8],
        signature: &[u8],
        message: &[u8],
    ) -> Result<bool, SignatureError>;
}

/// Runs `verifier` and folds the outcome into a signed flag. Decode errors
/// leave the flag false and are handed back to the caller.
pub(crate) fn check(
    verifier: &dyn SignatureVerifier,
    public_key: &[u8],
    signature: &[u8],
    message: &[u8],
    signed: &mut bool,
) -> Result<bool, SignatureError> {
    let outcome = verifier.verify(public_key, signature, message);
    *signed = matches!(outcome, Ok(true));
    outcome
}
