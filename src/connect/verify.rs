use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use hmac::digest::InvalidLength;
use hmac::{Hmac, Mac};
use sha2::{Sha256, Sha512};

use crate::config::{ConnectConfig, SharedSecret};

/// Why a request failed authentication. Logged, never sent to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthFailure {
    #[error("signature header missing")]
    MissingHeader,
    #[error("signature header is not valid base64")]
    MalformedSignature,
    #[error("signature mismatch")]
    Mismatch,
}

/// Hash used inside the HMAC. Connect signs with SHA-256.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HmacAlgorithm {
    #[default]
    Sha256,
    Sha512,
}

impl HmacAlgorithm {
    pub fn mac(self, key: &[u8], message: &[u8]) -> Result<Vec<u8>, InvalidLength> {
        match self {
            Self::Sha256 => {
                let mut mac = Hmac::<Sha256>::new_from_slice(key)?;
                mac.update(message);
                Ok(mac.finalize().into_bytes().to_vec())
            }
            Self::Sha512 => {
                let mut mac = Hmac::<Sha512>::new_from_slice(key)?;
                mac.update(message);
                Ok(mac.finalize().into_bytes().to_vec())
            }
        }
    }
}

impl FromStr for HmacAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sha256" | "sha-256" | "hmac-sha256" => Ok(Self::Sha256),
            "sha512" | "sha-512" | "hmac-sha512" => Ok(Self::Sha512),
            other => Err(format!("unsupported hmac algorithm: {other}")),
        }
    }
}

impl fmt::Display for HmacAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sha256 => f.write_str("sha256"),
            Self::Sha512 => f.write_str("sha512"),
        }
    }
}

/// Checks `X-DocuSign-Signature-*` values against the configured secret.
///
/// Immutable once built, so a single instance is shared by every request.
#[derive(Debug, Clone)]
pub struct SignatureVerifier {
    secret: SharedSecret,
    algorithm: HmacAlgorithm,
}

impl SignatureVerifier {
    pub fn new(secret: SharedSecret, algorithm: HmacAlgorithm) -> Self {
        Self { secret, algorithm }
    }

    pub fn from_config(config: &ConnectConfig) -> Self {
        Self::new(config.secret.clone(), config.algorithm)
    }

    /// Authenticate `body` against the claimed base64 signature.
    ///
    /// `body` must be the exact bytes received; it is hashed as-is.
    pub fn verify(&self, header: Option<&str>, body: &[u8]) -> Result<(), AuthFailure> {
        let claimed = match header.map(str::trim) {
            Some(value) if !value.is_empty() => value,
            _ => return Err(AuthFailure::MissingHeader),
        };
        let Ok(claimed) = STANDARD.decode(claimed) else {
            return Err(AuthFailure::MalformedSignature);
        };
        let Ok(computed) = self.algorithm.mac(self.secret.as_bytes(), body) else {
            return Err(AuthFailure::Mismatch);
        };
        if constant_time_eq(&computed, &claimed) {
            Ok(())
        } else {
            Err(AuthFailure::Mismatch)
        }
    }

    /// The header value a sender holding the same secret would attach.
    pub fn sign(&self, body: &[u8]) -> Result<String, InvalidLength> {
        let mac = self.algorithm.mac(self.secret.as_bytes(), body)?;
        Ok(STANDARD.encode(mac))
    }
}

/// Length is compared up front; equal-length inputs are always scanned to the
/// end so the running time does not depend on where they differ.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .zip(b.iter())
        .fold(0u8, |acc, (x, y)| acc | (x ^ y))
        == 0
}
