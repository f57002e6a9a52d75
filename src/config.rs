use std::env;
use std::fmt;
use std::net::IpAddr;

use axum::http::HeaderName;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::connect::verify::HmacAlgorithm;
use crate::error::ConfigError;

pub const DEFAULT_SIGNATURE_HEADER: &str = "X-DocuSign-Signature-1";
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// HMAC key shared with DocuSign Connect. Never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Result<Self, ConfigError> {
        let bytes = bytes.into();
        if bytes.is_empty() {
            return Err(ConfigError::MissingSecret);
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedSecret(<redacted>)")
    }
}

#[derive(Debug, Clone)]
pub struct ConnectConfig {
    pub secret: SharedSecret,
    pub signature_header: HeaderName,
    pub algorithm: HmacAlgorithm,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub connect: ConnectConfig,
    pub host: IpAddr,
    pub port: u16,
    pub max_body_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup. Unset and empty values
    /// are treated the same.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let secret = var("DS_CONNECT_KEY").ok_or(ConfigError::MissingSecret)?;
        let secret = SharedSecret::new(secret.into_bytes())?;

        let signature_header =
            var("DS_CONNECT_SIGNATURE_HEADER").unwrap_or_else(|| DEFAULT_SIGNATURE_HEADER.into());
        let signature_header = HeaderName::from_bytes(signature_header.trim().as_bytes())
            .map_err(|_| ConfigError::invalid("DS_CONNECT_SIGNATURE_HEADER", signature_header))?;

        let algorithm = match var("DS_CONNECT_HMAC_ALGORITHM") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::invalid("DS_CONNECT_HMAC_ALGORITHM", v))?,
            None => HmacAlgorithm::default(),
        };

        let host = match var("HOST") {
            Some(v) => v
                .trim()
                .parse()
                .map_err(|_| ConfigError::invalid("HOST", v))?,
            None => IpAddr::from([0, 0, 0, 0]),
        };

        let port = match var("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::invalid("PORT", v))?,
            None => 3000,
        };

        let max_body_bytes = match var("MAX_BODY_BYTES") {
            Some(v) => match v.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::invalid("MAX_BODY_BYTES", v)),
            },
            None => DEFAULT_MAX_BODY_BYTES,
        };

        Ok(Self {
            connect: ConnectConfig {
                secret,
                signature_header,
                algorithm,
            },
            host,
            port,
            max_body_bytes,
        })
    }
}
