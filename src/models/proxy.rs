//! Proxy model definitions
//!
//! Contains the core data structures for decoded share links.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Represents the scheme of a decoded share link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    VMess,
    Vless,
    Hysteria2,
}

impl ProxyType {
    /// The lowercase scheme name as it appears in the rendered config.
    pub fn as_str(self) -> &'static str {
        match self {
            ProxyType::VMess => "vmess",
            ProxyType::Vless => "vless",
            ProxyType::Hysteria2 => "hysteria2",
        }
    }
}

impl fmt::Display for ProxyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields specific to a VMess node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VmessOptions {
    pub uuid: String,
    pub alter_id: u16,
    pub cipher: String,
    pub network: String,
    pub tls: String,
    pub ws_path: String,
    pub ws_host: String,
}

/// Fields specific to a VLESS node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VlessOptions {
    pub uuid: String,
    pub encryption: String,
    pub security: String,
    pub network: String,
    pub ws_path: String,
    pub ws_host: String,
}

/// Fields specific to a Hysteria2 node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hysteria2Options {
    pub password: String,
    pub sni: String,
    pub skip_cert_verify: bool,
}

/// Per-scheme options of a decoded node. Each variant declares exactly the
/// fields that are meaningful for its scheme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ProxyOptions {
    VMess(VmessOptions),
    Vless(VlessOptions),
    Hysteria2(Hysteria2Options),
}

/// A fully decoded share link. Created once per run by exactly one decoder
/// and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRecord {
    pub name: String,
    pub server: String,
    pub port: u16,
    #[serde(flatten)]
    pub options: ProxyOptions,
}

impl ProxyRecord {
    pub fn proxy_type(&self) -> ProxyType {
        match self.options {
            ProxyOptions::VMess(_) => ProxyType::VMess,
            ProxyOptions::Vless(_) => ProxyType::Vless,
            ProxyOptions::Hysteria2(_) => ProxyType::Hysteria2,
        }
    }
}

/// Node-info listing shown by the interactive shell.
impl fmt::Display for ProxyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- name: {}", self.name)?;
        writeln!(f, "  type: {}", self.proxy_type())?;
        writeln!(f, "  server: {}", self.server)?;
        writeln!(f, "  port: {}", self.port)?;
        match &self.options {
            ProxyOptions::VMess(opts) => {
                writeln!(f, "  uuid: {}", opts.uuid)?;
                writeln!(f, "  alterId: {}", opts.alter_id)?;
                writeln!(f, "  cipher: {}", opts.cipher)?;
                writeln!(f, "  network: {}", opts.network)?;
                writeln!(f, "  tls: {}", opts.tls)?;
                writeln!(f, "  ws-opts:")?;
                writeln!(f, "    path: {}", opts.ws_path)?;
                writeln!(f, "    headers:")?;
                writeln!(f, "      Host: {}", opts.ws_host)
            }
            ProxyOptions::Vless(opts) => {
                writeln!(f, "  uuid: {}", opts.uuid)?;
                writeln!(f, "  encryption: {}", opts.encryption)?;
                writeln!(f, "  security: {}", opts.security)?;
                writeln!(f, "  network: {}", opts.network)?;
                writeln!(f, "  ws-opts:")?;
                writeln!(f, "    path: {}", opts.ws_path)?;
                writeln!(f, "    headers:")?;
                writeln!(f, "      Host: {}", opts.ws_host)
            }
            ProxyOptions::Hysteria2(opts) => {
                writeln!(f, "  password: {}", opts.password)?;
                writeln!(f, "  sni: {}", opts.sni)?;
                writeln!(f, "  skip-cert-verify: {}", opts.skip_cert_verify)
            }
        }
    }
}
