use std::collections::HashMap;

use url::Url;

use crate::models::{Hysteria2Options, ProxyOptions, ProxyRecord};
use crate::parser::explodes::common::{require_host, require_port};
use crate::parser::LinkError;

/// Decode a Hysteria2 link into a ProxyRecord
///
/// Format: hysteria2://password@host:port?params#name
pub fn explode_hysteria2(hysteria2: &str) -> Result<ProxyRecord, LinkError> {
    if !hysteria2.starts_with("hysteria2://") {
        return Err(LinkError::UnrecognizedScheme(hysteria2.to_string()));
    }

    let url = Url::parse(hysteria2)
        .map_err(|e| LinkError::Format(format!("not a valid Hysteria2 URI: {}", e)))?;

    let password = url.username().to_string();
    if password.is_empty() {
        return Err(LinkError::FieldMissing("password"));
    }

    let server = require_host(&url)?;
    let port = require_port(&url)?;

    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();

    let sni = params.get("sni").cloned().unwrap_or_default();
    // Exact string match: only the literal "1" enables it. "true" does not.
    let skip_cert_verify = params.get("insecure").map(String::as_str) == Some("1");

    let name = url.fragment().unwrap_or("").to_string();

    Ok(ProxyRecord {
        name,
        server,
        port,
        options: ProxyOptions::Hysteria2(Hysteria2Options {
            password,
            sni,
            skip_cert_verify,
        }),
    })
}
