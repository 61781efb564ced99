use std::collections::HashMap;

use url::Url;

use crate::models::{ProxyOptions, ProxyRecord, VlessOptions};
use crate::parser::explodes::common::{require_host, require_port};
use crate::parser::LinkError;

/// Decode a VLESS link into a ProxyRecord
///
/// Format: vless://uuid@host:port?params#name
pub fn explode_vless(vless: &str) -> Result<ProxyRecord, LinkError> {
    if !vless.starts_with("vless://") {
        return Err(LinkError::UnrecognizedScheme(vless.to_string()));
    }

    let url = Url::parse(vless)
        .map_err(|e| LinkError::Format(format!("not a valid VLESS URI: {}", e)))?;

    let uuid = url.username().to_string();
    if uuid.is_empty() {
        return Err(LinkError::FieldMissing("uuid"));
    }

    let server = require_host(&url)?;
    let port = require_port(&url)?;

    let params: HashMap<String, String> = url.query_pairs().into_owned().collect();
    let param = |key: &str, default: &str| -> String {
        params.get(key).cloned().unwrap_or_else(|| default.to_string())
    };

    // The fragment is kept verbatim, percent-encoding included.
    let name = url.fragment().unwrap_or("").to_string();

    Ok(ProxyRecord {
        name,
        server,
        port,
        options: ProxyOptions::Vless(VlessOptions {
            uuid,
            encryption: param("encryption", "none"),
            security: param("security", "none"),
            network: param("type", "tcp"),
            ws_path: param("path", ""),
            ws_host: param("host", ""),
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vless_full_link() {
        let link = "vless://b831381d-6324-4d53-ad4f-8cda48b30811@example.com:8443?encryption=none&security=tls&type=ws&path=/vl&host=cdn.example.com#VlNode";
        let record = explode_vless(link).unwrap();

        assert_eq!(record.name, "VlNode");
        assert_eq!(record.server, "example.com");
        assert_eq!(record.port, 8443);
        match record.options {
            ProxyOptions::Vless(opts) => {
                assert_eq!(opts.uuid, "b831381d-6324-4d53-ad4f-8cda48b30811");
                assert_eq!(opts.encryption, "none");
                assert_eq!(opts.security, "tls");
                assert_eq!(opts.network, "ws");
                assert_eq!(opts.ws_path, "/vl");
                assert_eq!(opts.ws_host, "cdn.example.com");
            }
            other => panic!("expected vless options, got {:?}", other),
        }
    }

    #[test]
    fn test_vless_defaults_without_query() {
        let record = explode_vless("vless://uuid@example.com:443#n").unwrap();
        match record.options {
            ProxyOptions::Vless(opts) => {
                assert_eq!(opts.encryption, "none");
                assert_eq!(opts.security, "none");
                assert_eq!(opts.network, "tcp");
                assert_eq!(opts.ws_path, "");
                assert_eq!(opts.ws_host, "");
            }
            other => panic!("expected vless options, got {:?}", other),
        }
    }

    #[test]
    fn test_vless_missing_fragment_gives_empty_name() {
        let record = explode_vless("vless://uuid@example.com:443").unwrap();
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_vless_missing_port() {
        assert_eq!(
            explode_vless("vless://uuid@example.com").unwrap_err(),
            LinkError::FieldMissing("port")
        );
    }

    #[test]
    fn test_vless_missing_host() {
        assert!(explode_vless("vless://uuid@:443").is_err());
    }

    #[test]
    fn test_vless_missing_uuid() {
        assert_eq!(
            explode_vless("vless://example.com:443").unwrap_err(),
            LinkError::FieldMissing("uuid")
        );
    }

    #[test]
    fn test_vless_non_numeric_port() {
        assert!(matches!(
            explode_vless("vless://uuid@example.com:abc"),
            Err(LinkError::Format(_))
        ));
    }
}
