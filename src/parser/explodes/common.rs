use url::Url;

use crate::models::ProxyRecord;
use crate::parser::LinkError;

/// Explode a share link into a ProxyRecord
///
/// This function detects the link scheme and calls the appropriate decoder.
pub fn explode(link: &str) -> Result<ProxyRecord, LinkError> {
    let link = link.trim();

    if link.starts_with("vmess://") {
        super::vmess::explode_vmess(link)
    } else if link.starts_with("vless://") {
        super::vless::explode_vless(link)
    } else if link.starts_with("hysteria2://") {
        super::hysteria2::explode_hysteria2(link)
    } else {
        Err(LinkError::UnrecognizedScheme(link.to_string()))
    }
}

/// Validate a port value against the 1-65535 range.
pub(crate) fn check_port(port: u16) -> Result<u16, LinkError> {
    if port == 0 {
        return Err(LinkError::Format("port must be in range 1-65535".to_string()));
    }
    Ok(port)
}

/// Extract the hostname from a parsed URI link.
pub(crate) fn require_host(url: &Url) -> Result<String, LinkError> {
    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(host.to_string()),
        _ => Err(LinkError::FieldMissing("server")),
    }
}

/// Extract the port from a parsed URI link. URI schemes handled here carry
/// no default port, so an absent port is an error.
pub(crate) fn require_port(url: &Url) -> Result<u16, LinkError> {
    let port = url.port().ok_or(LinkError::FieldMissing("port"))?;
    check_port(port)
}
