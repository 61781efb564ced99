use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::Value;

use crate::models::{ProxyOptions, ProxyRecord, VmessOptions};
use crate::parser::explodes::common::check_port;
use crate::parser::LinkError;

/// Name used when the payload carries no `ps` field.
const DEFAULT_REMARK: &str = "Proxy1";

/// Decode a VMess link into a ProxyRecord
///
/// The part after `vmess://` is standard base64 wrapping a JSON object
/// (the v2rayN share format).
pub fn explode_vmess(vmess: &str) -> Result<ProxyRecord, LinkError> {
    let encoded = vmess
        .strip_prefix("vmess://")
        .ok_or_else(|| LinkError::UnrecognizedScheme(vmess.to_string()))?;

    let decoded = STANDARD
        .decode(encoded)
        .map_err(|e| LinkError::Decode(e.to_string()))?;
    let decoded = String::from_utf8(decoded)
        .map_err(|_| LinkError::Format("payload is not valid UTF-8".to_string()))?;

    let json: Value = serde_json::from_str(&decoded)
        .map_err(|e| LinkError::Format(format!("payload is not valid JSON: {}", e)))?;
    if !json.is_object() {
        return Err(LinkError::Format(
            "payload is not a JSON object".to_string(),
        ));
    }

    let name = json
        .get("ps")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_REMARK)
        .to_string();
    let server = required_str(&json, "add")?;
    let port = check_port(required_u16(&json, "port")?)?;
    let uuid = required_str(&json, "id")?;
    let alter_id = required_u16(&json, "aid")?;
    let network = required_str(&json, "net")?;
    let tls = required_str(&json, "tls")?;
    let ws_path = required_str(&json, "path")?;
    let ws_host = required_str(&json, "host")?;

    Ok(ProxyRecord {
        name,
        server,
        port,
        options: ProxyOptions::VMess(VmessOptions {
            uuid,
            alter_id,
            // Always "auto", never read from the payload.
            cipher: "auto".to_string(),
            network,
            tls,
            ws_path,
            ws_host,
        }),
    })
}

fn required_str(json: &Value, key: &'static str) -> Result<String, LinkError> {
    let value = json.get(key).ok_or(LinkError::FieldMissing(key))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| LinkError::Format(format!("field `{}` is not a string: {}", key, value)))
}

/// Numeric fields in vmess payloads appear either as JSON strings or as
/// JSON numbers; accept both.
fn required_u16(json: &Value, key: &'static str) -> Result<u16, LinkError> {
    let value = json.get(key).ok_or(LinkError::FieldMissing(key))?;
    match value {
        Value::String(s) => s
            .parse::<u16>()
            .map_err(|_| LinkError::Format(format!("field `{}` is not a valid integer: {}", key, s))),
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u16::try_from(n).ok())
            .ok_or_else(|| LinkError::Format(format!("field `{}` is out of range: {}", key, n))),
        _ => Err(LinkError::Format(format!(
            "field `{}` is not an integer: {}",
            key, value
        ))),
    }
}
