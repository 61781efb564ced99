use base64::{engine::general_purpose::STANDARD, Engine};
use serde_json::json;

use clashlink::{explode, LinkError, ProxyOptions, ProxyType};

fn vmess_link(payload: &serde_json::Value) -> String {
    format!("vmess://{}", STANDARD.encode(payload.to_string()))
}

#[test]
fn test_vmess_decode_maps_all_fields() {
    let link = vmess_link(&json!({
        "v": "2",
        "ps": "Tokyo 01",
        "add": "jp.example.com",
        "port": "443",
        "id": "b831381d-6324-4d53-ad4f-8cda48b30811",
        "aid": "2",
        "net": "ws",
        "type": "none",
        "host": "cdn.example.com",
        "path": "/tunnel",
        "tls": "tls"
    }));

    let record = explode(&link).unwrap();
    assert_eq!(record.proxy_type(), ProxyType::VMess);
    assert_eq!(record.name, "Tokyo 01");
    assert_eq!(record.server, "jp.example.com");
    assert_eq!(record.port, 443);

    match &record.options {
        ProxyOptions::VMess(opts) => {
            assert_eq!(opts.uuid, "b831381d-6324-4d53-ad4f-8cda48b30811");
            assert_eq!(opts.alter_id, 2);
            assert_eq!(opts.cipher, "auto");
            assert_eq!(opts.network, "ws");
            assert_eq!(opts.tls, "tls");
            assert_eq!(opts.ws_path, "/tunnel");
            assert_eq!(opts.ws_host, "cdn.example.com");
        }
        other => panic!("expected vmess options, got {:?}", other),
    }
}

#[test]
fn test_vmess_reencode_decode_is_idempotent() {
    let link = vmess_link(&json!({
        "ps": "Node A",
        "add": "a.example.com",
        "port": "8080",
        "id": "uuid-a",
        "aid": "1",
        "net": "ws",
        "host": "h.example.com",
        "path": "/a",
        "tls": ""
    }));
    let record = explode(&link).unwrap();

    // Rebuild the source object from the record's semantic fields and
    // decode it again.
    let opts = match &record.options {
        ProxyOptions::VMess(opts) => opts,
        other => panic!("expected vmess options, got {:?}", other),
    };
    let reencoded = vmess_link(&json!({
        "ps": record.name,
        "add": record.server,
        "port": record.port.to_string(),
        "id": opts.uuid,
        "aid": opts.alter_id.to_string(),
        "net": opts.network,
        "host": opts.ws_host,
        "path": opts.ws_path,
        "tls": opts.tls
    }));

    assert_eq!(explode(&reencoded).unwrap(), record);
}

#[test]
fn test_vmess_missing_required_key_is_named() {
    let link = vmess_link(&json!({
        "ps": "n",
        "add": "h",
        "port": "80",
        "id": "u",
        "aid": "0",
        "net": "tcp",
        "path": "",
        "tls": ""
        // no "host"
    }));
    assert_eq!(explode(&link).unwrap_err(), LinkError::FieldMissing("host"));
}

#[test]
fn test_vmess_bad_base64_is_decode_error() {
    assert!(matches!(
        explode("vmess://%%%%"),
        Err(LinkError::Decode(_))
    ));
}

#[test]
fn test_vmess_garbage_payload_is_format_error() {
    let link = format!("vmess://{}", STANDARD.encode("definitely not json"));
    assert!(matches!(explode(&link), Err(LinkError::Format(_))));
}
