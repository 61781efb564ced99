pub mod common;
pub mod hysteria2;
pub mod vless;
pub mod vmess;
