use minijinja::{context, Environment};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::models::{ProxyOptions, ProxyRecord};

/// Errors produced while rendering the config document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("template render failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// The fixed Clash document. Values are interpolated as-is, without YAML
/// escaping: a name or server containing YAML-reserved characters produces
/// structurally invalid output. Known limitation.
const CLASH_TEMPLATE: &str = r#"port: 7890
socks-port: 7891
allow-lan: true
mode: Rule
log-level: info
external-controller: :9090
cfw-latency-timeout: 5000
dns:
  enabled: true
  nameserver:
    - 119.29.29.29
    - 223.5.5.5
  fallback:
    - 8.8.8.8
    - 8.8.4.4
    - tls://1.0.0.1:853
    - tls://dns.google:853
proxies:
  - name: {{ name }}
    type: {{ kind }}
    server: {{ server }}
    port: {{ port }}
{%- if kind == "vmess" %}
    uuid: {{ uuid }}
    alterId: {{ alter_id }}
    cipher: {{ cipher }}
    network: {{ network }}
    tls: {{ tls }}
    ws-opts:
      path: {{ ws_path }}
      headers:
        Host: {{ ws_host }}
{%- elif kind == "vless" %}
    uuid: {{ uuid }}
    encryption: {{ encryption }}
    security: {{ security }}
    network: {{ network }}
    ws-opts:
      path: {{ ws_path }}
      headers:
        Host: {{ ws_host }}
{%- elif kind == "hysteria2" %}
    password: {{ password }}
    sni: {{ sni }}
    skip-cert-verify: {{ skip_cert_verify }}
{%- endif %}
proxy-groups:
  - name: ProxyGroup1
    type: select
    proxies:
      - {{ name }}
rules:
  - DOMAIN-SUFFIX,google.com,ProxyGroup1
  - DOMAIN-SUFFIX,facebook.com,ProxyGroup1
  - DOMAIN-KEYWORD,youtube,ProxyGroup1
  - GEOIP,CN,DIRECT
  - MATCH,ProxyGroup1
"#;

static TEMPLATE_ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("clash", CLASH_TEMPLATE)
        .expect("embedded clash template must parse");
    env
});

/// Render a ProxyRecord into the Clash config document
///
/// Pure and deterministic: the same record always yields the same text.
/// Writing the document to disk is the caller's concern.
pub fn render_clash_config(record: &ProxyRecord) -> Result<String, RenderError> {
    let template = TEMPLATE_ENV.get_template("clash")?;
    let kind = record.proxy_type().as_str();

    let ctx = match &record.options {
        ProxyOptions::VMess(opts) => context! {
            kind,
            name => &record.name,
            server => &record.server,
            port => record.port,
            uuid => &opts.uuid,
            alter_id => opts.alter_id,
            cipher => &opts.cipher,
            network => &opts.network,
            tls => &opts.tls,
            ws_path => &opts.ws_path,
            ws_host => &opts.ws_host,
        },
        ProxyOptions::Vless(opts) => context! {
            kind,
            name => &record.name,
            server => &record.server,
            port => record.port,
            uuid => &opts.uuid,
            encryption => &opts.encryption,
            security => &opts.security,
            network => &opts.network,
            ws_path => &opts.ws_path,
            ws_host => &opts.ws_host,
        },
        ProxyOptions::Hysteria2(opts) => context! {
            kind,
            name => &record.name,
            server => &record.server,
            port => record.port,
            password => &opts.password,
            sni => &opts.sni,
            // Rust's bool Display is lowercase; minijinja would stringify a
            // raw bool as True/False.
            skip_cert_verify => opts.skip_cert_verify.to_string(),
        },
    };

    Ok(template.render(ctx)?)
}
