//! The `server.json` document and the rules that build it from CLI flags.

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// CF engine every generated config pins.
pub const CFENGINE: &str = "adobe@2018";

/// Host value treated the same as "no host given".
pub const LOOPBACK_HOST: &str = "127.0.0.1";

/// User-supplied values the builder consumes. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOptions {
    pub name: Option<String>,
    pub host: Option<String>,
    /// 0 means unset.
    pub port: u16,
}

/// Top-level `server.json` structure.
///
/// Field order is the key order in the emitted JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    pub app: AppSettings,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    pub cfengine: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            cfengine: CFENGINE.to_string(),
        }
    }
}

/// The `web` block. Only emitted when at least one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpSettings>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpSettings {
    pub port: u16,
}

impl WebSettings {
    fn is_empty(&self) -> bool {
        self.host.is_none() && self.http.is_none()
    }
}

impl ServerConfig {
    /// Build the document from user flags.
    pub fn from_options(opts: &ConfigOptions) -> Self {
        let name = opts.name.as_deref().filter(|n| !n.is_empty());

        let web = WebSettings {
            host: opts
                .host
                .as_deref()
                .filter(|h| !h.is_empty() && *h != LOOPBACK_HOST)
                .map(str::to_string),
            http: (opts.port > 0).then_some(HttpSettings { port: opts.port }),
        };

        Self {
            app: AppSettings::default(),
            name: name.map(str::to_string),
            web: (!web.is_empty()).then_some(web),
        }
    }

    /// Serialize as JSON indented with four spaces, no trailing newline.
    pub fn to_json(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut ser)?;
        Ok(buf)
    }

    /// Parse a document previously produced by [`ServerConfig::to_json`].
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
