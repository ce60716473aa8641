//! Content payloads.
//!
//! A [`ContentPayload`] is what a user wants the code to carry. It is turned into the text a
//! matrix source encodes: URLs and plain text as given, contacts as a vCard 3.0 record and
//! WiFi credentials in the `WIFI:` scheme understood by phone cameras.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, Result};

/// WiFi authentication type.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum WifiSecurity {
    #[default]
    #[serde(rename = "WPA")]
    Wpa,
    #[serde(rename = "WEP")]
    Wep,
    #[serde(rename = "nopass")]
    NoPass,
}

impl WifiSecurity {
    /// Token written after `T:` in a WiFi payload.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::NoPass => "nopass",
        }
    }
}

impl fmt::Display for WifiSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Content to encode.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentPayload {
    Url { content: String },
    Text { content: String },
    Contact {
        #[serde(default)]
        name: String,
        #[serde(default)]
        phone: String,
        #[serde(default)]
        email: String,
        #[serde(default)]
        org: String,
    },
    Wifi {
        ssid: String,
        #[serde(default)]
        password: String,
        #[serde(default)]
        security: WifiSecurity,
    },
}

impl ContentPayload {
    /// Checks that the payload carries something worth encoding.
    pub fn validate(&self) -> Result<()> {
        fn blank(s: &str) -> bool {
            s.trim().is_empty()
        }
        match self {
            Self::Url { content } if blank(content) => Err(RenderError::EmptyContent("url is empty")),
            Self::Text { content } if blank(content) => {
                Err(RenderError::EmptyContent("text is empty"))
            }
            Self::Contact {
                name,
                phone,
                email,
                org,
            } if [name, phone, email, org].iter().all(|f| blank(f.as_str())) => {
                Err(RenderError::EmptyContent("contact has no fields"))
            }
            Self::Wifi { ssid, .. } if blank(ssid) => {
                Err(RenderError::EmptyContent("wifi network name is empty"))
            }
            _ => Ok(()),
        }
    }

    /// Returns the text a matrix source should encode.
    ///
    /// # Example
    ///
    /// ```rust
    /// use qrstyle::payload::{ContentPayload, WifiSecurity};
    ///
    /// let wifi = ContentPayload::Wifi {
    ///     ssid: "home".to_owned(),
    ///     password: "secret".to_owned(),
    ///     security: WifiSecurity::Wpa,
    /// };
    /// assert_eq!(wifi.encode(), "WIFI:T:WPA;S:home;P:secret;;");
    /// ```
    pub fn encode(&self) -> String {
        match self {
            Self::Url { content } | Self::Text { content } => content.clone(),
            Self::Contact {
                name,
                phone,
                email,
                org,
            } => format!(
                "BEGIN:VCARD\nVERSION:3.0\nFN:{name}\nTEL:{phone}\nEMAIL:{email}\nORG:{org}\nEND:VCARD"
            ),
            Self::Wifi {
                ssid,
                password,
                security,
            } => format!("WIFI:T:{security};S:{ssid};P:{password};;"),
        }
    }
}
