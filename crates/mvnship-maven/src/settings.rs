//! Rendering a Maven `settings.xml` for deployment.
//!
//! Every secret is written as a `${env.NAME}` placeholder that Maven
//! resolves at run time, so the file itself never holds a credential.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use mvnship_core::config::ProjectConfig;
use mvnship_core::credentials::{
    CENTRAL_PASSWORD, CENTRAL_USERNAME, GITHUB_ACTOR, GITHUB_TOKEN, GPG_PASSPHRASE,
};
use mvnship_util::errors::ShipError;

const SETTINGS_NS: &str = "http://maven.apache.org/SETTINGS/1.2.0";
const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str =
    "http://maven.apache.org/SETTINGS/1.2.0 https://maven.apache.org/xsd/settings-1.2.0.xsd";

/// Id of the profile carrying the signing properties.
pub const SIGNING_PROFILE_ID: &str = "mvnship-signing";

/// A `<server>` entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerEntry {
    pub id: String,
    pub username: String,
    pub password: String,
}

/// The `gpg.*` properties read by `maven-gpg-plugin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningProfile {
    pub key_name: String,
    pub passphrase: String,
}

/// Content of a generated `settings.xml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsTemplate {
    pub servers: Vec<ServerEntry>,
    pub signing: Option<SigningProfile>,
}

fn placeholder(var: &str) -> String {
    format!("${{env.{var}}}")
}

impl SettingsTemplate {
    /// The GitHub and Central servers named in `config`, plus a signing
    /// profile when a GPG key is configured.
    pub fn from_config(config: &ProjectConfig) -> Self {
        let mut servers = vec![ServerEntry {
            id: config.github.server_id.clone(),
            username: placeholder(GITHUB_ACTOR),
            password: placeholder(GITHUB_TOKEN),
        }];
        if config.central.server_id != config.github.server_id {
            servers.push(ServerEntry {
                id: config.central.server_id.clone(),
                username: placeholder(CENTRAL_USERNAME),
                password: placeholder(CENTRAL_PASSWORD),
            });
        }
        let signing = config.gpg.key_id.as_ref().map(|key| SigningProfile {
            key_name: key.clone(),
            passphrase: placeholder(GPG_PASSPHRASE),
        });
        Self { servers, signing }
    }

    /// Render the document, indented by two spaces.
    pub fn render(&self) -> Result<String, ShipError> {
        let mut out = XmlOut::new();
        out.event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

        let root = BytesStart::new("settings").with_attributes([
            ("xmlns", SETTINGS_NS),
            ("xmlns:xsi", XSI_NS),
            ("xsi:schemaLocation", SCHEMA_LOCATION),
        ]);
        out.event(Event::Start(root))?;

        out.start("servers")?;
        for server in &self.servers {
            out.start("server")?;
            out.text_element("id", &server.id)?;
            out.text_element("username", &server.username)?;
            out.text_element("password", &server.password)?;
            out.end("server")?;
        }
        out.end("servers")?;

        if let Some(ref signing) = self.signing {
            out.start("profiles")?;
            out.start("profile")?;
            out.text_element("id", SIGNING_PROFILE_ID)?;
            out.start("properties")?;
            out.text_element("gpg.keyname", &signing.key_name)?;
            out.text_element("gpg.passphrase", &signing.passphrase)?;
            out.end("properties")?;
            out.end("profile")?;
            out.end("profiles")?;

            out.start("activeProfiles")?;
            out.text_element("activeProfile", SIGNING_PROFILE_ID)?;
            out.end("activeProfiles")?;
        }

        out.end("settings")?;
        out.finish()
    }
}

struct XmlOut {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlOut {
    fn new() -> Self {
        Self {
            writer: Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2),
        }
    }

    fn event(&mut self, event: Event<'_>) -> Result<(), ShipError> {
        self.writer
            .write_event(event)
            .map_err(|e| ShipError::Generic {
                message: format!("Failed to render settings.xml: {e}"),
            })
    }

    fn start(&mut self, name: &str) -> Result<(), ShipError> {
        self.event(Event::Start(BytesStart::new(name)))
    }

    fn end(&mut self, name: &str) -> Result<(), ShipError> {
        self.event(Event::End(BytesEnd::new(name)))
    }

    fn text_element(&mut self, name: &str, text: &str) -> Result<(), ShipError> {
        self.start(name)?;
        self.event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn finish(self) -> Result<String, ShipError> {
        let mut xml =
            String::from_utf8(self.writer.into_inner().into_inner()).map_err(|e| {
                ShipError::Generic {
                    message: format!("settings.xml is not UTF-8: {e}"),
                }
            })?;
        xml.push('\n');
        Ok(xml)
    }
}
