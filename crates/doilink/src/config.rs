//! Upstream endpoint configuration.
//!
//! A [`Config`] names the base URL of every service a resolution talks to. The defaults are the
//! public production endpoints; a TOML file may override any subset of them.
//!
//! ```toml
//! agency_url = "https://doi.org/doiRA"
//! crossref_url = "https://api.crossref.org/works"
//! datacite_url = "https://api.datacite.org/application/vnd.datacite.datacite+json"
//! landing_url = "https://doi.org"
//! ```

use super::*;

/// Base URLs for the agency lookup, agency APIs and DOI landing pages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
  /// Registration agency lookup, queried as `{agency_url}/{doi}`
  pub agency_url:   String,
  /// Crossref works API, queried as `{crossref_url}/{encoded doi}`
  pub crossref_url: String,
  /// DataCite JSON representation, queried as `{datacite_url}/{doi}`
  pub datacite_url: String,
  /// DOI resolver used for publisher landing pages, queried as `{landing_url}/{doi}`
  pub landing_url:  String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      agency_url:   "https://doi.org/doiRA".to_string(),
      crossref_url: "https://api.crossref.org/works".to_string(),
      datacite_url: "https://api.datacite.org/application/vnd.datacite.datacite+json".to_string(),
      landing_url:  "https://doi.org".to_string(),
    }
  }
}

impl Config {
  /// Default location of the configuration file, `<config dir>/doilink/config.toml`.
  pub fn default_path() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join("doilink").join("config.toml")
  }

  /// Parses a configuration from TOML, filling missing keys with defaults.
  pub fn from_toml_str(toml_str: &str) -> Result<Self> { Ok(toml::from_str(toml_str)?) }

  /// Reads and parses a configuration file.
  pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    debug!("Loading configuration from {}", path.display());
    Self::from_toml_str(&std::fs::read_to_string(path)?)
  }

  /// Loads the configuration a binary should run with.
  ///
  /// An explicit path must exist. Without one, the file at [`Config::default_path`] is used if
  /// present and the built-in defaults otherwise.
  pub fn load(path: Option<&Path>) -> Result<Self> {
    match path {
      Some(path) => Self::from_path(path),
      None => {
        let default_path = Self::default_path();
        if default_path.is_file() {
          Self::from_path(default_path)
        } else {
          debug!("No configuration at {}, using defaults", default_path.display());
          Ok(Self::default())
        }
      },
    }
  }

  /// Points every endpoint at one base URL, keeping the production path layout.
  ///
  /// Mostly useful for mock servers and proxies.
  pub fn with_base_url(base: &str) -> Self {
    let base = base.trim_end_matches('/');
    Self {
      agency_url:   format!("{base}/doiRA"),
      crossref_url: format!("{base}/works"),
      datacite_url: format!("{base}/application/vnd.datacite.datacite+json"),
      landing_url:  base.to_string(),
    }
  }
}

/// Joins an endpoint base and a path tail with exactly one `/`.
pub(crate) fn endpoint(base: &str, tail: &str) -> String {
  format!("{}/{}", base.trim_end_matches('/'), tail)
}
