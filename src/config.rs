use std::path::{Path, PathBuf};

use directories::UserDirs;

use crate::error::FirelinkError;

// Keys recognised in the config file and the environment.  The config
// library stores keys lowercased, so `webApiKey` in a YAML file and a
// `WEBAPIKEY` environment variable both land on the same entry.
const KEY_API_KEY: &str = "webapikey";
const KEY_DOMAIN_PREFIX: &str = "domainuriprefix";

/// Settings required to talk to the link service.  Built once at startup
/// and passed down the pipeline; nothing mutates it afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub web_api_key: String,
    pub domain_uri_prefix: String,
}

impl Config {
    // Resolve settings from, in increasing precedence: a config file
    // (explicit path, else `~/.firelink.*`), environment variables, and
    // explicit flag values.
    //
    // A missing or unreadable config file is fatal only when the required
    // keys are not supplied by any other source.
    pub fn load(
        file: Option<&Path>,
        key: Option<String>,
        prefix: Option<String>,
    ) -> Result<Self, FirelinkError> {
        use config::{Config, Environment, File};

        let source = match file {
            Some(path) => File::from(path),
            None => File::from(default_path()?),
        };

        let builder = Config::builder()
            .add_source(source.required(false))
            .add_source(Environment::default());

        let (settings, read_err) = match builder.build() {
            Ok(settings) => (Some(settings), None),
            Err(e) => (None, Some(e)),
        };

        let lookup = |name: &str| {
            settings
                .as_ref()
                .and_then(|s| s.get_string(name).ok())
                .filter(|v| !v.is_empty())
        };

        let web_api_key = key
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(KEY_API_KEY));
        let domain_uri_prefix = prefix
            .filter(|v| !v.is_empty())
            .or_else(|| lookup(KEY_DOMAIN_PREFIX));

        match (web_api_key, domain_uri_prefix) {
            (Some(web_api_key), Some(domain_uri_prefix)) => Ok(Self {
                web_api_key,
                domain_uri_prefix,
            }),
            _ => Err(FirelinkError::Config(match read_err {
                Some(e) => e.to_string(),
                None => String::from(
                    "webApiKey and domainUriPrefix must be set via a config file, \
                     environment variables, or flags",
                ),
            })),
        }
    }
}

// Default config location: `.firelink` in the home directory, with any
// extension the config library understands.
fn default_path() -> Result<PathBuf, FirelinkError> {
    let dirs = UserDirs::new()
        .ok_or_else(|| FirelinkError::Config("cannot locate home directory".to_string()))?;
    Ok(dirs.home_dir().join(".firelink"))
}
