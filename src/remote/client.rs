use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use tracing::{debug, warn};

use super::transport::{
    HttpClientConfig, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport,
};
use crate::config::ServiceConfig;
use crate::error::{Result, SyncError};
use crate::store::TranslationMap;

/// Tolgee namespace every key is stored under.
pub const NAMESPACE: &str = "string";

const API_KEY_HEADER: &str = "X-API-Key";

/// How the server should treat a pushed key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Resolution {
    /// The key does not exist remotely for this language yet.
    New,
    /// Replace the existing remote translation.
    Override,
}

#[derive(Debug, Serialize)]
struct ImportRequest<'a> {
    keys: Vec<ImportKey<'a>>,
}

#[derive(Debug, Serialize)]
struct ImportKey<'a> {
    name: &'a str,
    namespace: &'static str,
    translations: BTreeMap<&'a str, ImportTranslation<'a>>,
}

#[derive(Debug, Serialize)]
struct ImportTranslation<'a> {
    text: &'a str,
    resolution: Resolution,
}

/// Language code -> key -> text. Untranslated keys may come back as `null`.
type RemoteTranslations = HashMap<String, BTreeMap<String, Option<String>>>;

/// Client for the Tolgee translations API.
#[derive(Debug)]
pub struct RemoteClient<T = ReqwestTransport> {
    host: String,
    api_key: String,
    transport: T,
}

impl RemoteClient<ReqwestTransport> {
    /// Validate the service settings and open one shared HTTP client.
    pub fn connect(service: &ServiceConfig) -> Result<Self> {
        service.validate()?;
        let transport = ReqwestTransport::new(&HttpClientConfig::default())?;
        Self::with_transport(service, transport)
    }
}

impl<T: HttpTransport> RemoteClient<T> {
    pub fn with_transport(service: &ServiceConfig, transport: T) -> Result<Self> {
        service.validate()?;
        Ok(Self {
            host: service.host.trim_end_matches('/').to_string(),
            api_key: service.api_key.clone(),
            transport,
        })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn translations_url(&self, languages: &[&str]) -> String {
        format!(
            "{}/v2/projects/translations/{}?ns={}",
            self.host,
            languages.join(","),
            NAMESPACE
        )
    }

    fn import_url(&self) -> String {
        format!("{}/v2/projects/keys/import-resolvable", self.host)
    }

    fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        let request = request.header(API_KEY_HEADER, self.api_key.as_str());
        debug!("{:?} {}", request.method, request.url);
        self.transport.send(&request)
    }

    fn fetch(&self, languages: &[&str]) -> Result<RemoteTranslations> {
        let response = self.send(HttpRequest::get(self.translations_url(languages)))?;
        if !response.is_success() {
            return Err(SyncError::RemoteRequest {
                status: response.status,
                body: response.body,
            });
        }

        match serde_json::from_str::<Option<RemoteTranslations>>(&response.body) {
            Ok(data) => Ok(data.unwrap_or_default()),
            Err(e) => {
                warn!("Ignoring unreadable translations response: {}", e);
                Ok(RemoteTranslations::new())
            }
        }
    }

    /// Fetch the translations of every language in one request.
    ///
    /// The result follows the order of `languages`; a language missing from the
    /// response gets an empty map.
    pub fn fetch_many(&self, languages: &[&str]) -> Result<Vec<(String, TranslationMap)>> {
        let mut remote = self.fetch(languages)?;

        Ok(languages
            .iter()
            .map(|lang| {
                let data = remote.remove(*lang).map(into_map).unwrap_or_default();
                (lang.to_string(), data)
            })
            .collect())
    }

    pub fn fetch_one(&self, language: &str) -> Result<TranslationMap> {
        let mut remote = self.fetch(&[language])?;
        Ok(remote.remove(language).map(into_map).unwrap_or_default())
    }

    /// Upload every non-empty translation of `map` in a single batch.
    ///
    /// Each key is tagged `OVERRIDE` when the server already knows it for this language,
    /// `NEW` otherwise, so the current remote state is fetched first. Returns `false`
    /// when the server rejects the batch.
    pub fn push(&self, language: &str, map: &TranslationMap) -> Result<bool> {
        let remote = self.fetch_one(language)?;

        let keys: Vec<ImportKey<'_>> = map
            .iter()
            .filter(|(_, text)| !text.is_empty())
            .map(|(key, text)| {
                let resolution = if remote.contains_key(key) {
                    Resolution::Override
                } else {
                    Resolution::New
                };
                let translation = ImportTranslation {
                    text: text.as_str(),
                    resolution,
                };
                ImportKey {
                    name: key.as_str(),
                    namespace: NAMESPACE,
                    translations: BTreeMap::from([(language, translation)]),
                }
            })
            .collect();

        if keys.is_empty() {
            debug!("Nothing to upload for {}", language);
            return Ok(true);
        }

        let body = serde_json::to_string(&ImportRequest { keys })?;
        let response = self.send(HttpRequest::post_json(self.import_url(), body))?;
        if response.is_success() {
            return Ok(true);
        }

        warn!("Upload error ({})", response.status);
        warn!("{}", response.body);
        Ok(false)
    }
}

fn into_map(data: BTreeMap<String, Option<String>>) -> TranslationMap {
    data.into_iter()
        .map(|(key, text)| (key, text.unwrap_or_default()))
        .collect()
}
