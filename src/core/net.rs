// src/core/net.rs

// Blocking HTTP GET for stat pages. One request at a time, no retries.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{COOKIE, HeaderMap, HeaderValue};

use crate::config::consts::{STATS_PATH, USER_AGENT};
use crate::config::options::ScrapeOptions;
use crate::error::{Error, Result};
use crate::model::PageId;

/// Anything that can hand back the raw HTML of a stat page.
pub trait PageSource {
    fn fetch(&mut self, id: &PageId) -> Result<String>;
}

/// `{base}activestats?leagueId=..&teamId=..&seasonId=..&filter=..`
pub fn stats_url(base: &str, id: &PageId) -> String {
    let mut url = s!(base);
    if !url.ends_with('/') {
        url.push('/');
    }
    url.push_str(STATS_PATH);
    url.push_str(&format!(
        "?leagueId={}&teamId={}&seasonId={}&filter={}",
        id.league,
        id.fantasy_team,
        id.season,
        id.kind.filter()
    ));
    url
}

pub struct HttpSource {
    client: Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(opts: &ScrapeOptions) -> Result<Self> {
        let mut headers = HeaderMap::new();
        if let Some(cookie) = opts.cookie.as_deref() {
            let value = HeaderValue::from_str(cookie)
                .map_err(|e| Error::Options(format!("cookie is not a valid header value: {e}")))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(opts.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|source| Error::Fetch { url: opts.base_url.clone(), source })?;

        Ok(Self { client, base_url: opts.base_url.clone() })
    }
}

impl PageSource for HttpSource {
    fn fetch(&mut self, id: &PageId) -> Result<String> {
        let url = stats_url(&self.base_url, id);
        logd!("GET {url}");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|source| Error::Fetch { url: url.clone(), source })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status { url, status: status.as_u16() });
        }
        resp.text().map_err(|source| Error::Fetch { url, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StatKind;

    #[test]
    fn stats_url_matches_site_layout() {
        let id = PageId { league: 4779, season: 2009, fantasy_team: 7, kind: StatKind::Pitching };
        assert_eq!(
            stats_url("http://games.espn.com/flb/", &id),
            "http://games.espn.com/flb/activestats?leagueId=4779&teamId=7&seasonId=2009&filter=2"
        );
        // missing trailing slash is tolerated
        assert_eq!(
            stats_url("http://localhost:8080", &id),
            "http://localhost:8080/activestats?leagueId=4779&teamId=7&seasonId=2009&filter=2"
        );
    }
}
