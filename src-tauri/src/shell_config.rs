use std::{env, path::PathBuf};

use tauri::WebviewUrl;
use url::Url;

use crate::{
    DEV_SERVER_URL_ENV, MAIN_WINDOW_HEIGHT, MAIN_WINDOW_TITLE, MAIN_WINDOW_WIDTH,
    OPEN_DEVTOOLS_ENV, PACKAGED_ENTRY_PATH, START_URL_ENV,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ContentSource {
    DevServer(Url),
    Packaged(PathBuf),
}

impl ContentSource {
    pub(crate) fn webview_url(&self) -> WebviewUrl {
        match self {
            ContentSource::DevServer(url) => WebviewUrl::External(url.clone()),
            ContentSource::Packaged(path) => WebviewUrl::App(path.clone()),
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self {
            ContentSource::DevServer(url) => format!("dev server {url}"),
            ContentSource::Packaged(path) => format!("packaged entry {}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShellConfig {
    pub(crate) title: String,
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) content_source: ContentSource,
    pub(crate) open_devtools: bool,
}

impl ShellConfig {
    pub(crate) fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let dev_server_url = [DEV_SERVER_URL_ENV, START_URL_ENV]
            .into_iter()
            .find_map(|key| lookup(key).and_then(|raw| parse_dev_server_url(key, &raw)));

        let (content_source, open_devtools) = match dev_server_url {
            Some(url) => (
                ContentSource::DevServer(url),
                lookup(OPEN_DEVTOOLS_ENV)
                    .map(|raw| parse_flag(&raw))
                    .unwrap_or(true),
            ),
            None => (
                ContentSource::Packaged(PathBuf::from(PACKAGED_ENTRY_PATH)),
                false,
            ),
        };

        Self {
            title: MAIN_WINDOW_TITLE.to_string(),
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            content_source,
            open_devtools,
        }
    }
}

fn parse_dev_server_url(key: &str, raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => Some(url),
        Ok(url) => {
            log::warn!(
                target: crate::LOG_TARGET_STARTUP,
                "ignoring {key}: unsupported scheme '{}'",
                url.scheme()
            );
            None
        }
        Err(error) => {
            log::warn!(target: crate::LOG_TARGET_STARTUP, "ignoring {key}={trimmed:?}: {error}");
            None
        }
    }
}

fn parse_flag(raw: &str) -> bool {
    !matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from(pairs: &'static [(&'static str, &'static str)]) -> impl Fn(&str) -> Option<String> {
        move |key| {
            pairs
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn dev_server_url_selects_dev_server_with_devtools() {
        let config = ShellConfig::from_lookup(lookup_from(&[(
            "DESKTOP_DEV_SERVER_URL",
            "http://localhost:5173",
        )]));

        assert_eq!(
            config.content_source,
            ContentSource::DevServer(Url::parse("http://localhost:5173").unwrap())
        );
        assert!(config.open_devtools);
        assert!(matches!(
            config.content_source.webview_url(),
            WebviewUrl::External(url) if url.as_str() == "http://localhost:5173/"
        ));
    }

    #[test]
    fn missing_dev_server_url_selects_packaged_entry() {
        let config = ShellConfig::from_lookup(lookup_from(&[]));

        assert_eq!(
            config.content_source,
            ContentSource::Packaged(PathBuf::from("index.html"))
        );
        assert!(!config.open_devtools);
        assert_eq!(config.width, 1100.0);
        assert_eq!(config.height, 750.0);
    }

    #[test]
    fn start_url_is_used_when_dev_server_url_is_absent() {
        let config = ShellConfig::from_lookup(lookup_from(&[(
            "DESKTOP_START_URL",
            "http://localhost:2999",
        )]));

        assert_eq!(
            config.content_source,
            ContentSource::DevServer(Url::parse("http://localhost:2999").unwrap())
        );
    }

    #[test]
    fn dev_server_url_wins_over_start_url() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("DESKTOP_START_URL", "http://localhost:2999"),
            ("DESKTOP_DEV_SERVER_URL", "http://localhost:5173"),
        ]));

        assert_eq!(
            config.content_source,
            ContentSource::DevServer(Url::parse("http://localhost:5173").unwrap())
        );
    }

    #[test]
    fn devtools_can_be_disabled_in_dev_server_mode() {
        let config = ShellConfig::from_lookup(lookup_from(&[
            ("DESKTOP_DEV_SERVER_URL", "http://localhost:5173"),
            ("DESKTOP_OPEN_DEVTOOLS", "off"),
        ]));

        assert!(!config.open_devtools);
    }

    #[test]
    fn unusable_dev_server_url_falls_back_to_packaged_entry() {
        for raw in ["", "not a url", "file:///tmp/index.html"] {
            let config = ShellConfig::from_lookup(move |key| {
                (key == "DESKTOP_DEV_SERVER_URL").then(|| raw.to_string())
            });
            assert!(matches!(config.content_source, ContentSource::Packaged(_)));
        }
    }
}
