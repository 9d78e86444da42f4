// SPDX-License-Identifier: MPL-2.0
use crate::app::config::Config;
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use unic_langid::LanguageIdentifier;

pub const DEFAULT_LOCALE: &str = "en-US";

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    /// Builds bundles from the embedded `.ftl` files, then from `i18n_dir`
    /// if given. Files in `i18n_dir` replace embedded ones for the same locale.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<&Path>, config: &Config) -> Self {
        let mut sources: HashMap<LanguageIdentifier, String> = HashMap::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = locale_from_filename(filename) else {
                continue;
            };
            if let Some(content) = Asset::get(filename) {
                sources.insert(locale, String::from_utf8_lossy(content.data.as_ref()).into_owned());
            }
        }

        if let Some(dir) = i18n_dir {
            load_directory(dir, &mut sources);
        }

        let mut bundles = HashMap::new();
        for (locale, source) in sources {
            bundles.insert(locale.clone(), build_bundle(locale, source));
        }

        let mut available_locales: Vec<_> = bundles.keys().cloned().collect();
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales).unwrap_or_else(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, *value);
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs<'_>>) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, args, &mut errors);
                if errors.is_empty() {
                    return value.into_owned();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn default_locale() -> LanguageIdentifier {
    DEFAULT_LOCALE.parse().unwrap_or_default()
}

fn locale_from_filename(filename: &str) -> Option<LanguageIdentifier> {
    filename.strip_suffix(".ftl")?.parse().ok()
}

fn load_directory(dir: &Path, sources: &mut HashMap<LanguageIdentifier, String>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            tracing::warn!(dir = %dir.display(), %err, "cannot read i18n directory");
            return;
        }
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        let Some(locale) = path.file_name().and_then(|n| n.to_str()).and_then(locale_from_filename) else {
            continue;
        };
        match fs::read_to_string(&path) {
            Ok(content) => {
                sources.insert(locale, content);
            }
            Err(err) => tracing::warn!(path = %path.display(), %err, "cannot read translation file"),
        }
    }
}

fn build_bundle(locale: LanguageIdentifier, source: String) -> FluentBundle<FluentResource> {
    let resource = FluentResource::try_new(source).unwrap_or_else(|(partial, errors)| {
        tracing::warn!(%locale, count = errors.len(), "translation file has syntax errors");
        partial
    });
    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // No Unicode isolation marks around placeables ("Text 2", not "Text \u{2068}2\u{2069}").
    bundle.set_use_isolating(false);
    if let Err(errors) = bundle.add_resource(resource) {
        tracing::warn!(%locale, count = errors.len(), "duplicate translation keys");
    }
    bundle
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = [
        cli_lang,
        config.general.language.clone(),
        sys_locale::get_locale(),
    ];
    candidates
        .into_iter()
        .flatten()
        .filter_map(|lang| lang.parse::<LanguageIdentifier>().ok())
        .find_map(|lang| match_available(&lang, available))
}

/// Exact match first, then the same language with any region ("ja-JP" -> "ja").
fn match_available(lang: &LanguageIdentifier, available: &[LanguageIdentifier]) -> Option<LanguageIdentifier> {
    if available.contains(lang) {
        return Some(lang.clone());
    }
    available.iter().find(|candidate| candidate.language == lang.language).cloned()
}
