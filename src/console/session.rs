//! The console's page-level workflow.
//!
//! A session owns the options form, the saved preferences and the notice
//! board, and drives the editor, cookie store, HTTP client and sandbox
//! through their traits. Nothing here touches a real browser.

use anyhow::Result;
use colored::Colorize;

use super::collaborators::{CodeEditor, CookieOptions, CookieStore, HttpClient, Sandbox};
use super::example::{ExampleSource, rows_to_text, yql_query_url};
use super::location::{
    Location, build_hash, example_from_hash, inline_code_example, preferences_from_hash,
};
use super::notice::{NoticeBoard, NoticeId};
use super::preferences::{OptionsForm, PREFERENCES_COOKIE, Preferences};
use super::shortener::{request_url, short_url_from_response};
use crate::config::{CUSTOM_FRAMEWORK, Config};
use crate::issues::Rule;
use crate::options::{Resolution, ResolutionContext, resolve};

/// Placeholder shown in the editor while an example is fetched.
pub const LOADING_PLACEHOLDER: &str = "loading example...";

const BAD_COOKIE_MESSAGE: &str = "could not load options from cookies";
const MALFORMED_URL_MESSAGE: &str = "the URL is malformed. Could not retrieve preferences.";

/// What a run handed to the sandbox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub framework_url: String,
    /// `api_key: <key>` followed by the resolved options.
    pub params: String,
    /// The share link written to the location.
    pub href: String,
    /// Whether the sandbox accepted and ran the code.
    pub ran: bool,
    pub resolution: Resolution,
}

pub struct ConsoleSession {
    config: Config,
    verbose: bool,
    form: OptionsForm,
    saved: Preferences,
    /// Code as loaded from the last example, to detect edits.
    original_code: String,
    /// Last link sent to the shortener.
    last_url: String,
    /// Short link currently on display.
    short_url: Option<String>,
    location: Location,
    notices: NoticeBoard,
}

impl ConsoleSession {
    /// Restore preferences from the cookie, then from the location hash.
    pub fn start(
        config: Config,
        cookies: &dyn CookieStore,
        location: Location,
        verbose: bool,
    ) -> Self {
        let mut notices = NoticeBoard::new(verbose);
        let mut saved = Preferences::default();

        if let Some(cookie) = cookies.read(PREFERENCES_COOKIE).filter(|c| !c.is_empty()) {
            match Preferences::from_json(&cookie) {
                Ok(preferences) => saved = preferences,
                Err(_) => notices.error(NoticeId::BadCookie, BAD_COOKIE_MESSAGE),
            }
        }

        match preferences_from_hash(&location.hash) {
            Some(Ok(preferences)) => saved.extend(preferences),
            Some(Err(_)) => notices.error(NoticeId::MalformedUrl, MALFORMED_URL_MESSAGE),
            None => {}
        }

        let mut form = OptionsForm::new(config.default_framework_url());
        form.restore(&saved);

        Self {
            config,
            verbose,
            form,
            saved,
            original_code: String::new(),
            last_url: String::new(),
            short_url: None,
            location,
            notices,
        }
    }

    pub fn form(&self) -> &OptionsForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut OptionsForm {
        &mut self.form
    }

    pub fn saved(&self) -> &Preferences {
        &self.saved
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn short_url(&self) -> Option<&str> {
        self.short_url.as_deref()
    }

    pub fn framework_is_custom(&self) -> bool {
        self.form.framework == CUSTOM_FRAMEWORK
    }

    /// Example reference currently in the location hash.
    pub fn example_from_hash(&self) -> &str {
        example_from_hash(&self.location.hash)
    }

    /// Framework the sandbox should load.
    ///
    /// A custom selection without a URL falls back to the first framework.
    pub fn framework_url(&self) -> String {
        if !self.framework_is_custom() {
            return self.form.framework.clone();
        }
        if self.form.framework_url.is_empty() {
            self.config.default_framework_url().to_string()
        } else {
            self.form.framework_url.clone()
        }
    }

    /// Resolve the form's options against the code in `editor` and write the
    /// result back into the form.
    pub fn resolve_options(&mut self, editor: &dyn CodeEditor, strict_on_load: bool) -> Resolution {
        let ctx = ResolutionContext::new(editor.get_code())
            .with_custom_framework(self.framework_is_custom())
            .with_enforced_defaults(self.config.enforced_defaults.clone());

        let resolution = resolve(
            &self.form.api_options,
            self.saved.extension(),
            &ctx,
            strict_on_load,
        );

        for diagnostic in &resolution.diagnostics {
            if self.verbose {
                eprintln!(
                    "{} dropping parameter: ({}: {})",
                    "note:".bold(),
                    diagnostic.key(),
                    diagnostic.value()
                );
            }
            if diagnostic.kind() == Rule::UnusedOnLoad {
                self.notices.warning(
                    NoticeId::BadOnLoad,
                    format!(
                        "an unused onLoad event '{}' was removed from the parameters",
                        diagnostic.value()
                    ),
                );
            }
        }

        self.form.api_options = resolution.text.clone();
        resolution
    }

    /// Load the example named by `load_data` (`<example>[&<preferences>]`).
    ///
    /// Returns the options resolution performed after the code arrived, or
    /// `None` when nothing was loaded.
    pub fn load_example(
        &mut self,
        load_data: &str,
        editor: &mut dyn CodeEditor,
        http: &dyn HttpClient,
    ) -> Option<Resolution> {
        if matches!(load_data, "" | "#" | "undefined") {
            return None;
        }

        self.saved.extendapioptions = None;
        match preferences_from_hash(load_data) {
            Some(Ok(preferences)) => {
                if let Some(extension) = preferences.extension() {
                    self.saved.extendapioptions = Some(extension.to_string());
                }
                self.form.restore(&preferences);
            }
            Some(Err(_)) => self
                .notices
                .error(NoticeId::MalformedUrl, MALFORMED_URL_MESSAGE),
            None => {}
        }

        let source = ExampleSource::classify(example_from_hash(load_data))?;

        editor.set_code(LOADING_PLACEHOLDER);
        self.notices.remove(NoticeId::LoadFailed);
        self.notices.remove(NoticeId::BadOnLoad);

        match source {
            ExampleSource::Inline { code } => {
                editor.set_code(&code);
            }
            ExampleSource::Remote { url } => {
                let query = yql_query_url(&self.config.yql_endpoint, &url);
                let code = http
                    .get_json(&query)
                    .ok()
                    .and_then(|response| rows_to_text(&response));
                let Some(code) = code else {
                    self.notices.error(
                        NoticeId::LoadFailed,
                        format!("failed to load example: {}", query),
                    );
                    return None;
                };
                editor.set_code(&code);
                self.original_code = code;
            }
            ExampleSource::Local { path } => match http.get_text(&path) {
                Ok(code) => {
                    editor.set_code(&code);
                    self.original_code = code;
                }
                Err(failure) => {
                    let message = format!("failed to load example: {}\n{}", path, failure);
                    self.notices.error(NoticeId::LoadFailed, message.as_str());
                    editor.set_code(&message);
                    return None;
                }
            },
        }

        Some(self.resolve_options(editor, true))
    }

    /// Remove the sandbox frame and all notices.
    ///
    /// `hide_short_url` also takes down the short link on display.
    pub fn clean_up(&mut self, sandbox: &mut dyn Sandbox, hide_short_url: bool) {
        sandbox.clear();
        if hide_short_url {
            self.short_url = None;
        }
        self.notices.clear();
    }

    /// Run the code in `editor`.
    ///
    /// Options are resolved leniently, preferences are saved to the cookie and
    /// the location, a new short link is requested when the link changed, and
    /// the code is handed to the sandbox. Sandbox failures become notices.
    pub fn execute(
        &mut self,
        editor: &dyn CodeEditor,
        http: &dyn HttpClient,
        cookies: &mut dyn CookieStore,
        sandbox: &mut dyn Sandbox,
    ) -> Result<RunReport> {
        let resolution = self.resolve_options(editor, false);

        let preferences = self.form.to_preferences();
        let api_key = if self.framework_is_custom() {
            self.form.api_key.clone()
        } else {
            self.config.connect_api_key.clone()
        };
        let params = format!("api_key: {}\n{}", api_key, self.form.api_options);
        let run_code = editor.get_code();

        cookies.write(
            PREFERENCES_COOKIE,
            &preferences.to_json()?,
            &CookieOptions::default(),
        );

        let example = if run_code != self.original_code {
            inline_code_example(&run_code)
        } else {
            self.example_from_hash().to_string()
        };
        self.location.set_hash(&build_hash(&example, &preferences)?);
        let href = self.location.href();

        let shorten = href != self.last_url;
        self.clean_up(sandbox, shorten);
        if shorten {
            self.short_url = self.shorten(&href, http);
        }

        let framework_url = self.framework_url();
        let ran = match sandbox.load() {
            Err(e) => {
                self.notices.error(
                    NoticeId::InjectFailed,
                    format!("Failed to inject Framework\n{}", e),
                );
                false
            }
            Ok(()) => match sandbox.run(&run_code, &framework_url, &params) {
                Ok(()) => true,
                Err(e) => {
                    self.notices.error(
                        NoticeId::SandboxFailed,
                        format!("Failed to execute code via Sandbox\n{}", e),
                    );
                    false
                }
            },
        };

        Ok(RunReport {
            framework_url,
            params,
            href,
            ran,
            resolution,
        })
    }

    fn shorten(&mut self, long_url: &str, http: &dyn HttpClient) -> Option<String> {
        self.last_url = long_url.to_string();

        match request_url(&self.config.shortener, long_url) {
            Ok(url) => http
                .get_json(&url)
                .ok()
                .and_then(|response| short_url_from_response(&response)),
            Err(too_long) => {
                self.notices
                    .warning(NoticeId::UrlTooLong, too_long.to_string());
                None
            }
        }
    }
}
