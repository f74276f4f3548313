use std::path::PathBuf;

use tracing::{debug, warn};

use crate::compose::{CaptionStyle, Composer, LOGO_MAX};
use crate::dialogs::Dialogs;
use crate::encode::QrSettings;
use crate::error::ComposeResult;
use crate::font::LabelFont;
use crate::resource::{self, load_logo, LOGO_FILE};
use crate::save::save_png;

pub const DIRECTORY_TITLE: &str = "Select the folder to save the QR code";

// Config
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogoSource {
    /// `logo.png` next to the program or in the working directory.
    #[default]
    Bundled,
    Path(PathBuf),
    Disabled,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub settings: QrSettings,
    pub caption: CaptionStyle,
    pub logo: LogoSource,
    pub fonts: Vec<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            settings: QrSettings::default(),
            caption: CaptionStyle::default(),
            logo: LogoSource::default(),
            fonts: resource::font_candidates(&resource::search_dirs()),
        }
    }
}

// App
//------------------------------------------------------------------------------

/// Application context: the composer with its startup resources and the
/// dialogs used to talk to the user.
pub struct App<D> {
    composer: Composer,
    dialogs: D,
}

impl<D: Dialogs> App<D> {
    pub fn new(composer: Composer, dialogs: D) -> Self {
        Self { composer, dialogs }
    }

    /// Loads the logo and caption font once. A missing or unreadable logo is
    /// reported as a notice and generation continues without it.
    pub fn load(config: &AppConfig, mut dialogs: D) -> Self {
        let font = LabelFont::load(&config.fonts, config.caption.px);
        let mut composer = Composer::new(config.settings, config.caption, font);

        let logo_path = match &config.logo {
            LogoSource::Bundled => resource::resource_path(LOGO_FILE),
            LogoSource::Path(p) => Some(p.clone()).filter(|p| p.is_file()),
            LogoSource::Disabled => None,
        };

        match logo_path {
            Some(path) => match load_logo(&path, LOGO_MAX) {
                Ok(logo) => composer = composer.with_logo(logo),
                Err(e) => {
                    warn!("Failed to load logo {}: {e}", path.display());
                    dialogs.notice("Could not load the logo.");
                }
            },
            None if config.logo != LogoSource::Disabled => dialogs.notice("Logo not found."),
            None => debug!("Logo disabled"),
        }

        debug!("Composer ready, logo: {}", composer.has_logo());
        Self::new(composer, dialogs)
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub fn dialogs(&self) -> &D {
        &self.dialogs
    }

    /// The generate action: build the image, ask for a folder, save
    /// `<label>.png` there and report the outcome in exactly one dialog.
    pub fn generate_and_save(&mut self, url: &str, label: &str) -> ComposeResult<PathBuf> {
        let res = self.run(url, label);
        match &res {
            Ok(path) => self
                .dialogs
                .show_info("Success", &format!("QR code generated and saved as {}", path.display())),
            Err(e) if e.is_validation() => self.dialogs.show_error("Invalid input", &e.to_string()),
            Err(e) => self.dialogs.show_error("Error", &e.to_string()),
        }
        res
    }

    fn run(&mut self, url: &str, label: &str) -> ComposeResult<PathBuf> {
        let img = self.composer.generate(url, label)?;
        let dir = self.dialogs.pick_directory(DIRECTORY_TITLE)?;
        save_png(&img, dir.as_deref(), label)
    }
}

#[cfg(test)]
mod app_tests {
    use std::io;
    use std::path::PathBuf;

    use super::{App, AppConfig, LogoSource};
    use crate::dialogs::Dialogs;
    use crate::error::ComposeError;

    #[derive(Default)]
    struct Recorder {
        directory: Option<PathBuf>,
        broken_prompt: bool,
        notices: Vec<String>,
        errors: Vec<(String, String)>,
    }

    impl Dialogs for Recorder {
        fn pick_directory(&mut self, _title: &str) -> io::Result<Option<PathBuf>> {
            if self.broken_prompt {
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed"));
            }
            Ok(self.directory.clone())
        }

        fn show_info(&mut self, _title: &str, _message: &str) {}

        fn show_error(&mut self, title: &str, message: &str) {
            self.errors.push((title.to_string(), message.to_string()));
        }

        fn notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
    }

    fn config(logo: LogoSource) -> AppConfig {
        AppConfig { logo, fonts: vec![], ..AppConfig::default() }
    }

    #[test]
    fn test_missing_logo_notice() {
        let missing = PathBuf::from("/nonexistent/logo.png");
        let app = App::load(&config(LogoSource::Path(missing)), Recorder::default());
        assert!(!app.composer().has_logo());
        assert_eq!(app.dialogs().notices, ["Logo not found."]);
    }

    #[test]
    fn test_unreadable_logo_notice() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        std::fs::write(&path, b"garbage").unwrap();
        let app = App::load(&config(LogoSource::Path(path)), Recorder::default());
        assert!(!app.composer().has_logo());
        assert_eq!(app.dialogs().notices, ["Could not load the logo."]);
    }

    #[test]
    fn test_disabled_logo_is_silent() {
        let app = App::load(&config(LogoSource::Disabled), Recorder::default());
        assert!(!app.composer().has_logo());
        assert!(app.dialogs().notices.is_empty());
    }

    #[test]
    fn test_logo_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");
        image::RgbaImage::new(300, 300).save(&path).unwrap();
        let app = App::load(&config(LogoSource::Path(path)), Recorder::default());
        assert!(app.composer().has_logo());
        assert!(app.dialogs().notices.is_empty());
    }

    #[test]
    fn test_prompt_failure_is_not_a_cancel() {
        let dir = tempfile::tempdir().unwrap();
        let dialogs = Recorder { directory: Some(dir.path().to_path_buf()), broken_prompt: true, ..Recorder::default() };
        let mut app = App::load(&config(LogoSource::Disabled), dialogs);

        let res = app.generate_and_save("https://example.com", "MyQR");
        assert!(matches!(res, Err(ComposeError::Io(ref e)) if e.kind() == io::ErrorKind::UnexpectedEof));
        assert_eq!(app.dialogs().errors, [("Error".to_string(), "stdin closed".to_string())]);
        assert!(!dir.path().join("MyQR.png").exists());
    }

    #[test]
    fn test_cancelled_prompt_is_no_directory() {
        let mut app = App::load(&config(LogoSource::Disabled), Recorder::default());
        let res = app.generate_and_save("https://example.com", "MyQR");
        assert!(matches!(res, Err(ComposeError::NoDirectory)));
        assert_eq!(app.dialogs().errors.len(), 1);
        assert_eq!(app.dialogs().errors[0].0, "Error");
    }

    #[test]
    fn test_validation_error_title() {
        let mut app = App::load(&config(LogoSource::Disabled), Recorder::default());
        let res = app.generate_and_save("notaurl", "MyQR");
        assert!(matches!(res, Err(ComposeError::InvalidUrl)));
        assert_eq!(app.dialogs().errors.len(), 1);
        assert_eq!(app.dialogs().errors[0].0, "Invalid input");
    }
}
