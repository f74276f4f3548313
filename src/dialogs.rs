use std::io;
use std::path::PathBuf;

use dialoguer::Input;
use tracing::warn;

/// User-facing prompts of the application: the folder picker and the modal
/// success/error messages.
pub trait Dialogs {
    /// `Ok(None)` means the user cancelled. A picker that could not be shown
    /// at all is an error.
    fn pick_directory(&mut self, title: &str) -> io::Result<Option<PathBuf>>;

    fn show_info(&mut self, title: &str, message: &str);

    fn show_error(&mut self, title: &str, message: &str);

    /// Non-blocking notice, e.g. a missing optional resource.
    fn notice(&mut self, message: &str) {
        warn!("{message}");
    }
}

// Terminal
//------------------------------------------------------------------------------

/// Prompts on the terminal. A preset directory skips the folder prompt.
#[derive(Debug, Default)]
pub struct TerminalDialogs {
    directory: Option<PathBuf>,
}

impl TerminalDialogs {
    pub fn new(directory: Option<PathBuf>) -> Self {
        Self { directory }
    }
}

impl Dialogs for TerminalDialogs {
    fn pick_directory(&mut self, title: &str) -> io::Result<Option<PathBuf>> {
        if let Some(dir) = &self.directory {
            return Ok(Some(dir.clone()));
        }

        let input: String = Input::new()
            .with_prompt(format!("{title} (empty to cancel)"))
            .allow_empty(true)
            .interact_text()
            .map_err(|dialoguer::Error::IO(e)| e)?;

        let trimmed = input.trim();
        if trimmed.is_empty() {
            Ok(None)
        } else {
            Ok(Some(PathBuf::from(trimmed)))
        }
    }

    fn show_info(&mut self, title: &str, message: &str) {
        println!("✔ {title}: {message}");
    }

    fn show_error(&mut self, title: &str, message: &str) {
        eprintln!("✘ {title}: {message}");
    }

    fn notice(&mut self, message: &str) {
        eprintln!("{message}");
    }
}

// Native
//------------------------------------------------------------------------------

#[cfg(feature = "native-dialogs")]
pub use native::NativeDialogs;

#[cfg(feature = "native-dialogs")]
mod native {
    use std::io;
    use std::path::PathBuf;

    use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};

    use super::Dialogs;

    /// Platform file picker and message boxes. A preset directory skips the
    /// picker.
    #[derive(Debug, Default)]
    pub struct NativeDialogs {
        directory: Option<PathBuf>,
    }

    impl NativeDialogs {
        pub fn new(directory: Option<PathBuf>) -> Self {
            Self { directory }
        }

        fn message(level: MessageLevel, title: &str, message: &str) {
            MessageDialog::new()
                .set_level(level)
                .set_title(title)
                .set_description(message)
                .set_buttons(MessageButtons::Ok)
                .show();
        }
    }

    impl Dialogs for NativeDialogs {
        fn pick_directory(&mut self, title: &str) -> io::Result<Option<PathBuf>> {
            if let Some(dir) = &self.directory {
                return Ok(Some(dir.clone()));
            }
            Ok(FileDialog::new().set_title(title).pick_folder())
        }

        fn show_info(&mut self, title: &str, message: &str) {
            Self::message(MessageLevel::Info, title, message);
        }

        fn show_error(&mut self, title: &str, message: &str) {
            Self::message(MessageLevel::Error, title, message);
        }
    }
}
