use lazy_static::lazy_static;

pub const INSTALLER_PROGRAM: &str = "playwright";
pub const INSTALLER_ARGS: &[&str] = &["install", "chrome"];

// Printed when a crawl completes but yields no usable markdown.
pub const EMPTY_RESULT_SENTINEL: &str = "sad";

// One-time initialization run: render a blank page headless to prove the
// binary can actually launch on this machine.
pub const INIT_RUN_ARGS: &[&str] = &["--headless=new", "--disable-gpu", "--dump-dom", "about:blank"];

lazy_static! {
    pub static ref BROWSER_CANDIDATES: Vec<String> = {
        let mut candidates = vec![
            String::from("chrome"),
            String::from("google-chrome"),
            String::from("google-chrome-stable"),
            String::from("chromium"),
            String::from("chromium-browser"),
            String::from("/Applications/Google Chrome.app/Contents/MacOS/Google Chrome"),
            String::from("/Applications/Chromium.app/Contents/MacOS/Chromium"),
        ];

        // Per-user macOS installs live under the home directory.
        if let Some(home) = dirs::home_dir() {
            candidates.push(
                home.join("Applications/Google Chrome.app/Contents/MacOS/Google Chrome")
                    .to_string_lossy()
                    .to_string(),
            );
        }

        candidates
    };
}
