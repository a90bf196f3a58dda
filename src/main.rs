use anyhow::Context;

/// Defaults compiled into the binary for platforms without a `.env` file.
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_env() -> anyhow::Result<&'static str> {
    if dotenvy::dotenv().is_ok() {
        return Ok(".env");
    }
    apply_bundled_config()?;
    Ok("bundled")
}

#[cfg(target_arch = "wasm32")]
fn load_env() -> anyhow::Result<&'static str> {
    apply_bundled_config()?;
    Ok("bundled")
}

fn apply_bundled_config() -> anyhow::Result<()> {
    for item in dotenvy::from_read_iter(BUNDLED_CONFIG.as_bytes()) {
        let (key, value) = item.context("malformed line in bundled config.env")?;
        // Variables already in the environment win.
        if std::env::var_os(&key).is_none() {
            // SAFETY: runs at startup before any other thread exists
            unsafe {
                std::env::set_var(&key, value);
            }
        }
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt::init();
    match load_env() {
        Ok(source) => tracing::debug!(source, "configuration loaded"),
        Err(err) => tracing::warn!(error = %err, "could not load configuration defaults"),
    }
    dioxus::launch(sentinel::ui::App);
}
