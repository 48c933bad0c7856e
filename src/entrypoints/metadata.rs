/// Log the name and version of this build
pub fn log_version_info() {
    tracing::info!("{}", short_version_info());
    tracing::info!(
        "Build profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );
}

pub fn short_version_info() -> String {
    format!(
        "{} {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_version_info() {
        let info = short_version_info();
        assert!(info.starts_with("running-path-viewer "));
        assert!(info.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
