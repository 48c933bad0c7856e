// === Entry point for desktop ===
pub fn main() {
    if let Err(e) = super::run::native_main() {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}
