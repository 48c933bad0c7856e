/// Initialize the tracing subscriber.
///
/// If RUST_LOG is not set, a default is chosen based on the build profile.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    if std::env::var("RUST_LOG").is_err() {
        // Safety: single-threaded at startup
        unsafe {
            if cfg!(debug_assertions) {
                std::env::set_var("RUST_LOG", "debug,eframe::native=warn,egui::context=warn");
            } else {
                std::env::set_var("RUST_LOG", "info,eframe::native=warn,egui::context=warn");
            }
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();
}

#[cfg(feature = "profiling")]
pub struct ProfilingServer {
    server: Option<puffin_http::Server>,
}

#[cfg(feature = "profiling")]
impl ProfilingServer {
    pub fn start() -> Self {
        puffin::set_scopes_on(true); // tell puffin to collect data

        match puffin_http::Server::new("127.0.0.1:8585") {
            Ok(puffin_server) => {
                tracing::info!(
                    "Profiling enabled, to view: cargo install puffin_viewer && ~/.cargo/bin/puffin_viewer --url 127.0.0.1:8585"
                );

                ProfilingServer {
                    server: Some(puffin_server),
                }
            }
            Err(err) => {
                tracing::error!("Failed to start puffin server: {err}");
                ProfilingServer { server: None }
            }
        }
    }

    pub fn stop(&mut self) {
        puffin::set_scopes_on(false);
        // Dropping the server will close it.
        self.server = None;
    }
}

pub fn profiling_ui(ui: &mut egui::Ui) {
    #[cfg(feature = "profiling")]
    {
        use std::cell::RefCell;

        egui::warn_if_debug_build(ui);
        // The UI thread owns the server
        thread_local! {
            static PROFILING_SERVER: RefCell<Option<ProfilingServer>> = const { RefCell::new(None) };
        }
        PROFILING_SERVER.with_borrow_mut(|server| {
            let mut enabled = server.is_some();
            if ui
                .checkbox(&mut enabled, "Enable Profiling Server")
                .changed()
            {
                if enabled {
                    *server = Some(ProfilingServer::start());
                } else if let Some(mut srv) = server.take() {
                    srv.stop();
                }
            }
        });
    }
    #[cfg(not(feature = "profiling"))]
    {
        ui.label("Profiling feature is disabled in this build.");
    }
}
