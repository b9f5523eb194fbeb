// src/config/consts.rs

// Net config
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";
pub const API_BASE_ENV: &str = "API_BASE";
pub const DATA_PATH: &str = "/data";
pub const SCRAPE_PATH: &str = "/scrape";
pub const USER_AGENT: &str = concat!("novedades/", env!("CARGO_PKG_VERSION"));

// Local store
pub const STORE_DIR: &str = ".store";
pub const SETTINGS_FILE: &str = "settings.toml";
pub const LOG_FILE: &str = "debug.log";

// Message area (shown verbatim)
pub const MSG_LOAD_ERROR: &str = "Error obteniendo datos.";
pub const MSG_SCRAPE_RUNNING: &str = "Ejecutando scraping...";
pub const MSG_SCRAPE_STARTED: &str = "Scraping iniciado correctamente.";
pub const MSG_SCRAPE_ERROR: &str = "Error al iniciar scraping.";
pub const MSG_COPIED: &str = "Tabla copiada al portapapeles.";
pub const MSG_NOTHING_TO_COPY: &str = "No hay datos para copiar.";
pub const MSG_SETTINGS_ERROR: &str = "Error guardando la configuración.";

// Table
pub const HEADERS: [&str; 3] = ["Fecha", "Causa", "Link"];
pub const LINK_LABEL: &str = "Ver";
pub const MISSING_HREF: &str = "#";

// Window
pub const WINDOW_TITLE: &str = "Novedades PJN";
pub const WINDOW_W: f32 = 960.0;
pub const WINDOW_H: f32 = 640.0;
