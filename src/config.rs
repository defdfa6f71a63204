use std::env;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{info, warn};

use crate::layout::GridGeometry;
use crate::model::ZoneLabel;
use crate::warehouse::WarehouseLayout;

/// Looks up a configuration variable by name; `None` when unset or blank.
type Lookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// Complete application configuration, loaded from environment variables or default values.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub layout: LayoutConfig,
    pub advisor: AdvisorConfig,
    pub storage: StorageConfig,
}

impl AppConfig {
    /// Creates a configuration from the currently available environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(&env_string)
    }

    fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            api: ApiConfig::from_lookup(lookup),
            layout: LayoutConfig::from_lookup(lookup),
            advisor: AdvisorConfig::from_lookup(lookup),
            storage: StorageConfig::from_lookup(lookup),
        }
    }
}

/// Configuration for the API server.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    bind_ip: IpAddr,
    display_host: String,
    port: u16,
    serve_web_ui: bool,
}

impl ApiConfig {
    const DEFAULT_HOST: &'static str = "0.0.0.0";
    const DEFAULT_PORT: u16 = 8000;
    const HOST_VAR: &'static str = "SLAP_API_HOST";
    const PORT_VAR: &'static str = "SLAP_API_PORT";
    const WEB_UI_VAR: &'static str = "SLAP_WEB_UI";

    fn from_lookup(lookup: Lookup<'_>) -> Self {
        let host_value = lookup(Self::HOST_VAR).unwrap_or_else(|| Self::DEFAULT_HOST.to_string());
        let (bind_ip, effective_host) = match host_value.parse::<IpAddr>() {
            Ok(ip) => (ip, host_value),
            Err(err) => {
                warn!(
                    "Could not parse {} ('{}'): {}. Using {}.",
                    Self::HOST_VAR,
                    host_value,
                    err,
                    Self::DEFAULT_HOST
                );
                (
                    IpAddr::V4(Ipv4Addr::UNSPECIFIED),
                    Self::DEFAULT_HOST.to_string(),
                )
            }
        };

        let port = match lookup(Self::PORT_VAR) {
            Some(raw) => match raw.parse::<u16>() {
                Ok(value) if value != 0 => value,
                Ok(_) => {
                    warn!(
                        "{} must not be 0. Using {}.",
                        Self::PORT_VAR,
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
                Err(err) => {
                    warn!(
                        "Could not parse {} ('{}'): {}. Using {}.",
                        Self::PORT_VAR,
                        raw,
                        err,
                        Self::DEFAULT_PORT
                    );
                    Self::DEFAULT_PORT
                }
            },
            None => Self::DEFAULT_PORT,
        };

        let serve_web_ui = lookup(Self::WEB_UI_VAR)
            .and_then(|raw| parse_bool(&raw, Self::WEB_UI_VAR))
            .unwrap_or(true);

        Self {
            bind_ip,
            display_host: effective_host,
            port,
            serve_web_ui,
        }
    }

    /// Socket address to bind the server to.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_ip, self.port)
    }

    /// Visible hostname for logging and hints.
    pub fn display_host(&self) -> &str {
        &self.display_host
    }

    /// Configured port.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether the embedded browser page is served at `/`.
    pub fn serve_web_ui(&self) -> bool {
        self.serve_web_ui
    }

    /// Indicates whether binding to all interfaces.
    pub fn binds_to_all_interfaces(&self) -> bool {
        match self.bind_ip {
            IpAddr::V4(addr) => addr == Ipv4Addr::UNSPECIFIED,
            IpAddr::V6(addr) => addr == Ipv6Addr::UNSPECIFIED,
        }
    }

    /// Checks whether the hostname matches the default value.
    pub fn uses_default_host(&self) -> bool {
        self.display_host == Self::DEFAULT_HOST
    }
}

/// Warehouse footprint and zone grid used by the layout packer.
#[derive(Clone, Debug, Default)]
pub struct LayoutConfig {
    warehouse: WarehouseLayout,
    geometry: GridGeometry,
}

impl LayoutConfig {
    const ROW_COUNT_VAR: &'static str = "SLAP_LAYOUT_ROW_COUNT";
    const BLOCK_COLS_VAR: &'static str = "SLAP_LAYOUT_BLOCK_COLS";
    const BLOCK_ROWS_VAR: &'static str = "SLAP_LAYOUT_BLOCK_ROWS";
    const ZONE_ORDER_VAR: &'static str = "SLAP_ZONE_ORDER";
    const WIDTH_VAR: &'static str = "SLAP_WAREHOUSE_WIDTH_M";
    const HEIGHT_VAR: &'static str = "SLAP_WAREHOUSE_HEIGHT_M";

    pub fn new(warehouse: WarehouseLayout, geometry: GridGeometry) -> Self {
        Self {
            warehouse,
            geometry,
        }
    }

    fn from_lookup(lookup: Lookup<'_>) -> Self {
        let dimension_ok = |value: usize| (1..=GridGeometry::MAX_DIMENSION).contains(&value);
        let row_count = load_usize_with_warning(
            lookup,
            Self::ROW_COUNT_VAR,
            GridGeometry::DEFAULT_ROW_COUNT,
            dimension_ok,
        );
        let block_cols = load_usize_with_warning(
            lookup,
            Self::BLOCK_COLS_VAR,
            GridGeometry::DEFAULT_BLOCK_COLS,
            dimension_ok,
        );
        let block_rows = load_usize_with_warning(
            lookup,
            Self::BLOCK_ROWS_VAR,
            GridGeometry::DEFAULT_BLOCK_ROWS,
            dimension_ok,
        );
        let geometry = GridGeometry::new(row_count, block_cols, block_rows).unwrap_or_default();

        let width = load_f64_with_warning(
            lookup,
            Self::WIDTH_VAR,
            WarehouseLayout::DEFAULT_WIDTH_M,
            |value| value.is_finite() && value > 0.0,
            "must be greater than 0",
        );
        let height = load_f64_with_warning(
            lookup,
            Self::HEIGHT_VAR,
            WarehouseLayout::DEFAULT_HEIGHT_M,
            |value| value.is_finite() && value > 0.0,
            "must be greater than 0",
        );
        let order = lookup(Self::ZONE_ORDER_VAR)
            .and_then(|raw| parse_zone_order(&raw, Self::ZONE_ORDER_VAR))
            .unwrap_or_else(|| ZoneLabel::ALL.to_vec());

        let warehouse = match WarehouseLayout::with_equal_bands(width, height, &order) {
            Ok(warehouse) => warehouse,
            Err(err) => {
                warn!("{}. Using the default warehouse layout.", err);
                WarehouseLayout::default()
            }
        };

        if geometry != GridGeometry::default() {
            info!(
                "Zone grid adjusted: {} row groups of {}x{} cells ({} per zone)",
                geometry.row_count(),
                geometry.block_cols(),
                geometry.block_rows(),
                geometry.capacity()
            );
        }

        Self {
            warehouse,
            geometry,
        }
    }

    pub fn warehouse(&self) -> &WarehouseLayout {
        &self.warehouse
    }

    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }
}

/// Configuration of the external reassignment advisor.
#[derive(Clone, Debug)]
pub struct AdvisorConfig {
    endpoint: Option<String>,
    timeout: Duration,
}

impl AdvisorConfig {
    const URL_VAR: &'static str = "SLAP_ADVISOR_URL";
    const TIMEOUT_VAR: &'static str = "SLAP_ADVISOR_TIMEOUT_SECS";
    const DEFAULT_TIMEOUT_SECS: f64 = 20.0;

    fn from_lookup(lookup: Lookup<'_>) -> Self {
        let endpoint = lookup(Self::URL_VAR).filter(|url| {
            let valid = url.starts_with("http://") || url.starts_with("https://");
            if !valid {
                warn!(
                    "{} ('{}') must start with http:// or https://. Advisor disabled.",
                    Self::URL_VAR,
                    url
                );
            }
            valid
        });
        let timeout_secs = load_f64_with_warning(
            lookup,
            Self::TIMEOUT_VAR,
            Self::DEFAULT_TIMEOUT_SECS,
            |value| value.is_finite() && value > 0.0 && value <= 600.0,
            "must be between 0 and 600 seconds",
        );

        Self {
            endpoint,
            timeout: Duration::from_secs_f64(timeout_secs),
        }
    }

    /// URL the advisor requests are posted to; `None` disables the advisor.
    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout: Duration::from_secs_f64(Self::DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Where the SKU collection is persisted between restarts.
#[derive(Clone, Debug, Default)]
pub struct StorageConfig {
    data_file: Option<PathBuf>,
}

impl StorageConfig {
    const DATA_FILE_VAR: &'static str = "SLAP_DATA_FILE";

    fn from_lookup(lookup: Lookup<'_>) -> Self {
        Self {
            data_file: lookup(Self::DATA_FILE_VAR).map(PathBuf::from),
        }
    }

    /// Snapshot file path; `None` keeps the collection in memory only.
    pub fn data_file(&self) -> Option<&Path> {
        self.data_file.as_deref()
    }
}

fn env_string(name: &str) -> Option<String> {
    match env::var(name) {
        Ok(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_owned())
            }
        }
        Err(env::VarError::NotPresent) => None,
        Err(err) => {
            warn!("Access to {} failed: {}. Using default value.", name, err);
            None
        }
    }
}

fn parse_bool(raw: &str, var_name: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Some(true),
        "0" | "false" | "no" | "n" | "off" => Some(false),
        other => {
            warn!(
                "Could not interpret {} ('{}') as boolean value. Using default value.",
                var_name, other
            );
            None
        }
    }
}

/// Parses a comma separated zone list such as `A,B,C,D`.
fn parse_zone_order(raw: &str, var_name: &str) -> Option<Vec<ZoneLabel>> {
    let mut order = Vec::new();
    for part in raw.split(',') {
        match part.parse::<ZoneLabel>() {
            Ok(zone) if !order.contains(&zone) => order.push(zone),
            Ok(zone) => {
                warn!(
                    "{} lists zone {} twice. Using the default order.",
                    var_name, zone
                );
                return None;
            }
            Err(err) => {
                warn!("{} ('{}'): {}. Using the default order.", var_name, raw, err);
                return None;
            }
        }
    }
    Some(order)
}

fn load_usize_with_warning(
    lookup: Lookup<'_>,
    var_name: &str,
    default: usize,
    validator: impl Fn(usize) -> bool,
) -> usize {
    match lookup(var_name) {
        Some(raw) => match raw.parse::<usize>() {
            Ok(value) if validator(value) => value,
            Ok(value) => {
                warn!(
                    "{} contains invalid value '{}'. Using {}.",
                    var_name, value, default
                );
                default
            }
            Err(err) => {
                warn!(
                    "Could not parse {} ('{}') as integer: {}. Using {}.",
                    var_name, raw, err, default
                );
                default
            }
        },
        None => default,
    }
}

fn load_f64_with_warning(
    lookup: Lookup<'_>,
    var_name: &str,
    default: f64,
    validator: impl Fn(f64) -> bool,
    invalid_hint: &str,
) -> f64 {
    match lookup(var_name) {
        Some(raw) => match raw.parse::<f64>() {
            Ok(value) if validator(value) => value,
            Ok(_) => {
                warn!(
                    "{} contains invalid value '{}': {}. Using {}.",
                    var_name, raw, invalid_hint, default
                );
                default
            }
            Err(err) => {
                warn!(
                    "Could not parse {} ('{}') as number: {}. Using {}.",
                    var_name, raw, err, default
                );
                default
            }
        },
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(&move |name: &str| vars.get(name).cloned())
    }

    #[test]
    fn test_parse_bool_values() {
        for raw in ["1", "true", "YES", " y ", "On"] {
            assert_eq!(parse_bool(raw, "TEST_VAR"), Some(true), "{raw}");
        }
        for raw in ["0", "false", "No", "n", " OFF "] {
            assert_eq!(parse_bool(raw, "TEST_VAR"), Some(false), "{raw}");
        }
        for raw in ["invalid", "2", "", "  "] {
            assert_eq!(parse_bool(raw, "TEST_VAR"), None, "{raw}");
        }
    }

    #[test]
    fn test_parse_zone_order() {
        assert_eq!(
            parse_zone_order("d, c ,b", "TEST_VAR"),
            Some(vec![ZoneLabel::D, ZoneLabel::C, ZoneLabel::B])
        );
        assert_eq!(parse_zone_order("A,A", "TEST_VAR"), None);
        assert_eq!(parse_zone_order("A,,B", "TEST_VAR"), None);
        assert_eq!(parse_zone_order("A,X", "TEST_VAR"), None);
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.api.port(), 8000);
        assert!(config.api.uses_default_host());
        assert!(config.api.binds_to_all_interfaces());
        assert!(config.api.serve_web_ui());
        assert_eq!(config.layout.geometry().capacity(), 16);
        assert_eq!(config.layout.warehouse(), &WarehouseLayout::default());
        assert_eq!(config.advisor.endpoint(), None);
        assert_eq!(config.advisor.timeout(), Duration::from_secs(20));
        assert_eq!(config.storage.data_file(), None);
    }

    #[test]
    fn reads_valid_variables() {
        let config = config_from(&[
            ("SLAP_API_HOST", "127.0.0.1"),
            ("SLAP_API_PORT", "9000"),
            ("SLAP_WEB_UI", "off"),
            ("SLAP_LAYOUT_ROW_COUNT", "5"),
            ("SLAP_LAYOUT_BLOCK_COLS", "3"),
            ("SLAP_ZONE_ORDER", "B,A"),
            ("SLAP_WAREHOUSE_WIDTH_M", "60"),
            ("SLAP_ADVISOR_URL", "http://localhost:9100/suggest"),
            ("SLAP_ADVISOR_TIMEOUT_SECS", "2.5"),
            ("SLAP_DATA_FILE", "/tmp/skus.json"),
        ]);

        assert_eq!(config.api.socket_addr().to_string(), "127.0.0.1:9000");
        assert!(!config.api.binds_to_all_interfaces());
        assert!(!config.api.serve_web_ui());
        assert_eq!(config.layout.geometry().capacity(), 5 * 3 * 2);
        assert_eq!(
            config.layout.warehouse().zone_order(),
            vec![ZoneLabel::B, ZoneLabel::A]
        );
        assert_eq!(config.layout.warehouse().width_m(), 60.0);
        assert_eq!(
            config.advisor.endpoint(),
            Some("http://localhost:9100/suggest")
        );
        assert_eq!(config.advisor.timeout(), Duration::from_millis(2500));
        assert_eq!(
            config.storage.data_file(),
            Some(Path::new("/tmp/skus.json"))
        );
    }

    #[test]
    fn invalid_variables_fall_back_to_defaults() {
        let config = config_from(&[
            ("SLAP_API_HOST", "not-an-ip"),
            ("SLAP_API_PORT", "0"),
            ("SLAP_LAYOUT_ROW_COUNT", "0"),
            ("SLAP_LAYOUT_BLOCK_ROWS", "many"),
            ("SLAP_ZONE_ORDER", "A,Q"),
            ("SLAP_WAREHOUSE_HEIGHT_M", "-5"),
            ("SLAP_ADVISOR_URL", "ftp://example.org"),
            ("SLAP_ADVISOR_TIMEOUT_SECS", "0"),
        ]);

        assert_eq!(config.api.port(), 8000);
        assert!(config.api.uses_default_host());
        assert_eq!(config.layout.geometry(), &GridGeometry::default());
        assert_eq!(config.layout.warehouse(), &WarehouseLayout::default());
        assert_eq!(config.advisor.endpoint(), None);
        assert_eq!(config.advisor.timeout(), Duration::from_secs(20));
    }
}
