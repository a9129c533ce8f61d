use crate::*;
use regex::Regex;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ValidationError {
    #[error("Service name is required")]
    MissingServiceName,

    #[error("Service description is required")]
    MissingServiceDescription,

    #[error("Invalid version format: {0}. Must be in format X.Y.Z (e.g., 1.0.0)")]
    InvalidVersionFormat(String),

    #[error("Catalog instrument {symbol}: {message}")]
    InvalidInstrument { symbol: String, message: String },

    #[error("default_base_price must be a positive number, got {0}")]
    InvalidDefaultBasePrice(f64),

    #[error("HTTP port cannot be 0 (ephemeral port assignment not supported)")]
    InvalidHttpPort,

    #[error("Metrics port cannot be 0")]
    InvalidMetricsPort,
}

#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct DefaultApplied {
    pub field: String,
    pub value: String,
}

#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
    pub defaults_applied: Vec<DefaultApplied>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
            defaults_applied: Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, field: &str, message: &str) {
        self.warnings.push(ValidationWarning {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn add_default(&mut self, field: &str, value: &str) {
        self.defaults_applied.push(DefaultApplied {
            field: field.to_string(),
            value: value.to_string(),
        });
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_config(config: &ProducerConfig) -> ValidationReport {
    let mut report = ValidationReport::new();

    validate_service(&config.service, &mut report);
    validate_catalog(&config.catalog, &mut report);
    validate_server(&config.server, &mut report);

    report
}

fn validate_service(service: &ServiceConfig, report: &mut ValidationReport) {
    if service.name.is_empty() {
        report.add_error(ValidationError::MissingServiceName);
    }

    if service.description.is_empty() {
        report.add_error(ValidationError::MissingServiceDescription);
    }

    match Regex::new(r"^\d+\.\d+\.\d+$") {
        Ok(version_regex) => {
            if !version_regex.is_match(&service.version) {
                report.add_error(ValidationError::InvalidVersionFormat(
                    service.version.clone(),
                ));
            }
        }
        Err(_) => report.add_warning("service.version", "version format not checked"),
    }
}

fn validate_catalog(catalog: &CatalogConfig, report: &mut ValidationReport) {
    if !catalog.default_base_price.is_finite() || catalog.default_base_price <= 0.0 {
        report.add_error(ValidationError::InvalidDefaultBasePrice(
            catalog.default_base_price,
        ));
    }

    if catalog.instruments.is_empty() {
        // Not an error: the catalog falls back to the built-in feed set.
        report.add_default("catalog.instruments", "built-in feed set (6 instruments)");
    }

    let mut seen = HashSet::new();
    for entry in &catalog.instruments {
        let normalized = entry.symbol.trim().to_uppercase();

        if normalized.is_empty() {
            report.add_error(ValidationError::InvalidInstrument {
                symbol: entry.symbol.clone(),
                message: "symbol must not be empty".to_string(),
            });
            continue;
        }

        if entry.symbol != normalized {
            report.add_warning(
                "catalog.instruments",
                &format!(
                    "symbol '{}' will be normalized to '{}'",
                    entry.symbol, normalized
                ),
            );
        }

        if !entry.base_price.is_finite() || entry.base_price <= 0.0 {
            report.add_error(ValidationError::InvalidInstrument {
                symbol: normalized.clone(),
                message: format!("base_price must be positive, got {}", entry.base_price),
            });
        }

        if !seen.insert(normalized.clone()) {
            report.add_warning(
                "catalog.instruments",
                &format!("duplicate symbol '{}', first entry wins", normalized),
            );
        }
    }
}

fn validate_server(server: &HttpConfig, report: &mut ValidationReport) {
    if server.http_port == 0 {
        report.add_error(ValidationError::InvalidHttpPort);
    } else if server.http_port < 1024 {
        report.add_warning(
            "server.http_port",
            "privileged port (requires root/admin privileges)",
        );
    }

    match server.metrics_port {
        Some(0) => report.add_error(ValidationError::InvalidMetricsPort),
        Some(port) if port == server.http_port => {
            report.add_warning(
                "server.metrics_port",
                "metrics port equals HTTP port, exporter will fail to bind",
            );
        }
        _ => {}
    }
}
