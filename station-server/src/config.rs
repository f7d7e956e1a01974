//! Process configuration, read once at startup.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::domain::{InvalidStationId, StationId};
use crate::schedule::ScheduleConfig;

/// Stations served when `STATIONS` is not set.
const DEFAULT_STATIONS: &str = "ICAN,GATN,PASS";

/// Port used when `STATION_PORT` is not set.
const DEFAULT_PORT: u16 = 5000;

/// Errors in the process configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable could not be parsed
    #[error("invalid {var}: {message}")]
    Invalid { var: &'static str, message: String },

    /// A configured station identifier is malformed
    #[error("invalid station {id:?} in STATIONS: {source}")]
    Station {
        id: String,
        source: InvalidStationId,
    },

    /// No stations were configured
    #[error("STATIONS must name at least one station")]
    NoStations,
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Stations served, in configuration order.
    pub stations: Vec<StationId>,

    /// Scheduling rules shared by every station.
    pub schedule: ScheduleConfig,
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to
    /// its value if set.
    ///
    /// Recognized variables: `STATION_HOST`, `STATION_PORT`, `STATIONS`
    /// (comma-separated) and `MIN_GAP_SECS`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = match lookup("STATION_HOST") {
            Some(s) => s.trim().parse::<IpAddr>().map_err(|e| ConfigError::Invalid {
                var: "STATION_HOST",
                message: format!("{e}"),
            })?,
            None => IpAddr::V4(Ipv4Addr::LOCALHOST),
        };

        let port = match lookup("STATION_PORT") {
            Some(s) => s.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "STATION_PORT",
                message: format!("{e}"),
            })?,
            None => DEFAULT_PORT,
        };

        let stations =
            parse_stations(&lookup("STATIONS").unwrap_or_else(|| DEFAULT_STATIONS.to_string()))?;

        let schedule = match lookup("MIN_GAP_SECS") {
            Some(s) => {
                let secs = s.trim().parse::<i64>().map_err(|e| ConfigError::Invalid {
                    var: "MIN_GAP_SECS",
                    message: format!("{e}"),
                })?;
                if secs < 0 {
                    return Err(ConfigError::Invalid {
                        var: "MIN_GAP_SECS",
                        message: "must not be negative".to_string(),
                    });
                }
                if chrono::Duration::try_seconds(secs).is_none() {
                    return Err(ConfigError::Invalid {
                        var: "MIN_GAP_SECS",
                        message: "out of range".to_string(),
                    });
                }
                ScheduleConfig::new(secs)
            }
            None => ScheduleConfig::default(),
        };

        Ok(Self {
            addr: SocketAddr::new(host, port),
            stations,
            schedule,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), DEFAULT_PORT),
            stations: DEFAULT_STATIONS
                .split(',')
                .filter_map(|s| StationId::parse(s).ok())
                .collect(),
            schedule: ScheduleConfig::default(),
        }
    }
}

/// Parse a comma-separated station list, skipping blank entries and repeats.
fn parse_stations(list: &str) -> Result<Vec<StationId>, ConfigError> {
    let mut stations: Vec<StationId> = Vec::new();
    for entry in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let id = StationId::parse(entry).map_err(|source| ConfigError::Station {
            id: entry.to_string(),
            source,
        })?;
        if !stations.contains(&id) {
            stations.push(id);
        }
    }

    if stations.is_empty() {
        return Err(ConfigError::NoStations);
    }
    Ok(stations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    fn ids(config: &ServerConfig) -> Vec<&str> {
        config.stations.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn defaults() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(ids(&config), vec!["ICAN", "GATN", "PASS"]);
        assert_eq!(config.schedule, ScheduleConfig::default());
    }

    #[test]
    fn default_impl_matches_empty_environment() {
        let from_env = ServerConfig::from_lookup(lookup(&[])).unwrap();
        let default = ServerConfig::default();
        assert_eq!(from_env.addr, default.addr);
        assert_eq!(from_env.stations, default.stations);
        assert_eq!(from_env.schedule, default.schedule);
    }

    #[test]
    fn custom_values() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("STATION_HOST", "0.0.0.0"),
            ("STATION_PORT", "8080"),
            ("STATIONS", " DSS14 , DSS43,,DSS14 "),
            ("MIN_GAP_SECS", "60"),
        ]))
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(ids(&config), vec!["DSS14", "DSS43"]);
        assert_eq!(config.schedule.min_gap_secs, 60);
    }

    #[test]
    fn reject_bad_port() {
        let err = ServerConfig::from_lookup(lookup(&[("STATION_PORT", "http")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                var: "STATION_PORT",
                ..
            }
        ));
    }

    #[test]
    fn reject_bad_host() {
        let err = ServerConfig::from_lookup(lookup(&[("STATION_HOST", "localhost")])).unwrap_err();
        assert!(err.to_string().starts_with("invalid STATION_HOST"));
    }

    #[test]
    fn reject_bad_station() {
        let err = ServerConfig::from_lookup(lookup(&[("STATIONS", "ICAN,gatn")])).unwrap_err();
        assert!(matches!(err, ConfigError::Station { ref id, .. } if id == "gatn"));
    }

    #[test]
    fn reject_empty_station_list() {
        let err = ServerConfig::from_lookup(lookup(&[("STATIONS", " , ")])).unwrap_err();
        assert!(matches!(err, ConfigError::NoStations));
    }

    #[test]
    fn reject_negative_gap() {
        let err = ServerConfig::from_lookup(lookup(&[("MIN_GAP_SECS", "-1")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid MIN_GAP_SECS: must not be negative");
    }

    #[test]
    fn reject_huge_gap() {
        let err = ServerConfig::from_lookup(lookup(&[("MIN_GAP_SECS", "10000000000000000")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid MIN_GAP_SECS: out of range");

        // Largest gap chrono can represent is still accepted
        let max = (i64::MAX / 1000).to_string();
        let config = ServerConfig::from_lookup(lookup(&[("MIN_GAP_SECS", max.as_str())])).unwrap();
        assert_eq!(config.schedule.min_gap_secs, i64::MAX / 1000);
    }
}
