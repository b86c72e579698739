use std::path::PathBuf;

use serde_json::Value;
use simplelog::LevelFilter;

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Compact,
    Sparse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Generator {
    Chain,
    Mixed,
}

/// Driver settings, read from the JSON object on the first input line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub variant: Variant,
    pub capacity: usize,
    pub log_level: LevelFilter,
    pub log_file: Option<PathBuf>,
    pub verify: bool,
    pub generate: Option<Generator>,
    pub ops: usize,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            variant: Variant::Compact,
            capacity: 0,
            log_level: LevelFilter::Info,
            log_file: None,
            verify: false,
            generate: None,
            ops: 1000,
            seed: 0,
        }
    }
}

fn str_field<'a>(json: &'a Value, field: &'static str) -> Result<Option<&'a str>, ConfigError> {
    match json.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_str().map(Some).ok_or(ConfigError::WrongType { field, expected: "a string" }),
    }
}

fn u64_field(json: &Value, field: &'static str) -> Result<Option<u64>, ConfigError> {
    match json.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(v) => v.as_u64().map(Some).ok_or(ConfigError::WrongType { field, expected: "a non-negative integer" }),
    }
}

impl Config {
    pub fn parse(line: &str) -> Result<Config, ConfigError> {
        let json: Value = serde_json::from_str(line)?;
        Config::from_json(&json)
    }

    pub fn from_json(json: &Value) -> Result<Config, ConfigError> {
        if !json.is_object() {
            return Err(ConfigError::NotAnObject);
        }
        let mut config = Config::default();

        if let Some(v) = str_field(json, "variant")? {
            config.variant = match v {
                "compact" => Variant::Compact,
                "sparse" => Variant::Sparse,
                other => return Err(ConfigError::UnknownVariant(other.to_string())),
            };
        }

        // negative capacities clamp to an empty universe
        match json.get("capacity") {
            None | Some(Value::Null) => {}
            Some(v) => {
                let cap = v.as_i64().ok_or(ConfigError::WrongType { field: "capacity", expected: "an integer" })?;
                config.capacity = cap.max(0) as usize;
            }
        }

        if let Some(v) = str_field(json, "log_level")? {
            config.log_level = v.parse().map_err(|_| ConfigError::UnknownLogLevel(v.to_string()))?;
        }
        config.log_file = str_field(json, "log_file")?.map(PathBuf::from);

        match json.get("verify") {
            None | Some(Value::Null) => {}
            Some(v) => {
                config.verify = v.as_bool().ok_or(ConfigError::WrongType { field: "verify", expected: "a boolean" })?;
            }
        }

        if let Some(v) = str_field(json, "generate")? {
            config.generate = Some(match v {
                "chain" => Generator::Chain,
                "mixed" => Generator::Mixed,
                _ => return Err(ConfigError::WrongType { field: "generate", expected: "`chain` or `mixed`" }),
            });
        }
        if let Some(n) = u64_field(json, "ops")? {
            config.ops = n as usize;
        }
        if let Some(s) = u64_field(json, "seed")? {
            config.seed = s;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(Config::parse("{}").unwrap(), Config::default());
    }

    #[test]
    fn reads_every_field() {
        let config = Config::parse(r#"{"variant": "sparse", "capacity": 12, "log_level": "debug",
            "log_file": "dsu.log", "verify": true, "generate": "mixed", "ops": 50, "seed": 9}"#).unwrap();
        assert_eq!(config, Config {
            variant: Variant::Sparse,
            capacity: 12,
            log_level: LevelFilter::Debug,
            log_file: Some(PathBuf::from("dsu.log")),
            verify: true,
            generate: Some(Generator::Mixed),
            ops: 50,
            seed: 9,
        });
    }

    #[test]
    fn negative_capacity_clamps_to_zero() {
        let config = Config::parse(r#"{"capacity": -5}"#).unwrap();
        assert_eq!(config.capacity, 0);
    }

    #[test]
    fn rejects_bad_input() {
        match Config::parse("not json") {
            Err(ConfigError::Json(_)) => {}
            other => panic!("expected json error, got {:?}", other),
        }
        match Config::parse("[1, 2]") {
            Err(ConfigError::NotAnObject) => {}
            other => panic!("expected not-an-object, got {:?}", other),
        }
        match Config::parse(r#"{"variant": "dense"}"#) {
            Err(ConfigError::UnknownVariant(v)) => assert_eq!(v, "dense"),
            other => panic!("expected unknown variant, got {:?}", other),
        }
        match Config::parse(r#"{"log_level": "loud"}"#) {
            Err(ConfigError::UnknownLogLevel(v)) => assert_eq!(v, "loud"),
            other => panic!("expected unknown level, got {:?}", other),
        }
        match Config::parse(r#"{"capacity": "ten"}"#) {
            Err(ConfigError::WrongType { field, .. }) => assert_eq!(field, "capacity"),
            other => panic!("expected wrong type, got {:?}", other),
        }
    }
}
