//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading pay rules and
//! rate tables from YAML files.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{PositionType, StudentGrade, TeacherLevel};

use super::types::{PayConfig, PayRules, PayTables, SalaryConfig};

type FixedSalaryMap = BTreeMap<TeacherLevel, BTreeMap<PositionType, SalaryConfig>>;
type PersonalRateMap = BTreeMap<TeacherLevel, BTreeMap<StudentGrade, Decimal>>;

/// Loads and provides access to pay configuration.
///
/// # Directory Structure
///
/// ```text
/// config/standard/
/// ├── rules.yaml           # Quota, bonuses and fees (required)
/// ├── fixed_salary.yaml    # Level x position salary table (optional)
/// └── personal_rates.yaml  # Level x grade rate table (optional)
/// ```
///
/// A table file that is absent falls back to the built-in table. A table
/// file that is present must contain every key.
///
/// # Example
///
/// ```no_run
/// use teacher_pay::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/standard")?;
/// println!("Task-hour quota: {}", loader.rules().task_hour_quota);
/// # Ok::<(), teacher_pay::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PayConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `rules.yaml` is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML (`ConfigParseError`)
    /// - A table file leaves out a level, position or grade (`IncompleteRateTable`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rules = Self::load_yaml::<PayRules>(&path.join("rules.yaml"))?;

        let defaults = PayTables::standard();
        let fixed_salary = match Self::load_optional_yaml::<FixedSalaryMap>(
            &path.join("fixed_salary.yaml"),
        )? {
            Some(map) => fixed_salary_from_map(&map)?,
            None => TeacherLevel::ALL
                .map(|level| PositionType::ALL.map(|pos| defaults.fixed_salary(level, pos))),
        };
        let personal_rates = match Self::load_optional_yaml::<PersonalRateMap>(
            &path.join("personal_rates.yaml"),
        )? {
            Some(map) => personal_rates_from_map(&map)?,
            None => TeacherLevel::ALL.map(|level| *defaults.personal_rates(level)),
        };

        tracing::debug!(
            path = %path.display(),
            task_hour_quota = rules.task_hour_quota,
            "Loaded pay configuration"
        );

        Ok(Self {
            config: PayConfig {
                rules,
                tables: PayTables::new(fixed_salary, personal_rates),
            },
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads and parses a YAML file if it exists.
    fn load_optional_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<Option<T>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load_yaml(path).map(Some)
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &PayConfig {
        &self.config
    }

    /// Returns the loaded pay rules.
    pub fn rules(&self) -> &PayRules {
        &self.config.rules
    }

    /// Returns the loaded rate tables.
    pub fn tables(&self) -> &PayTables {
        &self.config.tables
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayConfig {
        self.config
    }
}

fn fixed_salary_from_map(map: &FixedSalaryMap) -> EngineResult<[[SalaryConfig; 2]; 8]> {
    let mut table = [[SalaryConfig {
        base: Decimal::ZERO,
        post: Decimal::ZERO,
    }; 2]; 8];

    for level in TeacherLevel::ALL {
        for position in PositionType::ALL {
            table[level.index()][position.index()] = map
                .get(&level)
                .and_then(|row| row.get(&position))
                .copied()
                .ok_or_else(|| EngineError::IncompleteRateTable {
                    table: "fixed_salary".to_string(),
                    missing: format!("{}/{}", level.code(), position.code()),
                })?;
        }
    }
    Ok(table)
}

fn personal_rates_from_map(map: &PersonalRateMap) -> EngineResult<[[Decimal; 9]; 8]> {
    let mut table = [[Decimal::ZERO; 9]; 8];

    for level in TeacherLevel::ALL {
        for grade in StudentGrade::ALL {
            table[level.index()][grade.index()] = map
                .get(&level)
                .and_then(|row| row.get(&grade))
                .copied()
                .ok_or_else(|| EngineError::IncompleteRateTable {
                    table: "personal_rates".to_string(),
                    missing: format!("{}/{}", level.code(), grade.code()),
                })?;
        }
    }
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/standard"
    }

    #[test]
    fn test_load_standard_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.rules(), &PayRules::default());
    }

    #[test]
    fn test_shipped_tables_match_built_in_tables() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        assert_eq!(loader.tables(), &PayTables::standard());
        assert_eq!(loader.into_config(), PayConfig::standard());
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("rules.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_fixed_salary_table_is_rejected() {
        let yaml = "level_1:\n  high_school: { base: 2100, post: 200 }\n";
        let map: FixedSalaryMap = serde_yaml::from_str(yaml).unwrap();

        match fixed_salary_from_map(&map) {
            Err(EngineError::IncompleteRateTable { table, missing }) => {
                assert_eq!(table, "fixed_salary");
                assert_eq!(missing, "level_1/primary_middle");
            }
            other => panic!("Expected IncompleteRateTable error, got {:?}", other),
        }
    }

    #[test]
    fn test_incomplete_personal_rate_table_is_rejected() {
        let map: PersonalRateMap = TeacherLevel::ALL
            .into_iter()
            .map(|level| {
                let row = StudentGrade::ALL
                    .into_iter()
                    .filter(|g| !(level == TeacherLevel::Seven && *g == StudentGrade::High2))
                    .map(|g| (g, Decimal::from(100)))
                    .collect();
                (level, row)
            })
            .collect();

        match personal_rates_from_map(&map) {
            Err(EngineError::IncompleteRateTable { table, missing }) => {
                assert_eq!(table, "personal_rates");
                assert_eq!(missing, "level_7/high_2");
            }
            other => panic!("Expected IncompleteRateTable error, got {:?}", other),
        }
    }

    #[test]
    fn test_complete_personal_rate_table_accepts_fractional_rates() {
        let map: PersonalRateMap = TeacherLevel::ALL
            .into_iter()
            .map(|level| {
                let row = StudentGrade::ALL
                    .into_iter()
                    .map(|g| (g, Decimal::new(955, 1)))
                    .collect();
                (level, row)
            })
            .collect();

        let table = personal_rates_from_map(&map).unwrap();
        assert_eq!(table[3][4], Decimal::new(955, 1));
    }

    #[test]
    fn test_unknown_level_in_yaml_is_a_parse_error() {
        let yaml = "level_9:\n  grade_1_2: 90\n";
        let result: Result<PersonalRateMap, _> = serde_yaml::from_str(yaml);
        assert!(result.is_err());
    }
}
