//! Table-driven ephemeris engine.
//!
//! Loads one segment table per body from a configured data directory at
//! startup and serves longitude/speed queries from them. The engine is
//! configured once, before any query, and never reconfigured mid-run.

use std::collections::HashMap;
use std::path::PathBuf;

use tracing::debug;

use crate::error::EphemError;
use crate::segment::{SegmentTable, parse_table};
use crate::{ALL_BODIES, Body, BodyState, Ephemeris};

/// Engine configuration used at startup time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Directory containing one `<body>.eph` table per supported body.
    pub data_dir: PathBuf,
}

impl EngineConfig {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    fn validate(&self) -> Result<(), EphemError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(EphemError::InvalidConfig("data_dir must not be empty"));
        }
        Ok(())
    }
}

/// File-backed ephemeris oracle.
pub struct Engine {
    config: EngineConfig,
    tables: HashMap<Body, SegmentTable>,
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total_segments: usize = self.tables.values().map(|t| t.segments().len()).sum();
        f.debug_struct("Engine")
            .field("config", &self.config)
            .field("bodies", &self.tables.len())
            .field("total_segments", &total_segments)
            .finish()
    }
}

impl Engine {
    /// Create a new engine, loading every body's table from the data
    /// directory. Any missing or malformed file aborts the load.
    pub fn new(config: EngineConfig) -> Result<Self, EphemError> {
        config.validate()?;

        let mut tables = HashMap::with_capacity(ALL_BODIES.len());
        for body in ALL_BODIES {
            let path = config.data_dir.join(format!("{}.eph", body.file_stem()));
            let content = std::fs::read_to_string(&path)
                .map_err(|e| EphemError::DataFile(format!("{}: {e}", path.display())))?;
            let table = parse_table(&content)
                .map_err(|e| EphemError::Parse(format!("{}: {e}", path.display())))?;
            if table.body_name() != body.file_stem() {
                return Err(EphemError::Parse(format!(
                    "{}: table declares body '{}', expected '{}'",
                    path.display(),
                    table.body_name(),
                    body.file_stem()
                )));
            }
            debug!(
                body = body.name(),
                segments = table.segments().len(),
                "loaded ephemeris table"
            );
            tables.insert(body, table);
        }

        Ok(Self { config, tables })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// `[start, end]` Julian Date coverage for a body's table.
    pub fn coverage(&self, body: Body) -> Option<(f64, f64)> {
        self.tables.get(&body).map(SegmentTable::coverage)
    }
}

impl Ephemeris for Engine {
    fn position_and_speed(&self, body: Body, jd_ut: f64) -> Result<BodyState, EphemError> {
        let table = self
            .tables
            .get(&body)
            .ok_or_else(|| EphemError::Internal(format!("no table for {}", body.name())))?;
        let segment = table.find(jd_ut).ok_or(EphemError::EpochOutOfRange {
            body: body.name(),
            jd_ut,
        })?;
        let (lon, speed) = segment.evaluate(jd_ut);
        Ok(BodyState {
            longitude_deg: lon.rem_euclid(360.0),
            speed_deg_per_day: speed,
        })
    }
}
