//! Shop configuration: topology, algorithm, and instance bounds.
//!
//! Values arriving from outside (deserialized config, data entry) are
//! clamped into bounds rather than rejected.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, ScheduleError};

/// Minimum number of machines.
pub const MIN_MACHINES: usize = 1;
/// Maximum number of machines.
pub const MAX_MACHINES: usize = 10;
/// Minimum number of jobs.
pub const MIN_JOBS: usize = 1;
/// Maximum number of jobs. Keeps NEH's O(n³·m) cost tractable.
pub const MAX_JOBS: usize = 20;

/// Shop topology.
///
/// Parsing never fails: an unrecognized tag becomes `Other(tag)`, which
/// the dispatcher routes to FIFO flow-shop.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SystemType {
    /// Every job visits every machine in the same order.
    #[default]
    FlowShop,
    /// Per-job routing. Scheduled as a FIFO flow shop.
    JobShop,
    /// Identical parallel machines, single-operation jobs.
    ParallelIdentical,
    /// Parallel machines with differing capacities, approximated as identical.
    ParallelDifferent,
    /// Unrecognized topology tag.
    Other(String),
}

impl SystemType {
    /// Tag string for this topology.
    pub fn tag(&self) -> &str {
        match self {
            SystemType::FlowShop => "flow-shop",
            SystemType::JobShop => "job-shop",
            SystemType::ParallelIdentical => "parallel-identical",
            SystemType::ParallelDifferent => "parallel-different",
            SystemType::Other(tag) => tag,
        }
    }

    /// Whether jobs are single-operation on parallel machines.
    pub fn is_parallel(&self) -> bool {
        matches!(
            self,
            SystemType::ParallelIdentical | SystemType::ParallelDifferent
        )
    }
}

impl From<&str> for SystemType {
    fn from(tag: &str) -> Self {
        match tag {
            "flow-shop" => SystemType::FlowShop,
            "job-shop" => SystemType::JobShop,
            "parallel-identical" => SystemType::ParallelIdentical,
            "parallel-different" => SystemType::ParallelDifferent,
            other => SystemType::Other(other.to_string()),
        }
    }
}

impl From<String> for SystemType {
    fn from(tag: String) -> Self {
        SystemType::from(tag.as_str())
    }
}

impl From<SystemType> for String {
    fn from(system: SystemType) -> Self {
        system.tag().to_string()
    }
}

impl fmt::Display for SystemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Sequencing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// First In First Out: input order.
    #[default]
    Fifo,
    /// Shortest Processing Time first.
    Spt,
    /// Longest Processing Time first.
    Lpt,
    /// Johnson's two-machine rule.
    Johnson,
    /// Nawaz-Enscore-Ham insertion.
    Neh,
}

impl Algorithm {
    /// All algorithms, in comparison display order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Fifo,
        Algorithm::Spt,
        Algorithm::Lpt,
        Algorithm::Johnson,
        Algorithm::Neh,
    ];

    /// Tag string for this algorithm.
    pub fn tag(&self) -> &'static str {
        match self {
            Algorithm::Fifo => "fifo",
            Algorithm::Spt => "spt",
            Algorithm::Lpt => "lpt",
            Algorithm::Johnson => "johnson",
            Algorithm::Neh => "neh",
        }
    }

    /// Whether the algorithm is only meaningful for flow shops.
    pub fn is_flow_shop_only(&self) -> bool {
        matches!(self, Algorithm::Johnson | Algorithm::Neh)
    }
}

/// Parses a lowercase tag (`"fifo"`, `"spt"`, ...), matching the serde form.
impl FromStr for Algorithm {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self> {
        Algorithm::ALL
            .iter()
            .copied()
            .find(|a| a.tag() == s)
            .ok_or_else(|| ScheduleError::UnknownAlgorithm(s.to_string()))
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Clamps a machine count into `[MIN_MACHINES, MAX_MACHINES]`.
pub fn clamp_machine_count(count: usize) -> usize {
    count.clamp(MIN_MACHINES, MAX_MACHINES)
}

/// Clamps a job count into `[MIN_JOBS, MAX_JOBS]`.
pub fn clamp_job_count(count: usize) -> usize {
    count.clamp(MIN_JOBS, MAX_JOBS)
}

/// `algorithm`, or FIFO when it only applies to flow shops and the
/// topology is something else.
fn applicable_algorithm(system_type: &SystemType, algorithm: Algorithm) -> Algorithm {
    if *system_type != SystemType::FlowShop && algorithm.is_flow_shop_only() {
        Algorithm::Fifo
    } else {
        algorithm
    }
}

/// Scheduling run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShopConfig {
    /// Shop topology.
    pub system_type: SystemType,
    /// Sequencing algorithm.
    pub algorithm: Algorithm,
    /// Number of machines.
    #[serde(rename = "numMachines")]
    pub machine_count: usize,
    /// Number of jobs.
    #[serde(rename = "numJobs")]
    pub job_count: usize,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            system_type: SystemType::FlowShop,
            algorithm: Algorithm::Fifo,
            machine_count: 3,
            job_count: 5,
        }
    }
}

impl ShopConfig {
    /// Creates the default configuration (flow-shop, FIFO, 3 machines, 5 jobs).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the topology.
    ///
    /// Johnson and NEH only apply to flow shops; selecting another topology
    /// resets them to FIFO.
    pub fn with_system_type(mut self, system_type: SystemType) -> Self {
        self.algorithm = applicable_algorithm(&system_type, self.algorithm);
        self.system_type = system_type;
        self
    }

    /// Sets the algorithm.
    pub fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the machine count, clamped into bounds.
    pub fn with_machine_count(mut self, count: usize) -> Self {
        self.machine_count = clamp_machine_count(count);
        self
    }

    /// Sets the job count, clamped into bounds.
    pub fn with_job_count(mut self, count: usize) -> Self {
        self.job_count = clamp_job_count(count);
        self
    }

    /// Returns a copy with counts clamped into bounds and a flow-shop-only
    /// algorithm reset to FIFO on other topologies.
    pub fn normalized(&self) -> Self {
        Self {
            system_type: self.system_type.clone(),
            algorithm: applicable_algorithm(&self.system_type, self.algorithm),
            machine_count: clamp_machine_count(self.machine_count),
            job_count: clamp_job_count(self.job_count),
        }
    }

    /// Parses a JSON configuration and clamps it into bounds.
    ///
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: ShopConfig = serde_json::from_str(json)?;
        Ok(config.normalized())
    }
}
