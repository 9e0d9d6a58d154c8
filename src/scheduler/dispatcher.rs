//! Topology/algorithm dispatch.
//!
//! | Topology | Route |
//! |----------|-------|
//! | `FlowShop` | rule for the algorithm → simulator |
//! | `ParallelIdentical`, `ParallelDifferent` | parallel list scheduler (FIFO/SPT/LPT order) |
//! | `JobShop`, `Other(_)` | FIFO flow-shop, with a `TopologyFallback` advisory |

use tracing::debug;

use super::{schedule_parallel, schedule_with_rule};
use crate::config::{Algorithm, ShopConfig, SystemType};
use crate::dispatching::{rule_for, rules};
use crate::models::{Advisory, Job, ScheduleResult};

/// Computes a schedule for the given topology and algorithm.
///
/// Never fails. Topologies without a dedicated scheduler fall back to
/// FIFO flow-shop; the fallback is recorded as an advisory.
pub fn schedule(
    jobs: &[Job],
    machine_count: usize,
    system_type: &SystemType,
    algorithm: Algorithm,
) -> ScheduleResult {
    match system_type {
        SystemType::FlowShop => {
            debug!(%algorithm, machine_count, jobs = jobs.len(), "flow-shop dispatch");
            schedule_with_rule(rule_for(algorithm), jobs, machine_count)
        }
        SystemType::ParallelIdentical | SystemType::ParallelDifferent => {
            debug!(%system_type, %algorithm, machine_count, jobs = jobs.len(), "parallel dispatch");
            schedule_parallel(jobs, machine_count, algorithm)
        }
        SystemType::JobShop | SystemType::Other(_) => {
            debug!(%system_type, %algorithm, "no dedicated scheduler; falling back to FIFO flow-shop");
            let mut result = schedule_with_rule(&rules::Fifo, jobs, machine_count);
            result.add_advisory(Advisory::topology_fallback(system_type.tag()));
            result
        }
    }
}

/// Computes a schedule for a configuration.
///
/// Uses the configured machine count; `job_count` is informational.
pub fn schedule_config(config: &ShopConfig, jobs: &[Job]) -> ScheduleResult {
    schedule(jobs, config.machine_count, &config.system_type, config.algorithm)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AdvisoryKind, JobId, Time};
    use crate::scheduler::simulate;

    fn job(id: JobId, times: &[Time]) -> Job {
        Job::new(id).with_processing_times(times.to_vec())
    }

    fn sample() -> Vec<Job> {
        vec![job(1, &[3, 5]), job(2, &[6, 2]), job(3, &[1, 4])]
    }

    #[test]
    fn test_flow_shop_routes_each_algorithm() {
        let jobs = sample();
        let expected = [
            (Algorithm::Fifo, vec![1, 2, 3]),
            (Algorithm::Spt, vec![3, 1, 2]),
            (Algorithm::Lpt, vec![1, 2, 3]),
            (Algorithm::Johnson, vec![3, 1, 2]),
            (Algorithm::Neh, vec![3, 1, 2]),
        ];
        for (algorithm, sequence) in expected {
            let result = schedule(&jobs, 2, &SystemType::FlowShop, algorithm);
            assert_eq!(result.job_sequence, sequence, "{algorithm}");
            assert_eq!(result, simulate(&jobs, &sequence, 2), "{algorithm}");
        }
    }

    #[test]
    fn test_parallel_topologies_use_list_scheduler() {
        let jobs = sample();
        for system in [SystemType::ParallelIdentical, SystemType::ParallelDifferent] {
            let result = schedule(&jobs, 2, &system, Algorithm::Lpt);
            // One task per job on parallel machines
            assert_eq!(result.task_count(), 3);
            assert_eq!(result.job_sequence, vec![2, 1, 3]);
        }
    }

    #[test]
    fn test_parallel_ignores_flow_shop_only_algorithm() {
        let jobs = sample();
        let johnson = schedule(&jobs, 2, &SystemType::ParallelIdentical, Algorithm::Johnson);
        let fifo = schedule(&jobs, 2, &SystemType::ParallelIdentical, Algorithm::Fifo);
        assert_eq!(johnson, fifo);
    }

    #[test]
    fn test_job_shop_falls_back_to_fifo_flow_shop() {
        let jobs = sample();
        let result = schedule(&jobs, 2, &SystemType::JobShop, Algorithm::Spt);
        assert_eq!(result.job_sequence, vec![1, 2, 3]);
        assert!(result.has_advisory(&AdvisoryKind::TopologyFallback("job-shop".into())));
    }

    #[test]
    fn test_unknown_topology_falls_back_to_fifo_flow_shop() {
        let jobs = sample();
        let system = SystemType::from("open-shop");
        let result = schedule(&jobs, 2, &system, Algorithm::Neh);
        assert_eq!(result.job_sequence, vec![1, 2, 3]);
        assert_eq!(result.tasks, simulate(&jobs, &[1, 2, 3], 2).tasks);
        assert!(result.has_advisory(&AdvisoryKind::TopologyFallback("open-shop".into())));
    }

    #[test]
    fn test_schedule_config() {
        let config = ShopConfig::new()
            .with_machine_count(2)
            .with_algorithm(Algorithm::Johnson);
        let result = schedule_config(&config, &sample());
        assert_eq!(result.makespan, 12);
    }
}
