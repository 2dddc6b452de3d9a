use rand::prelude::*;
use schedsim::{PolicyKind, TaskSpec, simulate};

const QUANTUM: u64 = 2;
const ARRIVAL_WINDOW: u64 = 40;

fn main() {
    tracing_subscriber::fmt::init();

    let tasks = bernoulli_tasks(ARRIVAL_WINDOW, 0.3, 0.4, 2, 7, 0);
    println!(
        "workload: {} tasks over {ARRIVAL_WINDOW} ticks of arrivals\n",
        tasks.len()
    );

    for policy in PolicyKind::ALL {
        let quantum = (policy == PolicyKind::RoundRobin).then_some(QUANTUM);
        let result = match simulate(&tasks, policy, quantum) {
            Ok(result) => result,
            Err(err) => {
                eprintln!("{}: {err}", policy.name());
                continue;
            }
        };

        let m = &result.metrics;
        println!("{}", policy.name());
        println!("  avg waiting    {:>8.2}", m.avg_waiting);
        println!("  avg turnaround {:>8.2}", m.avg_turnaround);
        println!("  avg response   {:>8.2}", m.avg_response);
        println!("  throughput     {:>8.4} tasks/tick", m.throughput);
        println!("  makespan       {:>8} ticks", m.makespan);
        println!("  context spans  {:>8}\n", result.gantt.len());
    }
}

/// Seeded Bernoulli arrival process: each tick has probability
/// `p_arrival` of producing a task, short with probability `p_short`.
/// Priorities are uniform over 0..5.
fn bernoulli_tasks(
    ticks: u64,
    p_arrival: f64,
    p_short: f64,
    short_burst: u64,
    long_burst: u64,
    seed: u64,
) -> Vec<TaskSpec> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut tasks = Vec::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let burst = if rng.random::<f64>() < p_short {
                short_burst
            } else {
                long_burst
            };
            let id = tasks.len() as u64 + 1;
            tasks.push(TaskSpec::new(id, t, burst).with_priority(rng.random_range(0..5)));
        }
    }

    tasks
}
