use std::collections::HashMap;

use cpusim::{
    Algorithm, SimConfig,
    core::{Pid, ProcessDescriptor, SchedEvent, Ticks},
    dispatch,
};
use proptest::prelude::*;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn workload() -> impl Strategy<Value = Vec<ProcessDescriptor>> {
    prop::collection::vec((0u64..20, 1u64..10, 0i32..5), 1..12).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (arrival, burst, priority))| {
                ProcessDescriptor::new(i as Pid + 1, arrival, burst, priority)
            })
            .collect()
    })
}

fn config() -> impl Strategy<Value = SimConfig> {
    prop_oneof![
        Just(SimConfig::new(Algorithm::Npp)),
        (1i64..7).prop_map(|q| SimConfig::new(Algorithm::Rr).with_quantum(q)),
    ]
}

/// Run-slice lengths per pid, in order, rebuilt from the event trace.
fn slices(events: &[SchedEvent]) -> HashMap<Pid, Vec<Ticks>> {
    let mut started: Option<(Pid, Ticks)> = None;
    let mut slices: HashMap<Pid, Vec<Ticks>> = HashMap::new();

    for event in events {
        match *event {
            SchedEvent::Dispatched { pid, at } => {
                assert!(started.is_none(), "pid {pid} dispatched over a running process");
                started = Some((pid, at));
            }
            SchedEvent::Preempted { pid, at, .. } | SchedEvent::Completed { pid, at } => {
                let (running, since) = started.take().expect("stop without a dispatch");
                assert_eq!(running, pid);
                slices.entry(pid).or_default().push(at - since);
            }
            _ => {}
        }
    }

    slices
}

proptest! {
    #[test]
    fn finish_is_arrival_plus_burst_plus_waiting(descs in workload(), config in config()) {
        let outcome = dispatch(descs.clone(), &config).unwrap();
        let bursts: HashMap<Pid, Ticks> = descs.iter().map(|d| (d.pid, d.burst)).collect();

        for done in &outcome.completed {
            prop_assert_eq!(done.burst, bursts[&done.pid]);
            prop_assert_eq!(done.finish, done.arrival + done.burst + done.waiting);
        }
    }

    #[test]
    fn every_process_completes_exactly_once(descs in workload(), config in config()) {
        let outcome = dispatch(descs.clone(), &config).unwrap();

        let mut expected: Vec<Pid> = descs.iter().map(|d| d.pid).collect();
        let mut actual: Vec<Pid> = outcome.completed.iter().map(|p| p.pid).collect();
        expected.sort_unstable();
        actual.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn runs_are_deterministic(descs in workload(), config in config()) {
        init_logging();
        let first = dispatch(descs.clone(), &config).unwrap();
        let second = dispatch(descs, &config).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn npp_runs_each_burst_in_one_block(descs in workload()) {
        let outcome = dispatch(descs.clone(), &SimConfig::new(Algorithm::Npp)).unwrap();
        let slices = slices(&outcome.events);

        for desc in &descs {
            prop_assert_eq!(&slices[&desc.pid], &vec![desc.burst]);
        }
    }

    #[test]
    fn rr_slices_add_up_to_burst(descs in workload(), quantum in 1u64..7) {
        let config = SimConfig::new(Algorithm::Rr).with_quantum(quantum as i64);
        let outcome = dispatch(descs.clone(), &config).unwrap();
        let slices = slices(&outcome.events);

        for desc in &descs {
            let runs = &slices[&desc.pid];
            prop_assert_eq!(runs.iter().sum::<Ticks>(), desc.burst);
            prop_assert!(runs.iter().all(|&run| run > 0 && run <= quantum));
            // Every slice but the last uses the whole quantum
            prop_assert!(runs[..runs.len() - 1].iter().all(|&run| run == quantum));
        }
    }

    #[test]
    fn nothing_starts_before_it_arrives(descs in workload(), config in config()) {
        let outcome = dispatch(descs.clone(), &config).unwrap();
        let arrivals: HashMap<Pid, Ticks> = descs.iter().map(|d| (d.pid, d.arrival)).collect();

        for event in &outcome.events {
            if let SchedEvent::Dispatched { pid, at } = *event {
                prop_assert!(at >= arrivals[&pid]);
            }
        }
    }
}
