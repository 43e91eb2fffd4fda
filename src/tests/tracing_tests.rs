use std::{
    fs,
    time::{SystemTime, UNIX_EPOCH},
};

use tracing_subscriber::EnvFilter;

use crate::utils::tracing::{DIAGNOSTICS_TARGET, file_subscriber};

fn read_logs(dir: &std::path::Path) -> String {
    fs::read_dir(dir)
        .unwrap()
        .filter_map(Result::ok)
        .map(|e| fs::read_to_string(e.path()).unwrap_or_default())
        .collect()
}

#[test]
fn buffered_events_reach_the_file_when_guard_drops() {
    let ts = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let dir = std::env::temp_dir().join(format!("akshara-shift-tests-logs-{ts}"));
    fs::create_dir_all(&dir).unwrap();

    let (subscriber, guard) = file_subscriber(&dir, EnvFilter::new("info"));
    tracing::subscriber::with_default(subscriber, || {
        tracing::info!(target: DIAGNOSTICS_TARGET, worker = "conversion", "worker stopped");
    });
    drop(guard);

    let logs = read_logs(&dir);
    assert!(logs.contains("worker stopped"), "{logs:?}");
    assert!(logs.contains(DIAGNOSTICS_TARGET));

    let _ = fs::remove_dir_all(dir);
}
