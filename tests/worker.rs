use waypoint_pathfinding::prelude::*;
use waypoint_pathfinding::{
    protocol::{decode_request, encode_reply, handle_message},
    route::SegmentStatus,
    WorkerError,
};

use std::thread;

const REQUEST: &str = r#"{
    "roadNetwork": {
        "0,0": [[0, 1], [1, 0]],
        "0,1": [[0, 2]],
        "1,0": [[1, 1]],
        "1,1": [[0, 2]]
    },
    "points": [[0, 0], [0, 2], [9, 9]]
}"#;

#[test]
fn message_round_trip() {
    let _ = env_logger::builder().is_test(true).try_init();
    let worker = RouteWorker::spawn().unwrap();

    let reply = worker.route(decode_request(REQUEST).unwrap()).unwrap();

    let json = encode_reply(&reply).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value["path"],
        serde_json::json!([[0.0, 0.0], [0.0, 1.0], [0.0, 2.0]])
    );
    assert_eq!(value["cost"], 2.0);
    assert_eq!(value["status"], "partial");
    assert_eq!(value["segments"][1]["status"]["kind"], "unreachable");

    assert_eq!(reply.segments[0].status, SegmentStatus::Found { len: 3, cost: 2.0 });
    worker.shutdown().unwrap();
}

#[test]
fn reply_matches_direct_call() {
    let request = decode_request(REQUEST).unwrap();
    let direct = handle_message(&RouteChainer::default(), REQUEST).unwrap();

    let worker = RouteWorker::spawn().unwrap();
    let reply = worker.route(request).unwrap();

    assert_eq!(
        waypoint_pathfinding::protocol::encode_path(&reply.path).unwrap(),
        direct
    );
}

#[test]
fn callers_on_many_threads() {
    let worker = RouteWorker::spawn().unwrap();
    let request = decode_request(REQUEST).unwrap();

    let pending: Vec<_> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let request = request.clone();
                let worker = &worker;
                scope.spawn(move || worker.submit(request).unwrap())
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for pending in pending {
        assert_eq!(pending.wait().unwrap().path.len(), 3);
    }
}

#[test]
fn dropped_caller_does_not_stop_worker() {
    let worker = RouteWorker::spawn().unwrap();
    let request = decode_request(REQUEST).unwrap();

    drop(worker.submit(request.clone()).unwrap());
    let reply = worker.route(request);

    assert!(reply.is_ok());
}

#[test]
fn error_types_display() {
    assert_eq!(
        WorkerError::Disconnected.to_string(),
        "route worker is no longer running"
    );
    assert_eq!(
        WorkerError::JobPanicked.to_string(),
        "route job panicked on the worker thread"
    );
}
