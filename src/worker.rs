//! A dedicated thread that computes Routes off the caller's thread
//!
//! The caller and the worker share no memory: a [`RouteRequest`] is moved into the job queue,
//! and the [`RouteReply`] is moved back through a channel of its own. The worker computes one
//! job at a time, in submission order, and keeps no state between jobs.

use crate::metric::{Euclidean, Metric};
use crate::protocol::{RouteReply, RouteRequest};
use crate::route::RouteChainer;
use crate::WorkerError;

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

type Reply = Result<RouteReply, WorkerError>;

#[derive(Debug)]
struct Job {
    request: RouteRequest,
    reply: Sender<Reply>,
}

/// A handle to a worker thread that answers every [`RouteRequest`] with exactly one reply.
///
/// Shutting down or dropping the handle lets the worker finish the jobs that are already
/// queued, then joins the thread.
///
/// ## Examples
/// ```
/// # use waypoint_pathfinding::prelude::*;
/// let worker = RouteWorker::spawn().unwrap();
///
/// let (a, b) = (Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// let network: RoadNetwork = [(a, b)].into_iter().collect();
///
/// let first = worker.submit(RouteRequest::new(network.clone(), vec![a, b])).unwrap();
/// let second = worker.submit(RouteRequest::new(network, vec![b, a])).unwrap();
///
/// assert_eq!(first.wait().unwrap().cost, 5.0);
/// assert_eq!(second.wait().unwrap().status, RouteStatus::NotFound);
/// ```
#[derive(Debug)]
pub struct RouteWorker {
    jobs: Option<Sender<Job>>,
    handle: Option<JoinHandle<()>>,
}

impl RouteWorker {
    /// Starts a worker that routes with the default [`RouteChainer`]
    pub fn spawn() -> Result<RouteWorker, WorkerError> {
        RouteWorker::with_chainer(RouteChainer::<Euclidean>::default())
    }

    /// Starts a worker that routes every job with `chainer`
    pub fn with_chainer<M: Metric + 'static>(
        chainer: RouteChainer<M>,
    ) -> Result<RouteWorker, WorkerError> {
        let (jobs, queue) = mpsc::channel();
        let handle = thread::Builder::new()
            .name(String::from("route-worker"))
            .spawn(move || run(chainer, queue))
            .map_err(WorkerError::Spawn)?;

        Ok(RouteWorker {
            jobs: Some(jobs),
            handle: Some(handle),
        })
    }

    /// Queues `request` and returns a handle to its reply.
    ///
    /// This never blocks. Queued jobs are answered in the order they were submitted.
    pub fn submit(&self, request: RouteRequest) -> Result<PendingRoute, WorkerError> {
        let jobs = self.jobs.as_ref().ok_or(WorkerError::Disconnected)?;
        let (reply, receiver) = mpsc::channel();
        jobs.send(Job { request, reply })
            .map_err(|_| WorkerError::Disconnected)?;
        Ok(PendingRoute { receiver })
    }

    /// Submits `request` and blocks until its reply arrives
    pub fn route(&self, request: RouteRequest) -> Reply {
        self.submit(request)?.wait()
    }

    /// Stops accepting jobs, waits for the queued ones to be answered and joins the thread
    pub fn shutdown(mut self) -> Result<(), WorkerError> {
        self.stop()
    }

    fn stop(&mut self) -> Result<(), WorkerError> {
        // closing the queue ends the worker loop once it is drained
        drop(self.jobs.take());
        match self.handle.take() {
            Some(handle) => join_worker(handle),
            None => Ok(()),
        }
    }
}

/// Job panics are caught inside the loop, so a failed join means the loop itself died
fn join_worker(handle: JoinHandle<()>) -> Result<(), WorkerError> {
    handle.join().map_err(|_| WorkerError::Crashed)
}

impl Drop for RouteWorker {
    fn drop(&mut self) {
        if let Err(err) = self.stop() {
            log::warn!("route worker did not stop cleanly: {}", err);
        }
    }
}

/// The reply to one submitted [`RouteRequest`]
#[derive(Debug)]
pub struct PendingRoute {
    receiver: Receiver<Reply>,
}

impl PendingRoute {
    /// Blocks until the reply arrives
    pub fn wait(self) -> Reply {
        self.receiver
            .recv()
            .unwrap_or(Err(WorkerError::Disconnected))
    }

    /// Returns the reply if it has arrived, without blocking
    pub fn try_reply(&self) -> Option<Reply> {
        match self.receiver.try_recv() {
            Ok(reply) => Some(reply),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(WorkerError::Disconnected)),
        }
    }
}

fn run<M: Metric>(chainer: RouteChainer<M>, queue: Receiver<Job>) {
    log::info!("route worker started");
    let mut answered = 0usize;

    for Job { request, reply } in queue {
        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            chainer.route(&request.road_network, &request.points)
        }));
        let result = match outcome {
            Ok(Ok(route)) => Ok(RouteReply::from(route)),
            Ok(Err(err)) => {
                log::warn!("route job failed: {}", err);
                Err(WorkerError::Route(err))
            }
            Err(_) => {
                log::warn!("route job panicked");
                Err(WorkerError::JobPanicked)
            }
        };
        if reply.send(result).is_err() {
            log::debug!("caller stopped waiting for a route reply");
        }
        answered += 1;
    }

    log::info!("route worker stopped after {} jobs", answered);
}
