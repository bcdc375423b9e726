//! Action-keyed dispatch with per-action loading/error bookkeeping
//!
//! Provides lifecycle tracking for named async operations:
//! - Loading flag set before the work starts, cleared after it finishes
//! - Failure descriptions captured per key, never retried
//! - Outcomes routed through injectable [`Hooks`]
//!
//! # Example
//!
//! ```ignore
//! use action_tracker::{ActionTracker, NoopHooks};
//!
//! let mut tracker = ActionTracker::new(NoopHooks);
//!
//! // Dispatch marks the key loading and spawns the work
//! tracker.dispatch(Key::FetchFollowers, async {
//!     let followers = api::fetch_followers("octocat").await?;
//!     Ok(Outcome::Followers(followers))
//! })?;
//!
//! // The owner pumps completions on its own context
//! tracker.settle_all().await;
//!
//! assert!(!tracker.is_loading(Key::FetchFollowers));
//! ```
//!
//! Work futures run on the tokio runtime; all state mutation and hook
//! invocation happens wherever the owner calls the `settle_*` methods, so a
//! display layer polling `is_loading`/`error_message` between settles never
//! observes a torn state.

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;

use crate::error::TrackerError;
use crate::hooks::Hooks;
use crate::key::ActionKey;
use crate::state::{ActionState, BoxError, Completion};

/// Per-dispatch completion callback, run after the success/error hook.
type FinishedCallback<R> = Box<dyn FnOnce(Result<R, BoxError>) + Send>;

/// Aggregate callback for [`ActionTracker::dispatch_group`].
type GroupCallback<K> = Box<dyn FnOnce(Vec<K>, Vec<K>) + Send>;

/// Shared accumulator for one group dispatch.
///
/// The mutex guards only these transient lists; the tracker's per-key maps
/// are never touched from work tasks.
struct GroupState<K> {
    succeeded: Vec<K>,
    failed: Vec<K>,
    remaining: usize,
    on_complete: Option<GroupCallback<K>>,
}

/// Book-keeping held between a key's dispatch and its settle.
struct Pending<K, R> {
    on_finished: Option<FinishedCallback<R>>,
    group: Option<Arc<Mutex<GroupState<K>>>>,
}

/// Generic bookkeeping for any number of named asynchronous operations,
/// independent of what those operations do.
///
/// The tracker owns a per-key state map and a hook set. `dispatch` marks a
/// key loading and spawns its work; the spawned task reports back over an
/// internal channel; the `settle_*` methods apply those completions, routing
/// each outcome through the hooks.
///
/// # Type Parameters
///
/// - `K`: the action key enumeration
/// - `R`: the outcome type produced by work futures (one enum variant per
///   action's expected payload keeps the routing typed end to end)
/// - `H`: the injected hook set
pub struct ActionTracker<K: ActionKey, R, H: Hooks<K, R>> {
    states: HashMap<K, ActionState>,
    pending: HashMap<K, Pending<K, R>>,
    hooks: H,
    completion_tx: mpsc::UnboundedSender<Completion<K, R>>,
    completion_rx: mpsc::UnboundedReceiver<Completion<K, R>>,
}

impl<K, R, H> ActionTracker<K, R, H>
where
    K: ActionKey,
    R: Send + 'static,
    H: Hooks<K, R>,
{
    /// Create a tracker with the given hook set.
    pub fn new(hooks: H) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            states: HashMap::new(),
            pending: HashMap::new(),
            hooks,
            completion_tx,
            completion_rx,
        }
    }

    /// Current loading flag for a key; `false` if never dispatched.
    pub fn is_loading(&self, key: K) -> bool {
        self.states.get(&key).is_some_and(|s| s.is_loading)
    }

    /// Last captured failure description for a key, or `None` if the last
    /// attempt succeeded or none occurred.
    pub fn error_message(&self, key: K) -> Option<&str> {
        self.states.get(&key).and_then(|s| s.error.as_deref())
    }

    /// Number of dispatches currently in flight.
    pub fn in_flight(&self) -> usize {
        self.pending.len()
    }

    /// Get a reference to the hook set.
    ///
    /// Domain state accumulated by hook implementations is read back here.
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Get a mutable reference to the hook set.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Start a tracked operation for `key`.
    ///
    /// Synchronously sets the key loading (clearing any stale error) and
    /// fires the status hook, then spawns `work` onto the tokio runtime
    /// without blocking the caller. The outcome is routed through the hooks
    /// when a later `settle_*` call applies it.
    ///
    /// Returns [`TrackerError::AlreadyInFlight`] if the key is loading; the
    /// earlier dispatch is unaffected.
    pub fn dispatch<F>(&mut self, key: K, work: F) -> Result<(), TrackerError>
    where
        F: Future<Output = Result<R, BoxError>> + Send + 'static,
    {
        self.submit(key, work, None, None)
    }

    /// Like [`dispatch`](Self::dispatch), with a per-dispatch completion
    /// callback.
    ///
    /// `on_finished` receives the owned outcome once, after the
    /// success/error hook and before the loading flag clears.
    pub fn dispatch_with<F, C>(&mut self, key: K, work: F, on_finished: C) -> Result<(), TrackerError>
    where
        F: Future<Output = Result<R, BoxError>> + Send + 'static,
        C: FnOnce(Result<R, BoxError>) + Send + 'static,
    {
        self.submit(key, work, Some(Box::new(on_finished)), None)
    }

    /// Dispatch every `(key, work)` entry concurrently and report the
    /// success/failure partition once, after the last entry settles.
    ///
    /// The whole group is validated up front: an entry whose key is already
    /// loading rejects with [`TrackerError::AlreadyInFlight`], a key listed
    /// twice with [`TrackerError::DuplicateInGroup`], and in both cases
    /// nothing is dispatched. An empty group invokes `on_complete`
    /// immediately with two empty lists.
    pub fn dispatch_group<I, F, C>(&mut self, entries: I, on_complete: C) -> Result<(), TrackerError>
    where
        I: IntoIterator<Item = (K, F)>,
        F: Future<Output = Result<R, BoxError>> + Send + 'static,
        C: FnOnce(Vec<K>, Vec<K>) + Send + 'static,
    {
        let entries: Vec<(K, F)> = entries.into_iter().collect();

        let mut seen: Vec<K> = Vec::with_capacity(entries.len());
        for (key, _) in &entries {
            if self.is_loading(*key) {
                return Err(TrackerError::AlreadyInFlight(key.label()));
            }
            if seen.contains(key) {
                return Err(TrackerError::DuplicateInGroup(key.label()));
            }
            seen.push(*key);
        }

        if entries.is_empty() {
            on_complete(Vec::new(), Vec::new());
            return Ok(());
        }

        let group = Arc::new(Mutex::new(GroupState {
            succeeded: Vec::new(),
            failed: Vec::new(),
            remaining: entries.len(),
            on_complete: Some(Box::new(on_complete)),
        }));

        for (key, work) in entries {
            self.submit(key, work, None, Some(group.clone()))?;
        }
        Ok(())
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns the settled key, or `None` immediately if nothing is in
    /// flight.
    pub async fn settle_one(&mut self) -> Option<K> {
        if self.pending.is_empty() {
            return None;
        }
        let completion = self.completion_rx.recv().await?;
        let key = completion.key;
        self.apply(completion);
        Some(key)
    }

    /// Apply every completion that is already available, without waiting.
    ///
    /// Returns the number of completions applied. Useful inside a `select!`
    /// loop that multiplexes the tracker with other event sources.
    pub fn settle_ready(&mut self) -> usize {
        let mut settled = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.apply(completion);
            settled += 1;
        }
        settled
    }

    /// Apply completions until no dispatch is in flight.
    pub async fn settle_all(&mut self) {
        while self.settle_one().await.is_some() {}
    }

    fn submit<F>(
        &mut self,
        key: K,
        work: F,
        on_finished: Option<FinishedCallback<R>>,
        group: Option<Arc<Mutex<GroupState<K>>>>,
    ) -> Result<(), TrackerError>
    where
        F: Future<Output = Result<R, BoxError>> + Send + 'static,
    {
        if self.is_loading(key) {
            return Err(TrackerError::AlreadyInFlight(key.label()));
        }

        self.states.insert(key, ActionState::loading());
        self.hooks.on_status(key, true);
        self.pending.insert(key, Pending { on_finished, group });

        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let outcome = work.await;
            // Ignore send errors: the tracker was dropped, nothing to settle
            let _ = tx.send(Completion { key, outcome });
        });
        Ok(())
    }

    /// Apply one completion: hooks, per-dispatch callback, loading flag,
    /// then group accounting.
    fn apply(&mut self, completion: Completion<K, R>) {
        let Completion { key, outcome } = completion;
        let (on_finished, group) = match self.pending.remove(&key) {
            Some(p) => (p.on_finished, p.group),
            None => (None, None),
        };

        let succeeded = outcome.is_ok();
        match &outcome {
            Ok(value) => self.hooks.on_success(key, value),
            Err(error) => {
                self.states.entry(key).or_default().error = Some(error.to_string());
                self.hooks.on_error(key, error.as_ref());
            }
        }

        if let Some(on_finished) = on_finished {
            on_finished(outcome);
        }

        self.states.entry(key).or_default().is_loading = false;
        self.hooks.on_status(key, false);

        if let Some(group) = group {
            let finished = {
                let mut g = group.lock().expect("group accumulator lock poisoned");
                if succeeded {
                    g.succeeded.push(key);
                } else {
                    g.failed.push(key);
                }
                g.remaining -= 1;
                if g.remaining == 0 {
                    g.on_complete.take().map(|on_complete| {
                        (
                            on_complete,
                            std::mem::take(&mut g.succeeded),
                            std::mem::take(&mut g.failed),
                        )
                    })
                } else {
                    None
                }
            };
            // Run the aggregate callback outside the lock, after the last
            // member's own completion has fully applied
            if let Some((on_complete, succeeded, failed)) = finished {
                on_complete(succeeded, failed);
            }
        }
    }
}

impl<K, R, H> Default for ActionTracker<K, R, H>
where
    K: ActionKey,
    R: Send + 'static,
    H: Hooks<K, R> + Default,
{
    fn default() -> Self {
        Self::new(H::default())
    }
}
