// Step history for replaying an algorithm run

use crate::algorithms::StepObserver;
use rustc_hash::FxHashMap;
use std::fmt;

/// Rough fixed cost of one recorded step, on top of the array copy
const STEP_OVERHEAD: usize = 48;

/// What happened at a step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    /// Initial state, before any work
    Start,
    /// Free-form phase marker (e.g. "Sorting the array first")
    Note(String),
    Compare { left: usize, right: usize },
    Swap { a: usize, b: usize },
    Inspect { index: usize },
    Bisect { left: usize, mid: usize, right: usize },
    Settle { index: usize },
}

impl StepEvent {
    /// Indices this event touches, for highlighting
    pub fn indices(&self) -> Vec<usize> {
        match self {
            StepEvent::Start | StepEvent::Note(_) => Vec::new(),
            StepEvent::Compare { left, right } => vec![*left, *right],
            StepEvent::Swap { a, b } => vec![*a, *b],
            StepEvent::Inspect { index } | StepEvent::Settle { index } => vec![*index],
            StepEvent::Bisect { mid, .. } => vec![*mid],
        }
    }
}

impl fmt::Display for StepEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepEvent::Start => write!(f, "start"),
            StepEvent::Note(text) => write!(f, "{}", text),
            StepEvent::Compare { left, right } => write!(f, "compare [{}] and [{}]", left, right),
            StepEvent::Swap { a, b } => write!(f, "swap [{}] and [{}]", a, b),
            StepEvent::Inspect { index } => write!(f, "inspect [{}]", index),
            StepEvent::Bisect { left, mid, right } => {
                write!(f, "window [{}..={}], probe [{}]", left, right, mid)
            }
            StepEvent::Settle { index } => write!(f, "[{}] is final", index),
        }
    }
}

/// One recorded step: the event plus the array as it looks afterwards
#[derive(Debug, Clone)]
pub struct Step {
    pub event: StepEvent,
    pub state: Vec<i32>,
    /// Binary search window active at this step, if any
    pub window: Option<(usize, usize)>,
}

impl Step {
    /// Estimate the memory usage of this step in bytes
    pub fn estimated_size(&self) -> usize {
        let note = match &self.event {
            StepEvent::Note(text) => text.len(),
            _ => 0,
        };
        self.state.len() * std::mem::size_of::<i32>() + note + STEP_OVERHEAD
    }
}

/// Operation counters, kept even after the history is truncated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TraceStats {
    pub comparisons: usize,
    pub swaps: usize,
    pub inspections: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceError {
    /// Recording another step would exceed the memory budget
    LimitExceeded { current: usize, limit: usize },
}

impl fmt::Display for TraceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TraceError::LimitExceeded { current, limit } => write!(
                f,
                "Trace memory limit exceeded: {} bytes used, limit is {}",
                current, limit
            ),
        }
    }
}

impl std::error::Error for TraceError {}

/// Records every step of an algorithm run against a shadow copy of the array.
///
/// Swaps reported by the algorithm are replayed on the shadow copy, so each
/// [`Step`] holds the array exactly as the algorithm saw it at that point.
/// Once the memory budget is hit, further steps are dropped but counters and
/// the shadow copy stay accurate.
#[derive(Debug)]
pub struct Trace {
    initial: Vec<i32>,
    current: Vec<i32>,
    steps: Vec<Step>,
    window: Option<(usize, usize)>,
    stats: TraceStats,
    max_memory: usize,
    current_memory: usize,
    truncated: Option<TraceError>,
}

impl Trace {
    pub fn new(initial: &[i32], max_memory: usize) -> Self {
        let mut trace = Trace {
            initial: initial.to_vec(),
            current: initial.to_vec(),
            steps: Vec::new(),
            window: None,
            stats: TraceStats::default(),
            max_memory,
            current_memory: 0,
            truncated: None,
        };
        trace.record(StepEvent::Start);
        trace
    }

    /// Add a step to history
    pub fn push(&mut self, step: Step) -> Result<(), TraceError> {
        let step_size = step.estimated_size();

        if self.current_memory + step_size > self.max_memory {
            return Err(TraceError::LimitExceeded {
                current: self.current_memory,
                limit: self.max_memory,
            });
        }

        self.current_memory += step_size;
        self.steps.push(step);
        Ok(())
    }

    /// Record a phase marker
    pub fn note(&mut self, text: impl Into<String>) {
        self.record(StepEvent::Note(text.into()));
    }

    fn record(&mut self, event: StepEvent) {
        if self.truncated.is_some() {
            return;
        }
        let step = Step {
            event,
            state: self.current.clone(),
            window: self.window,
        };
        if let Err(e) = self.push(step) {
            self.truncated = Some(e);
        }
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn stats(&self) -> TraceStats {
        self.stats
    }

    pub fn initial(&self) -> &[i32] {
        &self.initial
    }

    /// The array after every replayed swap, including unrecorded ones
    pub fn current(&self) -> &[i32] {
        &self.current
    }

    pub fn truncation(&self) -> Option<&TraceError> {
        self.truncated.as_ref()
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }

    /// True if the replayed array holds the same values as the initial one
    pub fn preserves_multiset(&self) -> bool {
        multiset(&self.initial) == multiset(&self.current)
    }
}

impl StepObserver for Trace {
    fn compare(&mut self, left: usize, right: usize) {
        self.stats.comparisons += 1;
        self.record(StepEvent::Compare { left, right });
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.stats.swaps += 1;
        self.current.swap(a, b);
        self.record(StepEvent::Swap { a, b });
    }

    fn inspect(&mut self, index: usize) {
        self.stats.inspections += 1;
        self.record(StepEvent::Inspect { index });
    }

    fn bisect(&mut self, left: usize, mid: usize, right: usize) {
        self.stats.inspections += 1;
        self.window = Some((left, right));
        self.record(StepEvent::Bisect { left, mid, right });
    }

    fn settle(&mut self, index: usize) {
        self.record(StepEvent::Settle { index });
    }
}

/// Count occurrences of each value
pub fn multiset(seq: &[i32]) -> FxHashMap<i32, usize> {
    let mut counts = FxHashMap::default();
    for &value in seq {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
}
