use parking_lot::Mutex;

const SEQUENCE_BITS: u32 = 12;
const WORKER_BITS: u32 = 10;
const MAX_SEQUENCE: u64 = (1 << SEQUENCE_BITS) - 1;

/// Monotonic 63-bit serial numbers: milliseconds since the epoch, then the
/// worker id, then a per-millisecond sequence.
///
/// When the sequence is exhausted, or the clock steps backwards, the
/// generator borrows from the next millisecond instead of waiting, so
/// values stay strictly increasing within the process.
#[derive(Debug)]
pub struct SerialGenerator {
    worker_id: u64,
    epoch_ms: u64,
    state: Mutex<State>,
}

#[derive(Debug, Default)]
struct State {
    last_ms: u64,
    sequence: u64,
}

impl SerialGenerator {
    pub fn new(worker_id: u16, epoch_ms: u64) -> Self {
        Self {
            worker_id: u64::from(worker_id) & ((1 << WORKER_BITS) - 1),
            epoch_ms,
            state: Mutex::new(State::default()),
        }
    }

    pub fn next(&self) -> i64 {
        let now = self.elapsed_ms();
        let mut state = self.state.lock();

        if now > state.last_ms {
            state.last_ms = now;
            state.sequence = 0;
        } else if state.sequence == MAX_SEQUENCE {
            state.last_ms += 1;
            state.sequence = 0;
        } else {
            state.sequence += 1;
        }

        let id = (state.last_ms << (WORKER_BITS + SEQUENCE_BITS))
            | (self.worker_id << SEQUENCE_BITS)
            | state.sequence;

        // 41 bits of milliseconds last ~69 years past the epoch
        (id & (i64::MAX as u64)) as i64
    }

    fn elapsed_ms(&self) -> u64 {
        let now = u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or_default();
        // Never zero, so every serial number is positive
        now.saturating_sub(self.epoch_ms).max(1)
    }
}
