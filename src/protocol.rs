//! Two-phase retrieval of variable-length values across the record boundary.
//!
//! Every string or array the collaborator hands out is fetched the same way:
//! a first call with no destination reports the required length, the caller
//! allocates exactly that much, and a second call fills it. The collaborator
//! writes at most `buf.len()` elements and always returns the *current* full
//! length of the value, so a value that grew between the two calls is
//! detected instead of overrunning the buffer.
//!
//! The two calls are not atomic. A concurrent writer may change the value in
//! between; [`ReadPolicy`] decides how many times the exchange is restarted
//! before the truncated result is accepted.

/// How the two-phase exchange reacts to a value that grew mid-read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadPolicy {
    max_attempts: u32,
}

impl ReadPolicy {
    /// Allow up to `max_attempts` query/fill rounds. Values below 1 are raised to 1.
    pub fn new(max_attempts: u32) -> Self {
        ReadPolicy { max_attempts: max_attempts.max(1) }
    }

    /// A single round: whatever fits in the probed buffer is returned.
    pub fn single_shot() -> Self {
        ReadPolicy::new(1)
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for ReadPolicy {
    fn default() -> Self {
        ReadPolicy::new(3)
    }
}

/// Fetch a string with the query-length-then-fill exchange.
///
/// # Arguments
/// * `policy` - Retry policy applied when the value grows between calls.
/// * `call` - Forwarding closure; `None` asks for the length, `Some(buf)` fills.
///
/// # Returns
/// The value, never longer than the length reported by the last query.
pub fn read_string<F>(policy: ReadPolicy, call: F) -> String
where
    F: FnMut(Option<&mut [u8]>) -> usize,
{
    let bytes = exchange(policy, "string", call);
    match String::from_utf8(bytes) {
        Ok(text) => text,
        // A truncated read may split a multi-byte character. Invalid and partial
        // sequences are dropped so the text never outgrows the bytes read.
        Err(err) => err.as_bytes().utf8_chunks().map(|chunk| chunk.valid()).collect(),
    }
}

/// Fetch an array of `T` with the query-count-then-fill exchange.
///
/// A zero count short-circuits to an empty vector without a second call.
/// Slots are pre-filled with `T::default()` (the null handle for handles).
pub fn read_array<T, F>(policy: ReadPolicy, call: F) -> Vec<T>
where
    T: Clone + Default,
    F: FnMut(Option<&mut [T]>) -> usize,
{
    exchange(policy, "array", call)
}

fn exchange<T, F>(policy: ReadPolicy, what: &'static str, mut call: F) -> Vec<T>
where
    T: Clone + Default,
    F: FnMut(Option<&mut [T]>) -> usize,
{
    let mut buffer: Vec<T> = Vec::new();

    for attempt in 1..=policy.max_attempts() {
        let length = call(None);
        if length == 0 {
            return Vec::new();
        }

        buffer.clear();
        buffer.resize(length, T::default());
        let reported = call(Some(&mut buffer));

        if reported <= length {
            buffer.truncate(reported);
            return buffer;
        }

        tracing::debug!(
            attempt,
            probed = length,
            reported,
            kind = what,
            "value grew between length query and fill"
        );
    }

    tracing::warn!(
        attempts = policy.max_attempts(),
        kind = what,
        returned = buffer.len(),
        "value kept growing during two-phase read, returning truncated content"
    );
    buffer
}
