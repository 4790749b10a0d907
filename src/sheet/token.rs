//! Unique token sources for site salts and style keys.

use std::collections::hash_map::RandomState;
use std::collections::VecDeque;
use std::hash::{BuildHasher, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// URL- and class-name-safe alphabet, 64 symbols.
const ALPHABET: &[u8; 64] = b"0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ_-";

/// Sources created so far in this process; folded into each seed.
static SOURCES: AtomicU64 = AtomicU64::new(0);

/// Something that hands out collision-resistant tokens.
pub trait TokenSource {
    /// Produce the next token. Never returns the same token twice.
    fn next_token(&mut self) -> String;
}

/// Short random-looking ids, unique within a source and seeded per source.
#[derive(Debug, Clone)]
pub struct ShortIdSource {
    seed: u64,
    counter: u64,
}

impl ShortIdSource {
    /// Create a source seeded from process randomness and the clock.
    pub fn new() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let mut hasher = RandomState::new().build_hasher();
        hasher.write_u64(nanos);
        hasher.write_u64(SOURCES.fetch_add(1, Ordering::Relaxed));
        Self::with_seed(hasher.finish())
    }

    /// Create a source with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self { seed, counter: 0 }
    }
}

impl Default for ShortIdSource {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenSource for ShortIdSource {
    fn next_token(&mut self) -> String {
        self.counter += 1;
        encode(splitmix64(self.seed.wrapping_add(self.counter)))
    }
}

/// Deterministic tokens for tests: the queued values first, then
/// `{prefix}{n}` for n = 0, 1, 2, ...
#[derive(Debug, Clone, Default)]
pub struct SequenceTokens {
    prefix: String,
    queued: VecDeque<String>,
    next: u64,
}

impl SequenceTokens {
    /// Tokens `t0`, `t1`, ...
    pub fn new() -> Self {
        Self::with_prefix("t")
    }

    /// Tokens `{prefix}0`, `{prefix}1`, ...
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            ..Self::default()
        }
    }

    /// Hand out these tokens before falling back to the numbered sequence.
    pub fn queued(mut self, tokens: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.queued.extend(tokens.into_iter().map(Into::into));
        self
    }
}

impl TokenSource for SequenceTokens {
    fn next_token(&mut self) -> String {
        if let Some(token) = self.queued.pop_front() {
            return token;
        }
        let token = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        token
    }
}

/// Bijective 64-bit mixer, so distinct inputs never collide.
fn splitmix64(mut x: u64) -> u64 {
    x = x.wrapping_add(0x9e37_79b9_7f4a_7c15);
    x = (x ^ (x >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    x = (x ^ (x >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    x ^ (x >> 31)
}

/// Base-64 encode all 64 bits (11 symbols).
fn encode(mut value: u64) -> String {
    let mut out = String::with_capacity(11);
    for _ in 0..11 {
        out.push(ALPHABET[(value & 63) as usize] as char);
        value >>= 6;
    }
    out
}
