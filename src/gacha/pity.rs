//! Pity counter state machine.
//!
//! One counter per user, advanced once per draw. Crossing the threshold forces
//! that draw to the top tier, at most once per batch; any top-tier result,
//! natural roll or forced, resets the counter. The tracker knows nothing
//! about probabilities; rank selection belongs to the draw engine.

/// Number of draws without a top-tier result before one is guaranteed.
pub const PITY_THRESHOLD: u32 = 100;

/// Per-user pity counter, always within `[0, PITY_THRESHOLD]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PityState {
    counter: u32,
}

impl PityState {
    /// Creates a state from a persisted counter, clamping into range.
    pub fn new(counter: u32) -> Self {
        Self {
            counter: counter.min(PITY_THRESHOLD),
        }
    }

    /// The current counter value, to be persisted after a batch completes.
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Advances the counter for a draw being performed and reports whether
    /// that draw must be forced to the top tier.
    ///
    /// The increment is evaluated before the draw's outcome is decided, so a
    /// draw's own increment can be the one that crosses the threshold and
    /// forces that same draw. A batch may only force one draw: once
    /// `trigger_used_this_batch` is set the threshold no longer fires, even
    /// if the counter would cross it again within the batch.
    ///
    /// # Arguments
    /// - `trigger_used_this_batch` - Whether an earlier draw in the current
    ///   batch was already forced
    ///
    /// # Returns
    /// - `true` - This draw is pity-forced to the top tier
    /// - `false` - This draw rolls normally
    pub fn advance(&mut self, trigger_used_this_batch: bool) -> bool {
        self.counter = (self.counter + 1).min(PITY_THRESHOLD);
        self.counter >= PITY_THRESHOLD && !trigger_used_this_batch
    }

    /// Applies the reset rule after a draw's resulting rank is known.
    ///
    /// # Arguments
    /// - `top_tier_result` - Whether the draw produced a top-tier power,
    ///   by natural roll or forced trigger
    pub fn settle(&mut self, top_tier_result: bool) {
        if top_tier_result {
            self.counter = 0;
        }
    }
}
