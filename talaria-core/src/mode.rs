//! Display mode variants
//!
//! A mode is one adjustable parameter: a title, a unit suffix, and a
//! change-tracked body. The variant kinds form a closed set parameterized
//! by per-instance configuration; all stepping logic lives here, in one
//! place.

use core::fmt::Write as _;

use heapless::String;
use talaria_protocol::Direction;

use crate::config::{ConfigError, IntParams, MAX_LABEL_LEN};
use crate::sim::CommandSpec;
use crate::tracked::Tracked;
use crate::traits::CommandSink;

/// Maximum rendered body length (`i32::MIN` in decimal is 11 bytes)
pub const MAX_BODY_LEN: usize = 11;

/// A mode's current body value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    Int(i32),
    Bool(bool),
}

/// Variant kind and its per-instance parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum ModeKind {
    /// Bounded integer with a coarse/fine step schedule
    Integer(IntParams),
    /// Toggles on every rotation detent
    Boolean,
}

/// One adjustable parameter with its display fields and simulator binding
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayMode {
    title: Tracked<String<MAX_LABEL_LEN>>,
    suffix: Tracked<String<MAX_LABEL_LEN>>,
    body: Tracked<Value>,
    kind: ModeKind,
    command: CommandSpec,
}

impl DisplayMode {
    /// Create a bounded integer mode
    ///
    /// The initial body is 0 clamped into `[min, max]`. Fails fast on an
    /// inverted range, a non-positive step, or an overlong label.
    pub fn integer(
        title: &str,
        suffix: &str,
        params: IntParams,
        command: CommandSpec,
    ) -> Result<Self, ConfigError> {
        params.validate()?;
        Ok(Self {
            title: Tracked::new(label(title)?),
            suffix: Tracked::new(label(suffix)?),
            body: Tracked::new(Value::Int(0.clamp(params.min, params.max))),
            kind: ModeKind::Integer(params),
            command,
        })
    }

    /// Create a percent mode: `[0, 100]`, suffix `%`, fine 1 / coarse 10
    pub fn percent(title: &str, command: CommandSpec) -> Result<Self, ConfigError> {
        Self::integer(title, "%", IntParams::percent(), command)
    }

    /// Create a boolean mode, starting at `false`
    pub fn boolean(title: &str, command: CommandSpec) -> Result<Self, ConfigError> {
        Ok(Self {
            title: Tracked::new(label(title)?),
            suffix: Tracked::new(String::new()),
            body: Tracked::new(Value::Bool(false)),
            kind: ModeKind::Boolean,
            command,
        })
    }

    /// Mode title, fixed at construction
    pub fn title(&self) -> &str {
        self.title.get()
    }

    /// Unit suffix, fixed at construction
    pub fn suffix(&self) -> &str {
        self.suffix.get()
    }

    /// Current body value
    pub fn value(&self) -> Value {
        *self.body.get()
    }

    /// Canonical text form of the body: decimal integers, `true`/`false`
    pub fn render_body(&self) -> String<MAX_BODY_LEN> {
        let mut out = String::new();
        // Infallible: MAX_BODY_LEN covers the longest decimal i32
        let _ = match self.body.get() {
            Value::Int(v) => write!(out, "{}", v),
            Value::Bool(b) => write!(out, "{}", b),
        };
        out
    }

    /// Apply one encoder detent
    ///
    /// `elapsed_ms` is the time since the previous rotation routed to
    /// this mode; under [`FAST_SPIN_MS`](crate::config::FAST_SPIN_MS) the
    /// coarse step applies. The body never leaves the variant's bounds.
    pub fn apply_rotation(&mut self, elapsed_ms: u64, dir: Direction) {
        let next = match (self.kind, *self.body.get()) {
            (ModeKind::Integer(params), Value::Int(value)) => {
                Value::Int(step_int(&params, value, elapsed_ms, dir))
            }
            (ModeKind::Boolean, Value::Bool(value)) => Value::Bool(!value),
            // Kind and body variant are paired at construction
            (_, value) => value,
        };
        self.body.set(next);
    }

    /// Push an authoritative value from the external source (tracked)
    ///
    /// Integer values are clamped to the mode's bounds; cycling never
    /// applies to authoritative refreshes. A value of the wrong variant
    /// is ignored.
    pub fn refresh(&mut self, value: Value) {
        if let Some(value) = self.admit(value) {
            self.body.set(value);
        }
    }

    /// Push an authoritative value without raising the change flag
    ///
    /// For hosts whose echo-suppression policy keeps the device update
    /// out of band.
    pub fn refresh_raw(&mut self, value: Value) {
        if let Some(value) = self.admit(value) {
            self.body.set_raw(value);
        }
    }

    /// Translate the current value and hand it to the simulator sink
    pub fn send_command<S: CommandSink>(&self, sink: &mut S) {
        let value = match *self.body.get() {
            Value::Int(v) => v,
            Value::Bool(b) => b as i32,
        };
        sink.send(self.command.event, self.command.scale.apply(value));
    }

    /// Whether the body changed since its last transmission
    pub fn body_changed(&self) -> bool {
        self.body.is_changed()
    }

    /// Whether the suffix changed since its last transmission
    pub fn suffix_changed(&self) -> bool {
        self.suffix.is_changed()
    }

    /// Clear all change flags after a transmission covering every field
    pub(crate) fn clear_changed(&mut self) {
        self.title.take_changed();
        self.suffix.take_changed();
        self.body.take_changed();
    }

    pub(crate) fn clear_body_changed(&mut self) {
        self.body.take_changed();
    }

    pub(crate) fn clear_suffix_changed(&mut self) {
        self.suffix.take_changed();
    }

    fn admit(&self, value: Value) -> Option<Value> {
        match (self.kind, value) {
            (ModeKind::Integer(params), Value::Int(v)) => {
                Some(Value::Int(v.clamp(params.min, params.max)))
            }
            (ModeKind::Boolean, Value::Bool(b)) => Some(Value::Bool(b)),
            _ => None,
        }
    }
}

/// One integer step: coarse steps snap to the step grid, fine steps move
/// by one, then the bounds policy applies.
///
/// Computed in `i64`: bounds may span the full `i32` range, so the
/// stepped value can exceed it by one step before the policy pulls it
/// back in.
fn step_int(params: &IntParams, value: i32, elapsed_ms: u64, dir: Direction) -> i32 {
    let step = i64::from(params.rule.step_for(elapsed_ms));
    let delta = i64::from(dir.delta());
    let value = i64::from(value);

    let stepped = if step == 1 {
        value + delta
    } else {
        // Floor modulo so the snap lands on the next grid multiple in the
        // rotation direction for negative values too (47 -> 50 going
        // right at step 10, -47 -> -40).
        value - value.rem_euclid(step) + step * delta
    };

    if stepped < i64::from(params.min) {
        if params.cycling {
            params.max
        } else {
            params.min
        }
    } else if stepped > i64::from(params.max) {
        if params.cycling {
            params.min
        } else {
            params.max
        }
    } else {
        stepped as i32
    }
}

fn label(text: &str) -> Result<String<MAX_LABEL_LEN>, ConfigError> {
    let mut out = String::new();
    out.push_str(text).map_err(|_| ConfigError::LabelTooLong)?;
    Ok(out)
}
