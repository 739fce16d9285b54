//! Panel controller
//!
//! The protocol/event-dispatch layer: owns the registry, the selector,
//! and the wire decoder. Incoming bytes become events; events either move
//! the selection or adjust the active mode; every state change is written
//! back to the device as the smallest sufficient frame set.

use heapless::Vec;
use talaria_protocol::{DecodeError, Decoder, Direction, EncodeError, HostCommand, PanelEvent, MAX_WRITE_LEN};

use crate::config::ConfigError;
use crate::registry::ModeRegistry;
use crate::selector::Selector;
use crate::traits::{CommandSink, Transport};

/// Errors surfaced by panel write paths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelError<E> {
    /// The transport collaborator failed to write
    Transport(E),
    /// A field could not be encoded (overlong or non-ASCII text)
    Encode(EncodeError),
}

impl<E> From<EncodeError> for PanelError<E> {
    fn from(err: EncodeError) -> Self {
        PanelError::Encode(err)
    }
}

/// Event dispatch and protocol write orchestration for one panel device
#[derive(Debug)]
pub struct Panel {
    registry: ModeRegistry,
    selector: Selector,
    decoder: Decoder,
    /// Timestamp of the previous rotation routed to the active mode;
    /// `None` right after connect or a mode switch, so the first rotation
    /// always takes the fine step.
    last_rotation_ms: Option<u64>,
}

impl Panel {
    /// Create a panel over a built registry
    ///
    /// An empty registry is rejected: the selector invariant
    /// `active < len` cannot hold without modes.
    pub fn new(registry: ModeRegistry) -> Result<Self, ConfigError> {
        if registry.is_empty() {
            return Err(ConfigError::NoModes);
        }
        Ok(Self {
            registry,
            selector: Selector::new(),
            decoder: Decoder::new(),
            last_rotation_ms: None,
        })
    }

    /// The registered modes
    pub fn registry(&self) -> &ModeRegistry {
        &self.registry
    }

    /// Mutable mode access, for the external refresh tick
    pub fn registry_mut(&mut self) -> &mut ModeRegistry {
        &mut self.registry
    }

    /// Current selector state
    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Malformed bytes seen on the inbound stream so far
    pub fn decode_errors(&self) -> u32 {
        self.decoder.error_count()
    }

    /// Initial connection handshake: push the full state to the device
    pub fn connect<T: Transport>(&mut self, transport: &mut T) -> Result<(), PanelError<T::Error>> {
        self.last_rotation_ms = None;
        self.write_full(transport)
    }

    /// Feed one received byte
    ///
    /// `now_ms` must come from a monotonic clock; it drives the
    /// coarse/fine stepping heuristic. Malformed frames are counted and
    /// dropped, the read loop continues (the device-initiated Reset is
    /// the recovery mechanism).
    pub fn handle_byte<T, S>(
        &mut self,
        byte: u8,
        now_ms: u64,
        transport: &mut T,
        sink: &mut S,
    ) -> Result<(), PanelError<T::Error>>
    where
        T: Transport,
        S: CommandSink,
    {
        match self.decoder.feed(byte) {
            Ok(Some(event)) => self.dispatch(event, now_ms, transport, sink),
            Ok(None) => Ok(()),
            Err(DecodeError::UnknownOpcode(_)) => Ok(()),
        }
    }

    /// Feed a chunk of received bytes
    pub fn handle_bytes<T, S>(
        &mut self,
        bytes: &[u8],
        now_ms: u64,
        transport: &mut T,
        sink: &mut S,
    ) -> Result<(), PanelError<T::Error>>
    where
        T: Transport,
        S: CommandSink,
    {
        for &byte in bytes {
            self.handle_byte(byte, now_ms, transport, sink)?;
        }
        Ok(())
    }

    fn dispatch<T, S>(
        &mut self,
        event: PanelEvent,
        now_ms: u64,
        transport: &mut T,
        sink: &mut S,
    ) -> Result<(), PanelError<T::Error>>
    where
        T: Transport,
        S: CommandSink,
    {
        match event {
            PanelEvent::Reset => self.write_full(transport),

            PanelEvent::Pressed => {
                self.selector.press();
                self.write_select_mode(transport)
            }

            PanelEvent::Rotation(dir) => {
                if self.selector.in_select_mode() {
                    self.select_rotation(dir, transport)
                } else {
                    self.value_rotation(dir, now_ms, transport, sink)
                }
            }
        }
    }

    fn select_rotation<T: Transport>(
        &mut self,
        dir: Direction,
        transport: &mut T,
    ) -> Result<(), PanelError<T::Error>> {
        if self.selector.rotate(dir, self.registry.len()) {
            // New active mode: its fields are all new to the display, and
            // the fast-spin clock must not carry over.
            self.last_rotation_ms = None;
            self.write_full(transport)
        } else {
            Ok(())
        }
    }

    fn value_rotation<T, S>(
        &mut self,
        dir: Direction,
        now_ms: u64,
        transport: &mut T,
        sink: &mut S,
    ) -> Result<(), PanelError<T::Error>>
    where
        T: Transport,
        S: CommandSink,
    {
        let elapsed = self
            .last_rotation_ms
            .map_or(u64::MAX, |t| now_ms.saturating_sub(t));
        self.last_rotation_ms = Some(now_ms);

        if let Some(mode) = self.registry.get_mut(self.selector.active_index()) {
            mode.apply_rotation(elapsed, dir);
            mode.send_command(sink);
        }

        self.write_changed(transport)
    }

    /// Full resync: index, count, selector state, then title, body, and
    /// suffix of the active mode, in that fixed order, as one write.
    /// Clears the active mode's change flags.
    pub fn write_full<T: Transport>(
        &mut self,
        transport: &mut T,
    ) -> Result<(), PanelError<T::Error>> {
        let index = self.selector.active_index();
        let mut buf: Vec<u8, MAX_WRITE_LEN> = Vec::new();

        {
            let Some(mode) = self.registry.get(index) else {
                // Unreachable: selector clamps against registry length
                return Ok(());
            };
            HostCommand::ModeIndex(index as u8).encode(&mut buf)?;
            HostCommand::ModeCount(self.registry.len() as u8).encode(&mut buf)?;
            HostCommand::SelectMode(self.selector.in_select_mode()).encode(&mut buf)?;
            HostCommand::Title(mode.title()).encode(&mut buf)?;
            let body = mode.render_body();
            HostCommand::Body(&body).encode(&mut buf)?;
            HostCommand::Suffix(mode.suffix()).encode(&mut buf)?;
        }

        transport.write(&buf).map_err(PanelError::Transport)?;

        if let Some(mode) = self.registry.get_mut(index) {
            mode.clear_changed();
        }
        Ok(())
    }

    /// Delta write: body and/or suffix of the active mode, only when
    /// flagged. Emits nothing when nothing changed; clears each flag
    /// after its field is written.
    pub fn write_changed<T: Transport>(
        &mut self,
        transport: &mut T,
    ) -> Result<(), PanelError<T::Error>> {
        let index = self.selector.active_index();
        let mut buf: Vec<u8, MAX_WRITE_LEN> = Vec::new();

        let (wrote_body, wrote_suffix) = {
            let Some(mode) = self.registry.get(index) else {
                return Ok(());
            };

            let body_changed = mode.body_changed();
            if body_changed {
                let body = mode.render_body();
                HostCommand::Body(&body).encode(&mut buf)?;
            }

            let suffix_changed = mode.suffix_changed();
            if suffix_changed {
                HostCommand::Suffix(mode.suffix()).encode(&mut buf)?;
            }

            (body_changed, suffix_changed)
        };

        if buf.is_empty() {
            return Ok(());
        }

        transport.write(&buf).map_err(PanelError::Transport)?;

        // Flags are cleared only after the transport accepted the bytes
        if let Some(mode) = self.registry.get_mut(index) {
            if wrote_body {
                mode.clear_body_changed();
            }
            if wrote_suffix {
                mode.clear_suffix_changed();
            }
        }
        Ok(())
    }

    /// Two-byte frame carrying only the select-mode flag
    pub fn write_select_mode<T: Transport>(
        &mut self,
        transport: &mut T,
    ) -> Result<(), PanelError<T::Error>> {
        let mut buf: Vec<u8, 2> = Vec::new();
        HostCommand::SelectMode(self.selector.in_select_mode()).encode(&mut buf)?;
        transport.write(&buf).map_err(PanelError::Transport)
    }

    /// Two-byte frame carrying only the active mode index
    pub fn write_mode_index<T: Transport>(
        &mut self,
        transport: &mut T,
    ) -> Result<(), PanelError<T::Error>> {
        let mut buf: Vec<u8, 2> = Vec::new();
        HostCommand::ModeIndex(self.selector.active_index() as u8).encode(&mut buf)?;
        transport.write(&buf).map_err(PanelError::Transport)
    }
}
