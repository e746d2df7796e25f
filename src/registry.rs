//! Decoder Registration and Selection
//!
//! A [`DecoderRegistry`] owns a set of dialect decoders and picks the one
//! that recognizes a given message. Selection is a linear scan in
//! registration order and the first match wins; order matters because the
//! GliGli and Imogen dialects share a header and only the GliGli decoder
//! inspects the storage format id behind it.
//!
//! The registry is an explicit value rather than a process-wide global so
//! tests (and embedders) can build isolated registries holding any subset
//! of decoders.

use crate::decoders::{GliGliDecoder, ImogenDecoder, SequentialDecoder, SysExDecoder};

/// Ordered collection of dialect decoders
#[derive(Default)]
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn SysExDecoder>>,
}

impl DecoderRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        DecoderRegistry {
            decoders: Vec::new(),
        }
    }

    /// Create a registry holding all known decoders in the canonical
    /// order: original firmware, GliGli, Imogen legacy.
    pub fn with_default_decoders() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(SequentialDecoder));
        registry.register(Box::new(GliGliDecoder));
        registry.register(Box::new(ImogenDecoder));
        registry
    }

    /// Add a decoder under its name. Registering a name twice is a no-op;
    /// the first registration wins.
    pub fn register(&mut self, decoder: Box<dyn SysExDecoder>) {
        if self.get(decoder.name()).is_none() {
            self.decoders.push(decoder);
        }
    }

    /// Look up a decoder by name.
    pub fn get(&self, name: &str) -> Option<&dyn SysExDecoder> {
        self.decoders
            .iter()
            .find(|decoder| decoder.name() == name)
            .map(Box::as_ref)
    }

    /// Return the first registered decoder that identifies the message,
    /// or `None` when no dialect matches.
    pub fn select(&self, msg: &[u8]) -> Option<&dyn SysExDecoder> {
        self.decoders
            .iter()
            .find(|decoder| decoder.identify(msg))
            .map(Box::as_ref)
    }

    /// Number of registered decoders.
    pub fn len(&self) -> usize {
        self.decoders.len()
    }

    /// Whether the registry holds no decoders.
    pub fn is_empty(&self) -> bool {
        self.decoders.is_empty()
    }
}
