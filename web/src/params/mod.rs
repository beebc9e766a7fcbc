//! This module holds typed parameters for endpoint inputs.
//!
//! Request bodies are decoded into these types before a controller acts on them, so a
//! handler only ever sees input that was well-formed (by type) on the wire.

pub(crate) mod user;
