//! `StrRuntimeBuilder` for creating `StrRuntime` instances.

use skein_ir::CompatMode;
use skein_value::TextInterner;

use super::StrRuntime;

/// Builder for [`StrRuntime`].
///
/// Runtimes built from the same interner share canonical text instances.
#[derive(Debug, Default)]
pub struct StrRuntimeBuilder {
    mode: CompatMode,
    interner: Option<TextInterner>,
}

impl StrRuntimeBuilder {
    /// Create a new builder in the default mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the compatibility mode.
    ///
    /// Controls repr escaping and the default `%f` precision.
    #[must_use]
    pub fn mode(mut self, mode: CompatMode) -> Self {
        self.mode = mode;
        self
    }

    /// Share an existing interner instead of creating a fresh one.
    #[must_use]
    pub fn interner(mut self, interner: TextInterner) -> Self {
        self.interner = Some(interner);
        self
    }

    pub fn build(self) -> StrRuntime {
        tracing::debug!(mode = %self.mode, shared = self.interner.is_some(), "building string runtime");
        StrRuntime {
            interner: self.interner.unwrap_or_default(),
            mode: self.mode,
        }
    }
}
