//! Adaptation options.

/// The default maximum array depth, the maximum number of array dimensions supported by the server.
pub const DEFAULT_MAX_ARRAY_DEPTH: usize = 6;

/// Adaptation options.
///
/// The default values are:
/// - `max_array_depth`: [`DEFAULT_MAX_ARRAY_DEPTH`]
/// - `warn_unknown_array_oid`: `true`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdaptOptions {
    max_array_depth: usize,
    warn_unknown_array_oid: bool,
}

impl Default for AdaptOptions {
    fn default() -> Self {
        Self {
            max_array_depth: DEFAULT_MAX_ARRAY_DEPTH,
            warn_unknown_array_oid: true,
        }
    }
}

impl AdaptOptions {
    /// Return the maximum array depth.
    ///
    /// Arrays nested deeper are rejected when encoding and decoding.
    #[must_use]
    pub fn max_array_depth(&self) -> usize {
        self.max_array_depth
    }

    /// Set the maximum array depth.
    pub fn set_max_array_depth(&mut self, max_array_depth: usize) -> &mut Self {
        self.max_array_depth = max_array_depth;
        self
    }

    /// Set the maximum array depth.
    #[must_use]
    pub fn with_max_array_depth(mut self, max_array_depth: usize) -> Self {
        self.max_array_depth = max_array_depth;
        self
    }

    /// Return the warn unknown array oid setting.
    ///
    /// If enabled, a warning is logged when the array type of an element type is not in the catalog and `text[]` is used instead.
    #[must_use]
    pub fn warn_unknown_array_oid(&self) -> bool {
        self.warn_unknown_array_oid
    }

    /// Set whether or not to warn about unknown array oids.
    pub fn set_warn_unknown_array_oid(&mut self, warn_unknown_array_oid: bool) -> &mut Self {
        self.warn_unknown_array_oid = warn_unknown_array_oid;
        self
    }

    /// Set whether or not to warn about unknown array oids.
    #[must_use]
    pub fn with_warn_unknown_array_oid(mut self, warn_unknown_array_oid: bool) -> Self {
        self.warn_unknown_array_oid = warn_unknown_array_oid;
        self
    }
}
