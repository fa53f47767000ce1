use serde::{Deserialize, Serialize};

/// How values reach the rendered SQL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderMode {
    /// Each value becomes a `?` placeholder and is pushed onto the argument list.
    #[default]
    Parameterized,
    /// Values are written inline using their literal form, text unquoted and
    /// unescaped. Untrusted input rendered this way is an SQL injection.
    InsecureLiteral,
}

impl RenderMode {
    pub fn is_parameterized(self) -> bool {
        matches!(self, Self::Parameterized)
    }
}

/// `true` is [`RenderMode::Parameterized`], `false` is [`RenderMode::InsecureLiteral`].
impl From<bool> for RenderMode {
    fn from(parameterized: bool) -> Self {
        if parameterized {
            Self::Parameterized
        } else {
            Self::InsecureLiteral
        }
    }
}

/// Output shape of [`render_insert`](crate::StatementRequest::render_insert).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsertShape {
    /// `INSERT INTO t (c1, c2, key) VALUES (?, ?, ?)`.
    #[default]
    Values,
    /// `INSERT INTO t (c1,c2) WHERE key = ?`, or `(c1 = v1, c2 = v2)` in literal
    /// mode. Not executable SQL; kept for byte-compatible output with older
    /// callers.
    Legacy,
}

/// Rendering configuration carried by a [`StatementRequest`](crate::StatementRequest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// INSERT output shape.
    pub insert_shape: InsertShape,
    /// Truncate SQL in log events (in bytes). `None` means no truncation.
    pub max_logged_sql: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insert_shape: InsertShape::Values,
            max_logged_sql: Some(200),
        }
    }
}

impl RenderOptions {
    /// Create options with defaults (`VALUES` inserts, log truncation at 200 bytes).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the INSERT output shape.
    pub fn with_insert_shape(mut self, shape: InsertShape) -> Self {
        self.insert_shape = shape;
        self
    }

    /// Shorthand for `with_insert_shape(InsertShape::Legacy)`.
    pub fn legacy_insert(self) -> Self {
        self.with_insert_shape(InsertShape::Legacy)
    }

    /// Set maximum SQL length to log.
    pub fn with_max_logged_sql(mut self, len: usize) -> Self {
        self.max_logged_sql = Some(len);
        self
    }

    /// Disable SQL truncation in log events.
    pub fn no_log_truncation(mut self) -> Self {
        self.max_logged_sql = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_maps_to_mode() {
        assert_eq!(RenderMode::from(true), RenderMode::Parameterized);
        assert_eq!(RenderMode::from(false), RenderMode::InsecureLiteral);
        assert!(RenderMode::default().is_parameterized());
    }

    #[test]
    fn options_builder() {
        let opts = RenderOptions::new().legacy_insert().no_log_truncation();
        assert_eq!(opts.insert_shape, InsertShape::Legacy);
        assert_eq!(opts.max_logged_sql, None);

        let opts = RenderOptions::new().with_max_logged_sql(64);
        assert_eq!(opts.insert_shape, InsertShape::Values);
        assert_eq!(opts.max_logged_sql, Some(64));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let opts: RenderOptions = serde_json::from_str(r#"{"insert_shape": "legacy"}"#).unwrap();
        assert_eq!(opts.insert_shape, InsertShape::Legacy);
        assert_eq!(opts.max_logged_sql, Some(200));

        let opts: RenderOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, RenderOptions::default());
    }
}
