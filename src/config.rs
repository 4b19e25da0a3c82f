//! Registry Configuration

/// Capacity limits for an [`EventRegistry`](crate::EventRegistry).
///
/// Both limits default to `None` (unlimited), so listener counts are
/// unbounded out of the box. Embedding applications that route untrusted
/// registrations through a registry can cap growth here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Maximum number of distinct events, `None` for unlimited.
    pub max_events: Option<usize>,

    /// Maximum number of listeners per event, `None` for unlimited.
    pub max_listeners_per_event: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unlimited() {
        let config = RegistryConfig::default();
        assert_eq!(config.max_events, None);
        assert_eq!(config.max_listeners_per_event, None);
    }
}
