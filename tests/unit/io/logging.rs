//! Tests for verbosity mapping and subscriber installation

#[cfg(test)]
mod tests {
    use mdpattern::io::logging::{init_logging, level_for};
    use tracing::Level;

    // Tests verbosity flags map to increasing levels
    // Verified by shifting the level table by one
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0, false), Level::WARN);
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, false), Level::DEBUG);
        assert_eq!(level_for(9, false), Level::TRACE);
    }

    // Tests quiet overrides verbosity
    // Verified by checking verbosity before quiet
    #[test]
    fn test_quiet_wins() {
        assert_eq!(level_for(3, true), Level::ERROR);
    }

    // Tests repeated initialisation keeps the first subscriber
    // Verified by unwrapping the global default result
    #[test]
    fn test_init_twice() {
        init_logging(0, true);
        init_logging(2, false);
    }
}
