//! Tests for log level selection

#[cfg(test)]
mod tests {
    use simplelog::LevelFilter;
    use tilejigsaw::io::logging::level_for;

    // Tests each -v flag raises the level by one step
    // Verified by starting at Info with no flags
    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(u8::MAX), LevelFilter::Trace);
    }

    // Tests levels never decrease as verbosity grows
    // Verified by mapping 2 to Warn
    #[test]
    fn test_level_monotonic() {
        for verbosity in 0..5 {
            assert!(level_for(verbosity) <= level_for(verbosity + 1));
        }
    }
}
