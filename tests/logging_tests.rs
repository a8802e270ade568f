use exam_relay::setup_logging;

#[test]
fn test_logging_setup() {
    // Only test in this binary, so the global subscriber is installed exactly once.
    let result = std::panic::catch_unwind(|| {
        setup_logging();
    });

    assert!(result.is_ok(), "installing the JSON subscriber should not panic");
}
