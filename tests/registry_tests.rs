use change_collection::{
    change, expect, is_registered, register, registered_config, ChangeCollectionError,
    MatcherConfig,
};
use std::cell::RefCell;

// Registration is process-wide, so the whole lifecycle lives in one test.
#[test]
fn test_registration_lifecycle() {
    assert!(!is_registered());
    assert_eq!(registered_config(), MatcherConfig::default());

    let config = MatcherConfig::new().with_dump_snapshots(false);
    register(config.clone()).unwrap();
    assert!(is_registered());
    assert_eq!(registered_config(), config);

    register(config.clone()).unwrap();
    let err = register(MatcherConfig::new().with_pretty(true)).unwrap_err();
    assert!(matches!(err, ChangeCollectionError::AlreadyRegistered));

    let array = RefCell::new(vec![1]);
    let err = expect(|| {})
        .to(change(|| array.borrow().clone()).to_include([1]).unwrap())
        .unwrap_err();
    let message = err.to_string();
    assert!(message.contains("the original collection should not have included: [1]"));
    assert!(!message.contains("the original collection was:"));
}
