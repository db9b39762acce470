use bytes::Bytes;
use serde_json::json;
use timeset::{
    BoolTimeline, BytesTimeline, CharTimeline, DoubleTimeline, Estimator, GrowthPolicy,
    IntTimeline, JsonTimeline, ScalarTimeline, StringTimeline, TimelineConfig, TimesetError,
    ValueKind,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_basic_operations() {
    init_logging();
    let mut timeline = CharTimeline::new();

    // Basic put/get
    timeline.put(4, 'd');
    assert_eq!(timeline.get(4), Some(&'d'));
    assert_eq!(timeline.get_or(5, '-'), '-');

    // Remove
    assert_eq!(timeline.remove(4), Some('d'));
    assert!(timeline.get(4).is_none());
    assert!(timeline.is_empty());
}

#[test]
fn test_attribute_history_lifecycle() {
    init_logging();
    let mut label = StringTimeline::new();

    label.put(10, "draft".to_string());
    label.put(3, "created".to_string());
    label.put(20, "published".to_string());
    label.put(10, "reviewed".to_string());

    assert_eq!(label.len(), 3);
    assert_eq!(
        label.to_vec(),
        vec![
            "created".to_string(),
            "reviewed".to_string(),
            "published".to_string()
        ]
    );

    // Alphabetical order for string extrema
    assert_eq!(
        label.aggregate(&[3, 10, 20], Estimator::Min).unwrap(),
        Some("created".to_string())
    );
    assert_eq!(
        label.aggregate(&[3, 10, 20], Estimator::Max).unwrap(),
        Some("reviewed".to_string())
    );

    label.remove(3);
    assert_eq!(
        label.aggregate(&[3, 10, 20], Estimator::First).unwrap(),
        Some("reviewed".to_string())
    );

    label.clear();
    assert!(label.is_empty());
    assert_eq!(label.aggregate(&[10], Estimator::Last).unwrap(), None);
}

#[test]
fn test_numeric_aggregates() {
    let mut weight = DoubleTimeline::new();
    for (index, value) in [(0, 1.5), (1, -2.0), (2, 8.25), (3, 0.0)] {
        weight.put(index, value);
    }

    assert_eq!(weight.aggregate(&[0, 1, 2, 3], Estimator::Min).unwrap(), Some(-2.0));
    assert_eq!(weight.aggregate(&[0, 1, 2, 3], Estimator::Max).unwrap(), Some(8.25));
    assert_eq!(weight.aggregate(&[3, 0], Estimator::First).unwrap(), Some(1.5));
    assert_eq!(weight.aggregate(&[3, 0], Estimator::Last).unwrap(), Some(0.0));
}

#[test]
fn test_bool_aggregates() {
    let mut active = BoolTimeline::new();
    active.put(1, true);
    active.put(2, false);
    active.put(3, true);

    assert_eq!(active.aggregate(&[1, 2, 3], Estimator::Min).unwrap(), Some(false));
    assert_eq!(active.aggregate(&[1, 3], Estimator::Min).unwrap(), Some(true));
    assert_eq!(active.aggregate(&[1, 2, 3], Estimator::Max).unwrap(), Some(true));
}

#[test]
fn test_bytes_values() {
    let mut blob = BytesTimeline::new();
    blob.put(2, Bytes::from_static(b"beta"));
    blob.put(1, Bytes::from_static(b"alpha"));

    assert_eq!(
        blob.aggregate(&[1, 2], Estimator::Max).unwrap(),
        Some(Bytes::from_static(b"beta"))
    );
    assert_eq!(blob.value_kind(), ValueKind::Bytes);
}

#[test]
fn test_json_values_are_positional_only() {
    let mut meta = JsonTimeline::new();
    meta.put(5, json!({"color": "red"}));
    meta.put(8, json!([1, 2, 3]));

    assert_eq!(
        meta.aggregate(&[8, 5], Estimator::Last).unwrap(),
        Some(json!([1, 2, 3]))
    );
    assert!(!meta.is_supported(Estimator::Min));
    assert_eq!(
        meta.aggregate(&[5], Estimator::Min),
        Err(TimesetError::Unsupported {
            estimator: Estimator::Min,
            kind: ValueKind::Json,
        })
    );
}

#[test]
fn test_average_unsupported_for_every_type() {
    assert!(!CharTimeline::supports(Estimator::Average));
    assert!(!BoolTimeline::supports(Estimator::Average));
    assert!(!IntTimeline::supports(Estimator::Average));
    assert!(!DoubleTimeline::supports(Estimator::Average));
    assert!(!StringTimeline::supports(Estimator::Average));
    assert!(!BytesTimeline::supports(Estimator::Average));
    assert!(!JsonTimeline::supports(Estimator::Average));
    assert!(!ScalarTimeline::<u64>::supports(Estimator::Average));

    let mut count = IntTimeline::new();
    count.put(1, 3);
    assert!(matches!(
        count.aggregate(&[1], Estimator::Average),
        Err(TimesetError::Unsupported { .. })
    ));
}

#[test]
fn test_estimator_from_config_string() {
    let mut count = IntTimeline::new();
    count.put(1, 30);
    count.put(2, 10);

    let estimator: Estimator = "max".parse().unwrap();
    assert_eq!(count.aggregate(&[1, 2], estimator).unwrap(), Some(30));
}

#[test]
fn test_configured_timelines() {
    let config = TimelineConfig::from_json(r#"{ "initial_capacity": 2, "growth": "exact" }"#)
        .expect("valid config");
    let mut timeline = IntTimeline::with_config(&config).expect("valid config");

    for index in 0..6 {
        timeline.put(index, index as i32);
    }
    let stats = timeline.stats();
    assert_eq!(stats.entries, 6);
    assert_eq!(stats.index_capacity, 6);
    assert_eq!(stats.value_capacity, 6);

    let amortized = TimelineConfig::default().with_growth(GrowthPolicy::Amortized);
    let mut other = IntTimeline::with_config(&amortized).expect("valid config");
    for index in 0..6 {
        other.put(index, index as i32);
    }
    assert_eq!(other.to_vec(), timeline.to_vec());
}

#[test]
fn test_oversized_capacity_is_rejected() {
    init_logging();
    let config = TimelineConfig::default().with_initial_capacity(usize::MAX);
    assert!(config.validate().is_err());

    match IntTimeline::with_config(&config) {
        Err(TimesetError::InvalidConfig(msg)) => assert!(msg.contains("initial_capacity")),
        other => panic!("expected InvalidConfig, got {:?}", other),
    }
}

#[test]
fn test_stats_serialize() {
    let mut timeline = CharTimeline::new();
    timeline.put(1, 'a');

    let json = serde_json::to_value(timeline.stats()).unwrap();
    assert_eq!(json["kind"], "char");
    assert_eq!(json["entries"], 1);
}
