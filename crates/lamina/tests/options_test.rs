use lamina::{Error, InitOrderOptions, MissingOrder};
use serde_json::json;

#[test]
fn options_default_to_aligned_with_missing_orders_last() {
    let opts = InitOrderOptions::default();
    assert!(opts.align_alternating_layers);
    assert_eq!(opts.missing_order, MissingOrder::Last);
    assert_eq!(InitOrderOptions::from_json_str("{}").unwrap(), opts);
}

#[test]
fn options_parse_unit_and_valued_missing_order() {
    let opts = InitOrderOptions::from_json_str(r#"{"missing_order": "first"}"#).unwrap();
    assert_eq!(opts.missing_order, MissingOrder::First);
    assert!(opts.align_alternating_layers);

    let opts = InitOrderOptions::from_json_value(json!({
        "align_alternating_layers": false,
        "missing_order": { "value": 3 }
    }))
    .unwrap();
    assert_eq!(
        opts,
        InitOrderOptions {
            align_alternating_layers: false,
            missing_order: MissingOrder::Value(3),
        }
    );
}

#[test]
fn options_serialize_back_to_the_same_shape() {
    let opts = InitOrderOptions {
        align_alternating_layers: true,
        missing_order: MissingOrder::Value(2),
    };
    assert_eq!(
        serde_json::to_value(opts).unwrap(),
        json!({
            "align_alternating_layers": true,
            "missing_order": { "value": 2 }
        })
    );
}

#[test]
fn options_reject_unknown_fields_and_bad_values() {
    let err = InitOrderOptions::from_json_value(json!({ "align": true })).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions { .. }));

    let err = InitOrderOptions::from_json_str(r#"{"missing_order": "middle"}"#).unwrap_err();
    assert!(matches!(err, Error::InvalidOptions { .. }));

    let err = InitOrderOptions::from_json_str("{").unwrap_err();
    assert!(err.to_string().starts_with("Invalid init-order options: "));
}
