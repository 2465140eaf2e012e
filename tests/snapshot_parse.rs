use depth_chart_wasm::domain::errors::AppError;
use depth_chart_wasm::domain::market_data::BookSnapshot;

#[test]
fn parses_the_wire_document() {
    let snapshot = BookSnapshot::from_json(
        r#"{"buy": [{"price": 99.0, "volume": 10.0}], "sell": [{"price": 101.0, "volume": 8.0}]}"#,
    )
    .unwrap();

    assert_eq!(snapshot.buy.len(), 1);
    assert_eq!(snapshot.buy[0].price.value(), 99.0);
    assert_eq!(snapshot.sell[0].volume.value(), 8.0);
}

#[test]
fn missing_sides_default_to_empty() {
    let snapshot =
        BookSnapshot::from_json(r#"{"buy": [{"price": 99.0, "volume": 10.0}]}"#).unwrap();
    assert!(snapshot.sell.is_empty());

    let empty = BookSnapshot::from_json("{}").unwrap();
    assert!(empty.is_empty());
}

#[test]
fn malformed_document_is_a_validation_error() {
    let err = BookSnapshot::from_json("{not json").unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
    assert!(err.to_string().starts_with("Validation Error"));
}
