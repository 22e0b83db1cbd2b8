use json_codec::value::{Map, Value};
use json_codec::{parse, stringify};

#[test]
fn scalars() {
    assert_eq!(stringify(&Value::Null), "null");
    assert_eq!(stringify(&Value::Bool(true)), "true");
    assert_eq!(stringify(&Value::Bool(false)), "false");
    assert_eq!(stringify(&Value::Number(1.0)), "1");
    assert_eq!(stringify(&Value::Number(1.5)), "1.5");
    assert_eq!(stringify(&Value::Number(-12.0)), "-12");
    assert_eq!(stringify(&Value::String("hi".to_string())), r#""hi""#);
}

#[test]
fn non_finite_numbers_become_null() {
    assert_eq!(stringify(&Value::Number(f64::INFINITY)), "null");
    assert_eq!(stringify(&Value::Number(f64::NEG_INFINITY)), "null");
    assert_eq!(stringify(&Value::Number(f64::NAN)), "null");
}

#[test]
fn strings_escape_quotes_and_backslashes_only() {
    assert_eq!(
        stringify(&Value::String(r#"a"b"#.to_string())),
        r#""a\"b""#
    );
    assert_eq!(
        stringify(&Value::String(r"a\b".to_string())),
        r#""a\\b""#
    );
    // Control characters and raw unicode pass through verbatim
    assert_eq!(stringify(&Value::String("a\nb".to_string())), "\"a\nb\"");
    assert_eq!(stringify(&Value::String("héllo".to_string())), "\"héllo\"");
}

#[test]
fn containers() {
    assert_eq!(stringify(&Value::Array(Vec::new())), "[]");
    assert_eq!(stringify(&Value::Object(Map::new())), "{}");

    let array = Value::Array(vec![
        Value::Number(1.0),
        Value::String("two".to_string()),
        Value::Bool(false),
        Value::Null,
    ]);

    assert_eq!(stringify(&array), r#"[1,"two",false,null]"#);
}

#[test]
fn members_render_in_insertion_order() {
    let mut members = Map::new();
    members.insert("b".to_string(), Value::Number(2.0));
    members.insert("a".to_string(), Value::Number(1.0));

    assert_eq!(stringify(&Value::Object(members)), r#"{"b":2,"a":1}"#);
}

#[test]
fn duplicate_keys_render_once_at_first_position() {
    let parsed = parse(r#"{"a":1,"b":2,"a":3}"#).unwrap();

    assert_eq!(stringify(&parsed), r#"{"a":3,"b":2}"#);
}

#[test]
fn round_trip_value() {
    let mut inner = Map::new();
    inner.insert("name".to_string(), Value::String(r#"say "hi""#.to_string()));
    inner.insert("weight".to_string(), Value::Number(-0.5));

    let mut root = Map::new();
    root.insert("z".to_string(), Value::Object(inner));
    root.insert(
        "items".to_string(),
        Value::Array(vec![
            Value::Null,
            Value::Bool(true),
            Value::Number(1.2e12),
            Value::Array(Vec::new()),
        ]),
    );

    let original = Value::Object(root);

    assert_eq!(parse(&stringify(&original)).unwrap(), original);
}

#[test]
fn round_trip_text() {
    let texts = [
        r#"{"a":1,"b":[1,2,3]}"#,
        r#"[{"x":null},true,-0.5]"#,
        r#""plain""#,
        "[]",
        "{}",
    ];

    for text in texts {
        assert_eq!(stringify(&parse(text).unwrap()), text);
    }
}

#[test]
fn serde_serialization_agrees() {
    let parsed = parse(r#"{"a":[1.5,true,null],"b":"x"}"#).unwrap();

    let via_serde: serde_json::Value =
        serde_json::from_str(&stringify(&parsed)).unwrap();

    assert_eq!(via_serde, serde_json::to_value(&parsed).unwrap());
}
