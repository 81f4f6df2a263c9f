use serde::{Deserialize, Serialize, Serializer};
use serde_pson::{
    from_pson, from_reader, from_slice, from_str, to_pson, to_string, to_string_pretty,
    to_string_with_state, to_value, to_writer_with_state, Error, GenerationOptions,
    GenerationState, Value,
};

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct User {
    id: u32,
    name: String,
    active: bool,
    tags: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Product {
    sku: String,
    price: f64,
    quantity: u32,
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Order {
    order_id: u32,
    customer: User,
    items: Vec<Product>,
    total: f64,
}

fn as_bytes<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_bytes(bytes)
}

#[derive(Serialize, Deserialize, Debug, PartialEq)]
struct Attachment {
    name: String,
    #[serde(serialize_with = "as_bytes")]
    payload: Vec<u8>,
    #[serde(serialize_with = "as_bytes")]
    digest: Vec<u8>,
}

fn alice() -> User {
    User {
        id: 123,
        name: "Alice".to_string(),
        active: true,
        tags: vec!["admin".to_string(), "developer".to_string()],
    }
}

#[test]
fn test_simple_struct() {
    let user = alice();

    let pson = to_string(&user).unwrap();
    println!("User PSON: {}", pson);

    let user_back: User = from_str(&pson).unwrap();
    assert_eq!(user, user_back);
}

#[test]
fn test_nested_struct() {
    let order = Order {
        order_id: 12345,
        customer: User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["vip".to_string()],
        },
        items: vec![
            Product {
                sku: "WIDGET-001".to_string(),
                price: 29.99,
                quantity: 2,
            },
            Product {
                sku: "GADGET-002".to_string(),
                price: 49.99,
                quantity: 1,
            },
        ],
        total: 109.97,
    };

    let pson = to_string_pretty(&order).unwrap();
    println!("Order PSON:\n{}", pson);

    let order_back: Order = from_str(&pson).unwrap();
    assert_eq!(order, order_back);
}

#[test]
fn test_bytes_fields_become_raw_objects() {
    let attachment = Attachment {
        name: "blob.bin".to_string(),
        payload: vec![0x00, 0xFF, 0xC3, 0x28],
        digest: vec![],
    };

    let pson = to_string(&attachment).unwrap();
    assert_eq!(
        pson,
        r#"{"name":"blob.bin","payload":{"type":"raw","data":[0,255,195,40]},"digest":{"type":"raw","data":[]}}"#
    );

    let attachment_back: Attachment = from_str(&pson).unwrap();
    assert_eq!(attachment, attachment_back);
}

#[test]
fn test_raw_value_survives_roundtrip() {
    let cases: Vec<Vec<u8>> = vec![
        vec![],
        vec![0],
        vec![0xFF],
        vec![0xC3, 0x28],
        b"valid utf-8 stays bytes".to_vec(),
        (0..=255).collect(),
    ];

    for bytes in cases {
        let value = Value::raw(bytes.clone());
        for mut state in [
            GenerationState::compact(),
            GenerationState::pretty(),
            GenerationState::default().with_ascii_only(true),
        ] {
            let text = to_pson(&value, Some(&mut state)).unwrap();
            assert_eq!(from_pson(&text).unwrap(), Value::Raw(bytes.clone()));
        }
    }
}

#[test]
fn test_raw_inside_containers() {
    let mut inner = serde_pson::PsonMap::new();
    inner.insert("blob".to_string(), Value::raw(vec![1, 2]));
    let value = Value::Array(vec![
        Value::Object(inner),
        Value::raw(vec![3]),
        Value::Array(vec![Value::raw(vec![])]),
    ]);

    let text = to_pson(&value, None).unwrap();
    assert_eq!(from_pson(&text).unwrap(), value);
}

#[test]
fn test_from_bytes_keeps_utf8_as_text() {
    let text = to_pson(&Value::from_bytes(b"plain".to_vec()), None).unwrap();
    assert_eq!(text, r#""plain""#);

    let text = to_pson(&Value::from_bytes(vec![0xFE]), None).unwrap();
    assert_eq!(text, r#"{"type":"raw","data":[254]}"#);
}

#[test]
fn test_string_field_accepts_raw_utf8() {
    #[derive(Deserialize)]
    struct Named {
        name: String,
    }

    let named: Named = from_str(r#"{"name":{"type":"raw","data":[104,105]}}"#).unwrap();
    assert_eq!(named.name, "hi");

    let result: Result<Named, _> = from_str(r#"{"name":{"type":"raw","data":[255]}}"#);
    assert!(result.is_err());
}

#[test]
fn test_state_from_config_record() {
    let options: GenerationOptions =
        serde_json::from_str(r#"{"indent":"    ","object_nl":"\n","space":" "}"#).unwrap();
    let mut state = GenerationState::new(options).unwrap();

    let pson = to_string_with_state(&alice(), &mut state).unwrap();
    assert!(pson.starts_with("{\n    \"id\": 123,\n"));
    assert_eq!(from_str::<User>(&pson).unwrap(), alice());
}

#[test]
fn test_invalid_option_strings_are_rejected() {
    let options = GenerationOptions {
        object_nl: "<br>".to_string(),
        ..Default::default()
    };
    assert!(matches!(
        GenerationState::new(options),
        Err(Error::InvalidOption(_))
    ));

    let mut state = GenerationState::default().with_space("=");
    assert!(matches!(
        to_string_with_state(&alice(), &mut state),
        Err(Error::InvalidOption(_))
    ));
}

#[test]
fn test_non_finite_floats() {
    assert!(matches!(to_string(&f64::NAN), Err(Error::Generator(_))));
    assert!(matches!(
        to_string(&vec![1.0, f64::INFINITY]),
        Err(Error::Generator(_))
    ));

    let mut state = GenerationState::default().with_allow_nan(true);
    assert_eq!(
        to_string_with_state(&vec![f64::NEG_INFINITY], &mut state).unwrap(),
        "[-Infinity]"
    );
}

#[test]
fn test_writer_and_reader() {
    let mut buffer = Vec::new();
    to_writer_with_state(&mut buffer, &alice(), &mut GenerationState::pretty()).unwrap();

    let user_back: User = from_reader(buffer.as_slice()).unwrap();
    assert_eq!(user_back, alice());

    let user_back: User = from_slice(&buffer).unwrap();
    assert_eq!(user_back, alice());
}

#[test]
fn test_to_value() {
    let value = to_value(&alice()).unwrap();

    match value {
        Value::Object(obj) => {
            assert_eq!(obj.get("id"), Some(&Value::Integer(123)));
            assert_eq!(obj.get("name"), Some(&Value::String("Alice".to_string())));
            assert_eq!(obj.get("active"), Some(&Value::Bool(true)));

            if let Some(Value::Array(tags)) = obj.get("tags") {
                assert_eq!(tags.len(), 2);
                assert_eq!(tags[0], Value::String("admin".to_string()));
            } else {
                panic!("Expected tags to be an array");
            }
        }
        _ => panic!("Expected object"),
    }
}

#[test]
fn test_empty_collections() {
    let empty_vec: Vec<i32> = vec![];
    assert_roundtrip(&empty_vec);

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Empty {}

    let empty = Empty {};
    assert_roundtrip(&empty);
    assert_eq!(to_string_pretty(&empty).unwrap(), "{}");
}

#[test]
fn test_special_strings() {
    let special_strings = vec![
        "".to_string(),
        "line1\nline2".to_string(),
        "tab\there".to_string(),
        "nul\u{0}byte".to_string(),
        "\"quoted\"".to_string(),
        "back\\slash".to_string(),
        "ünïcödé".to_string(),
        "emoji 😀".to_string(),
        "\u{7f}\u{80}\u{ffff}".to_string(),
    ];

    for s in special_strings {
        println!("Testing string: {:?}", s);
        assert_roundtrip(&s);

        let mut state = GenerationState::default().with_ascii_only(true);
        let pson = to_string_with_state(&s, &mut state).unwrap();
        assert!(pson.is_ascii(), "{}", pson);
        assert_eq!(from_str::<String>(&pson).unwrap(), s);
    }
}

#[test]
fn test_numbers() {
    assert_roundtrip(&0i8);
    assert_roundtrip(&127i8);
    assert_roundtrip(&-128i8);
    assert_roundtrip(&32767i16);
    assert_roundtrip(&-32768i16);
    assert_roundtrip(&2147483647i32);
    assert_roundtrip(&-2147483648i32);
    assert_roundtrip(&9223372036854775807i64);
    assert_roundtrip(&-9223372036854775808i64);

    assert_roundtrip(&255u8);
    assert_roundtrip(&65535u16);
    assert_roundtrip(&4294967295u32);
    assert_roundtrip(&u64::MAX);

    assert_roundtrip(&0.0f32);
    assert_roundtrip(&-2.5f32);
    assert_roundtrip(&0.0f64);
    assert_roundtrip(&4.25f64);
    assert_roundtrip(&1e300f64);
    assert_roundtrip(&5e-324f64);
}

#[test]
fn test_unsigned_above_i64_is_exact() {
    for n in [u64::MAX - 1, (1u64 << 63) + 1, 1u64 << 63] {
        let pson = to_string(&n).unwrap();
        assert_eq!(pson, n.to_string());
        assert_eq!(from_str::<u64>(&pson).unwrap(), n);
    }

    assert_eq!(
        from_str::<u64>("18446744073709551614").unwrap(),
        18446744073709551614
    );
    assert!(from_str::<u64>("18446744073709551616").is_err());
    assert!(from_str::<i64>("9223372036854775808").is_err());
}

#[test]
fn test_floats_stay_floats() {
    let value = Value::Array(vec![Value::Float(1.0), Value::Float(1e20), Value::Integer(1)]);
    let text = to_pson(&value, None).unwrap();
    assert_eq!(text, "[1.0,1e20,1]");
    assert_eq!(from_pson(&text).unwrap(), value);
}

fn assert_roundtrip<T>(original: &T)
where
    T: Serialize + for<'de> Deserialize<'de> + PartialEq + std::fmt::Debug,
{
    let pson = to_string(original).unwrap();
    let deserialized: T = from_str(&pson).unwrap();
    assert_eq!(*original, deserialized);
}
