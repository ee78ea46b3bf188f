mod support;

use json_adapter::stream::{Decoder, Encoder};
use json_adapter::{
    decode_external, decode_string_external, encode_external, encode_string_external, ErrorKind,
};
use proptest::prelude::*;
use support::{Label, Number, Point};

#[test]
fn external_number_matrix() {
    let mut e = Encoder::new();
    encode_external(&mut e, &Number(123)).unwrap();
    assert_eq!(e.bytes(), b"123");

    let mut d = Decoder::new(b"123");
    assert_eq!(decode_external::<Number, _>(&mut d).unwrap(), Number(123));
}

#[test]
fn external_string_matrix() {
    let mut e = Encoder::new();
    encode_string_external(&mut e, &Label("test".to_string())).unwrap();
    assert_eq!(e.bytes(), br#""test""#);

    let mut d = Decoder::new(br#""test""#);
    assert_eq!(
        decode_string_external::<Label, _>(&mut d).unwrap(),
        Label("test".to_string())
    );
}

#[test]
fn external_struct_and_unsized_matrix() {
    let mut e = Encoder::new();
    encode_external(&mut e, &Point { x: 1, y: -2 }).unwrap();
    assert_eq!(e.bytes(), br#"{"x":1,"y":-2}"#);

    let mut d = Decoder::new(br#"{ "y": 5, "x": 4 }"#);
    assert_eq!(
        decode_external::<Point, _>(&mut d).unwrap(),
        Point { x: 4, y: 5 }
    );

    let mut e = Encoder::new();
    encode_external(&mut e, "plain str").unwrap();
    encode_external(&mut e, &[1u8, 2, 3][..]).unwrap();
    assert_eq!(e.bytes(), br#""plain str"[1,2,3]"#);
}

#[test]
fn external_rejection_matrix() {
    let mut d = Decoder::new(br#""123""#);
    let err = decode_external::<Number, _>(&mut d).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapabilityDecode);
    assert!(err.type_name().unwrap().ends_with("Number"));

    let mut d = Decoder::new(br#"{"x": 1}"#);
    let err = decode_external::<Point, _>(&mut d).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CapabilityDecode);
}

proptest! {
    #[test]
    fn external_roundtrip(x in any::<i32>(), y in any::<i32>(), label in any::<String>()) {
        let point = Point { x, y };
        let label = Label(label);

        let mut e = Encoder::new();
        encode_external(&mut e, &point).unwrap();
        encode_string_external(&mut e, &label).unwrap();

        let mut d = Decoder::new(e.bytes());
        prop_assert_eq!(decode_external::<Point, _>(&mut d).unwrap(), point);
        prop_assert_eq!(decode_string_external::<Label, _>(&mut d).unwrap(), label);
        prop_assert!(d.remaining().is_empty());
    }
}
