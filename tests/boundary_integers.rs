/***************************************************************************************************
 * Integer boundary values at each head-size threshold, both signs.
 **************************************************************************************************/
extern crate cbor_core;

use cbor_core::decoder::decode;
use cbor_core::encoder::encode;
use cbor_core::types::DataItem;

fn round_trips(value: i128) {
    let item = DataItem::Int(value);
    let bytes = encode(&item).unwrap();
    let decoded = decode(&bytes).unwrap();
    assert_eq!(decoded, item, "round-tripping {}", value);
}

#[test]
fn unsigned_side_boundaries() {
    for value in [
        0,
        23,
        24,
        255,
        256,
        65535,
        65536,
        (1i128 << 32) - 1,
        1i128 << 32,
        (1i128 << 64) - 1,
    ] {
        round_trips(value);
    }
}

#[test]
fn negative_side_boundaries() {
    for value in [
        -1,
        -24,
        -25,
        -256,
        -257,
        -65536,
        -65537,
        -(1i128 << 32),
        -(1i128 << 32) - 1,
        -(1i128 << 64),
    ] {
        round_trips(value);
    }
}

#[test]
fn head_minimality_is_independent_of_how_the_value_was_constructed() {
    // Two DataItems with the same integer value must encode identically regardless of
    // provenance: the shortest-head rule is a property of the value, not the call site.
    let a = DataItem::from(1000u32);
    let b = DataItem::Int(1000);
    assert_eq!(encode(&a).unwrap(), encode(&b).unwrap());
}

#[test]
fn cursor_advances_exactly_the_encoded_length_for_every_boundary() {
    for value in [0i128, 23, 24, 255, 256, 65535, 65536, (1i128 << 32) - 1, 1i128 << 32] {
        let bytes = encode(&DataItem::Int(value)).unwrap();
        let mut cursor = 0;
        cbor_core::decoder::decode_at(&bytes, &mut cursor).unwrap();
        assert_eq!(cursor, bytes.len());
    }
}
