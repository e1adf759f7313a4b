/***************************************************************************************************
 * Copyright (c) 2021, 2022 Qualcomm Innovation Center, Inc. All rights reserved.
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy of this software
 * and associated documentation files (the “Software”), to deal in the Software without
 * restriction, including without limitation the rights to use, copy, modify, merge, publish,
 * distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the
 * Software is furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all copies or
 * substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING
 * BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
 * NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM,
 * DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
 **************************************************************************************************/
/***************************************************************************************************
 * cbor_core decoder
 *
 * Major-type dispatch over a byte slice, recursing into container payloads and building an owned
 * `DataItem` tree.
 **************************************************************************************************/
use alloc::vec::Vec;

use half::f16;

use crate::constants::*;
use crate::error::{CBORError, Result};
use crate::head::read_head;
use crate::value::{DataItem, FloatWidth, SimpleValue};

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

/// Decodes a single CBOR item from the front of `bytes`, ignoring any trailing bytes.
#[cfg_attr(feature = "trace", trace)]
pub fn decode(bytes: &[u8]) -> Result<DataItem> {
    let mut cursor = 0;
    decode_at(bytes, &mut cursor)
}

/// Decodes a single CBOR item starting at `*cursor`, advancing `*cursor` to one byte past the end
/// of the item on success. On failure `*cursor`'s value is unspecified, matching the spec's
/// failure semantics (§4.2): callers should discard the cursor rather than resume from it.
#[cfg_attr(feature = "trace", trace)]
pub fn decode_at(bytes: &[u8], cursor: &mut usize) -> Result<DataItem> {
    let head = read_head(bytes, cursor)?;

    // ai=31 (indefinite-length / break) is a legal head bit pattern for every major type, but
    // this version parses no indefinite-length construct, so every major type rejects it here
    // rather than only the ones that happen to dispatch through decode_simple_or_float.
    if head.ai == PAYLOAD_INDEFINITE {
        return Err(CBORError::Unsupported);
    }

    match head.major_type {
        0 => Ok(DataItem::Int(head.argument as i128)),
        1 => Ok(DataItem::Int(-1 - head.argument as i128)),
        2 => decode_bytes(bytes, cursor, head.argument).map(DataItem::Bytes),
        3 => decode_bytes(bytes, cursor, head.argument).map(DataItem::Text),
        4 => decode_array(bytes, cursor, head.argument),
        5 => decode_map(bytes, cursor, head.argument),
        6 => {
            let child = decode_at(bytes, cursor)?;
            Ok(DataItem::tag(head.argument, child))
        }
        7 => decode_simple_or_float(head.ai, head.argument),
        _ => unreachable!("major type is three bits and every value 0..=7 is handled above"),
    }
}

fn decode_bytes(bytes: &[u8], cursor: &mut usize, len: u64) -> Result<Vec<u8>> {
    let len = usize::try_from(len).map_err(|_| CBORError::Malformed)?;
    let start = *cursor;
    let end = start.checked_add(len).ok_or(CBORError::Malformed)?;
    let slice = bytes.get(start..end).ok_or(CBORError::Malformed)?;
    *cursor = end;
    Ok(slice.to_vec())
}

fn decode_array(bytes: &[u8], cursor: &mut usize, count: u64) -> Result<DataItem> {
    let count = usize::try_from(count).map_err(|_| CBORError::Malformed)?;
    let mut items = Vec::new();
    items
        .try_reserve(count)
        .map_err(|_| CBORError::OutOfMemory)?;
    for _ in 0..count {
        items.push(decode_at(bytes, cursor)?);
    }
    Ok(DataItem::Array(items))
}

fn decode_map(bytes: &[u8], cursor: &mut usize, count: u64) -> Result<DataItem> {
    let count = usize::try_from(count).map_err(|_| CBORError::Malformed)?;
    let mut pairs = Vec::new();
    pairs
        .try_reserve(count)
        .map_err(|_| CBORError::OutOfMemory)?;
    for _ in 0..count {
        let key = decode_at(bytes, cursor)?;
        let value = decode_at(bytes, cursor)?;
        pairs.push((key, value));
    }
    Ok(DataItem::Map(pairs))
}

fn decode_simple_or_float(ai: u8, argument: u64) -> Result<DataItem> {
    match ai {
        SIMPLE_FALSE => Ok(DataItem::Simple(SimpleValue::False)),
        SIMPLE_TRUE => Ok(DataItem::Simple(SimpleValue::True)),
        SIMPLE_NULL => Ok(DataItem::Simple(SimpleValue::Null)),
        SIMPLE_UNDEFINED => Ok(DataItem::Simple(SimpleValue::Undefined)),
        PAYLOAD_ONE_BYTE => {
            // One-byte simple values below 32 collide with the inline range (ai 0..=23) and
            // 24..=31 reserved/undefined-below-32 span; both are structurally impossible input.
            if argument < 32 {
                Err(CBORError::Malformed)
            } else {
                Err(CBORError::Unsupported)
            }
        }
        SIMPLE_FLOAT16 => Ok(DataItem::Float(FloatWidth::Half(f16::from_bits(
            argument as u16,
        )))),
        SIMPLE_FLOAT32 => Ok(DataItem::Float(FloatWidth::Single(f32::from_bits(
            argument as u32,
        )))),
        SIMPLE_FLOAT64 => Ok(DataItem::Float(FloatWidth::Double(f64::from_bits(
            argument,
        )))),
        PAYLOAD_INDEFINITE => Err(CBORError::Unsupported),
        _ => Err(CBORError::Malformed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_small_unsigned_int() {
        assert_eq!(decode(&[0x17]).unwrap(), DataItem::Int(23));
    }

    #[test]
    fn decodes_maximum_unsigned_int_via_i128() {
        let bytes = [0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(decode(&bytes).unwrap(), DataItem::Int(u64::MAX as i128));
    }

    #[test]
    fn decodes_minimum_negative_int_below_i64_range() {
        let bytes = [0x3b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff];
        assert_eq!(decode(&bytes).unwrap(), DataItem::Int(-(1i128 << 64)));
    }

    #[test]
    fn decodes_empty_and_nonempty_byte_string() {
        assert_eq!(decode(&[0x40]).unwrap(), DataItem::Bytes(vec![]));
        let bytes = [0x45, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e];
        assert_eq!(
            decode(&bytes).unwrap(),
            DataItem::Bytes(vec![10, 11, 12, 13, 14])
        );
    }

    #[test]
    fn decodes_text_without_validating_utf8() {
        let bytes = [0x64, 0x49, 0x45, 0x54, 0x46];
        assert_eq!(
            decode(&bytes).unwrap(),
            DataItem::Text(b"IETF".to_vec())
        );

        let invalid_utf8 = [0x61, 0xff];
        let item = decode(&invalid_utf8).unwrap();
        assert_eq!(item, DataItem::Text(vec![0xff]));
        assert_eq!(item.as_str(), None);
    }

    #[test]
    fn decodes_nested_array() {
        let bytes = [0x83, 0x01, 0x82, 0x02, 0x03, 0x82, 0x04, 0x05];
        let expected = DataItem::Array(vec![
            DataItem::Int(1),
            DataItem::Array(vec![DataItem::Int(2), DataItem::Int(3)]),
            DataItem::Array(vec![DataItem::Int(4), DataItem::Int(5)]),
        ]);
        assert_eq!(decode(&bytes).unwrap(), expected);
    }

    #[test]
    fn decodes_map_preserving_pair_order() {
        let bytes = [0xa2, 0x61, 0x61, 0x01, 0x61, 0x62, 0x82, 0x02, 0x03];
        let expected = DataItem::Map(vec![
            (DataItem::from("a"), DataItem::Int(1)),
            (
                DataItem::from("b"),
                DataItem::Array(vec![DataItem::Int(2), DataItem::Int(3)]),
            ),
        ]);
        assert_eq!(decode(&bytes).unwrap(), expected);
    }

    #[test]
    fn decodes_tag_preserving_tag_number() {
        let bytes = [0xc1, 0x1a, 0x51, 0x4b, 0x67, 0xb0];
        assert_eq!(
            decode(&bytes).unwrap(),
            DataItem::tag(1, DataItem::Int(1363896240))
        );
    }

    #[test]
    fn decodes_all_three_float_widths() {
        assert_eq!(
            decode(&[0xf9, 0x3c, 0x00]).unwrap(),
            DataItem::Float(FloatWidth::Half(f16::from_f32(1.0)))
        );
        assert_eq!(
            decode(&[0xfa, 0x47, 0xc3, 0x50, 0x00]).unwrap(),
            DataItem::Float(FloatWidth::Single(100000.0))
        );
        assert_eq!(
            decode(&[0xfb, 0x3f, 0xf1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9a]).unwrap(),
            DataItem::Float(FloatWidth::Double(1.1))
        );
    }

    #[test]
    fn decodes_all_four_simple_values() {
        assert_eq!(decode(&[0xf4]).unwrap(), DataItem::Simple(SimpleValue::False));
        assert_eq!(decode(&[0xf5]).unwrap(), DataItem::Simple(SimpleValue::True));
        assert_eq!(decode(&[0xf6]).unwrap(), DataItem::Simple(SimpleValue::Null));
        assert_eq!(
            decode(&[0xf7]).unwrap(),
            DataItem::Simple(SimpleValue::Undefined)
        );
    }

    #[test]
    fn reserved_ai_rejected_regardless_of_major_type() {
        for byte in [0xfc_u8, 0xfd, 0xfe] {
            let err = decode(&[byte]).unwrap_err();
            assert!(matches!(err, CBORError::ReservedAdditionalInformation));
        }
    }

    #[test]
    fn one_byte_simple_below_32_is_malformed() {
        let err = decode(&[0xf8, 0x1f]).unwrap_err();
        assert!(matches!(err, CBORError::Malformed));
    }

    #[test]
    fn one_byte_simple_at_or_above_32_is_unsupported() {
        let err = decode(&[0xf8, 0x20]).unwrap_err();
        assert!(matches!(err, CBORError::Unsupported));
    }

    #[test]
    fn break_stop_code_is_unsupported() {
        let err = decode(&[0xff]).unwrap_err();
        assert!(matches!(err, CBORError::Unsupported));
    }

    #[test]
    fn truncated_container_payload_is_malformed() {
        let err = decode(&[0x45, 0x0a, 0x0b]).unwrap_err();
        assert!(matches!(err, CBORError::Malformed));
    }

    #[test]
    fn cursor_advances_exactly_past_decoded_item_with_trailing_data_left_untouched() {
        let bytes = [0x01, 0x02, 0x03];
        let mut cursor = 0;
        let item = decode_at(&bytes, &mut cursor).unwrap();
        assert_eq!(item, DataItem::Int(1));
        assert_eq!(cursor, 1);
    }
}
