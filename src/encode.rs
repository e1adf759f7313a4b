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
 * cbor_core encoder
 *
 * Appends a `DataItem`'s wire form to a growing byte buffer, using the shortest head encoding
 * that fits each argument ("preferred serialization").
 **************************************************************************************************/
use alloc::vec::Vec;

use crate::error::{CBORError, Result};
use crate::value::{DataItem, FloatWidth, SimpleValue};

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

const MT_UINT: u8 = 0;
const MT_NINT: u8 = 1;
const MT_BSTR: u8 = 2;
const MT_TSTR: u8 = 3;
const MT_ARRAY: u8 = 4;
const MT_MAP: u8 = 5;
const MT_TAG: u8 = 6;
const MT_SIMPLE: u8 = 7;

/// Encodes `item` and returns the freshly allocated wire form.
///
/// The only failure mode is allocation failure while growing the output; this crate's narrow
/// error taxonomy (§7) has no room for anything else here because encoding a well-formed
/// `DataItem` cannot fail structurally the way decoding malformed bytes can.
#[cfg_attr(feature = "trace", trace)]
pub fn encode(item: &DataItem) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    encode_into(item, &mut out)?;
    Ok(out)
}

/// Appends `item`'s wire form to `output`, growing it as needed.
#[cfg_attr(feature = "trace", trace)]
pub fn encode_into(item: &DataItem, output: &mut Vec<u8>) -> Result<()> {
    match item {
        DataItem::Int(v) => encode_int(*v, output),
        DataItem::Bytes(bytes) => encode_head_and_bytes(MT_BSTR, bytes, output),
        DataItem::Text(bytes) => encode_head_and_bytes(MT_TSTR, bytes, output),
        DataItem::Array(items) => {
            write_head(MT_ARRAY, items.len() as u64, output)?;
            for child in items {
                encode_into(child, output)?;
            }
            Ok(())
        }
        DataItem::Map(pairs) => {
            write_head(MT_MAP, pairs.len() as u64, output)?;
            for (key, value) in pairs {
                encode_into(key, output)?;
                encode_into(value, output)?;
            }
            Ok(())
        }
        DataItem::Tag { tag, child } => {
            write_head(MT_TAG, *tag, output)?;
            encode_into(child, output)
        }
        DataItem::Float(width) => encode_float(*width, output),
        DataItem::Simple(value) => encode_simple(*value, output),
    }
}

fn encode_int(value: i128, output: &mut Vec<u8>) -> Result<()> {
    if value >= 0 {
        // The model admits magnitudes up to 2^64 - 1 on the non-negative side, so this always
        // fits in u64.
        write_head(MT_UINT, value as u64, output)
    } else {
        let argument = (-(value + 1)) as u64;
        write_head(MT_NINT, argument, output)
    }
}

fn encode_head_and_bytes(major_type: u8, bytes: &[u8], output: &mut Vec<u8>) -> Result<()> {
    write_head(major_type, bytes.len() as u64, output)?;
    output
        .try_reserve(bytes.len())
        .map_err(|_| CBORError::OutOfMemory)?;
    output.extend_from_slice(bytes);
    Ok(())
}

fn encode_float(width: FloatWidth, output: &mut Vec<u8>) -> Result<()> {
    match width {
        FloatWidth::Half(v) => {
            output.push((MT_SIMPLE << 5) | 25);
            output.extend_from_slice(&v.to_bits().to_be_bytes());
        }
        FloatWidth::Single(v) => {
            output.push((MT_SIMPLE << 5) | 26);
            output.extend_from_slice(&v.to_bits().to_be_bytes());
        }
        FloatWidth::Double(v) => {
            output.push((MT_SIMPLE << 5) | 27);
            output.extend_from_slice(&v.to_bits().to_be_bytes());
        }
    }
    Ok(())
}

fn encode_simple(value: SimpleValue, output: &mut Vec<u8>) -> Result<()> {
    let ai = match value {
        SimpleValue::False => 20,
        SimpleValue::True => 21,
        SimpleValue::Null => 22,
        SimpleValue::Undefined => 23,
    };
    output.push((MT_SIMPLE << 5) | ai);
    Ok(())
}

/// Writes a head for `major_type` carrying `argument`, using the shortest encoding that fits
/// (RFC 8949's "preferred serialization"). This is the part of the wire format on which round-
/// trip stability with the test corpus depends; it does not attempt full deterministic encoding
/// (which would additionally canonicalize map key order, which this crate never does).
fn write_head(major_type: u8, argument: u64, output: &mut Vec<u8>) -> Result<()> {
    let head_byte = major_type << 5;
    match argument {
        0..=23 => output.push(head_byte | argument as u8),
        24..=255 => {
            output.push(head_byte | 24);
            output.push(argument as u8);
        }
        256..=65535 => {
            output.push(head_byte | 25);
            output.extend_from_slice(&(argument as u16).to_be_bytes());
        }
        65536..=0xffff_ffff => {
            output.push(head_byte | 26);
            output.extend_from_slice(&(argument as u32).to_be_bytes());
        }
        _ => {
            output.push(head_byte | 27);
            output.extend_from_slice(&argument.to_be_bytes());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use half::f16;

    #[test]
    fn encodes_small_unsigned_int_inline() {
        assert_eq!(encode(&DataItem::Int(23)).unwrap(), vec![0x17]);
    }

    #[test]
    fn encodes_one_byte_threshold() {
        assert_eq!(encode(&DataItem::Int(24)).unwrap(), vec![0x18, 0x18]);
        assert_eq!(encode(&DataItem::Int(255)).unwrap(), vec![0x18, 0xff]);
    }

    #[test]
    fn encodes_two_byte_threshold() {
        assert_eq!(encode(&DataItem::Int(1000)).unwrap(), vec![0x19, 0x03, 0xe8]);
    }

    #[test]
    fn encodes_maximum_unsigned_value() {
        let bytes = encode(&DataItem::Int(u64::MAX as i128)).unwrap();
        assert_eq!(bytes, vec![0x1b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn encodes_negative_one_and_minimum_value() {
        assert_eq!(encode(&DataItem::Int(-1)).unwrap(), vec![0x20]);
        let min = encode(&DataItem::Int(-(1i128 << 64))).unwrap();
        assert_eq!(min, vec![0x3b, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]);
    }

    #[test]
    fn encodes_byte_and_text_strings() {
        assert_eq!(encode(&DataItem::Bytes(vec![])).unwrap(), vec![0x40]);
        let bytes = DataItem::Bytes(vec![10, 11, 12, 13, 14]);
        assert_eq!(encode(&bytes).unwrap(), vec![0x45, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e]);
        let text = DataItem::from("IETF");
        assert_eq!(encode(&text).unwrap(), vec![0x64, 0x49, 0x45, 0x54, 0x46]);
    }

    #[test]
    fn encodes_nested_array() {
        let item = DataItem::Array(vec![
            DataItem::Int(1),
            DataItem::Array(vec![DataItem::Int(2), DataItem::Int(3)]),
            DataItem::Array(vec![DataItem::Int(4), DataItem::Int(5)]),
        ]);
        let bytes = encode(&item).unwrap();
        assert_eq!(bytes, vec![0x83, 0x01, 0x82, 0x02, 0x03, 0x82, 0x04, 0x05]);
    }

    #[test]
    fn encodes_tag() {
        let item = DataItem::tag(1, DataItem::Int(1363896240));
        let bytes = encode(&item).unwrap();
        assert_eq!(bytes, vec![0xc1, 0x1a, 0x51, 0x4b, 0x67, 0xb0]);
    }

    #[test]
    fn encodes_floats_without_rewidening() {
        let half = DataItem::Float(FloatWidth::Half(f16::from_f32(1.0)));
        assert_eq!(encode(&half).unwrap(), vec![0xf9, 0x3c, 0x00]);

        let single = DataItem::Float(FloatWidth::Single(100000.0));
        assert_eq!(encode(&single).unwrap(), vec![0xfa, 0x47, 0xc3, 0x50, 0x00]);

        let double = DataItem::Float(FloatWidth::Double(1.1));
        assert_eq!(
            encode(&double).unwrap(),
            vec![0xfb, 0x3f, 0xf1, 0x99, 0x99, 0x99, 0x99, 0x99, 0x9a]
        );
    }

    #[test]
    fn encodes_simple_values() {
        assert_eq!(encode(&DataItem::Simple(SimpleValue::False)).unwrap(), vec![0xf4]);
        assert_eq!(encode(&DataItem::Simple(SimpleValue::True)).unwrap(), vec![0xf5]);
        assert_eq!(encode(&DataItem::Simple(SimpleValue::Null)).unwrap(), vec![0xf6]);
        assert_eq!(
            encode(&DataItem::Simple(SimpleValue::Undefined)).unwrap(),
            vec![0xf7]
        );
    }

    #[test]
    fn head_minimality_holds_across_the_unsigned_boundaries() {
        let cases: [(i128, &[u8]); 4] = [
            (23, &[0x17]),
            (24, &[0x18, 0x18]),
            (255, &[0x18, 0xff]),
            (256, &[0x19, 0x01, 0x00]),
        ];
        for (value, expected) in cases {
            assert_eq!(encode(&DataItem::Int(value)).unwrap(), expected);
        }
    }
}
