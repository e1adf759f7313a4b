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
 * cbor_core head reader
 *
 * Parses the (major type, additional information, argument) head of a single CBOR item and
 * advances the cursor past it.
 **************************************************************************************************/
use crate::constants::*;
use crate::error::{CBORError, Result};

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

/// The parsed head of one CBOR item: its major type (0..7), its decoded argument, and the number
/// of bytes the head itself occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Head {
    pub major_type: u8,
    pub ai: u8,
    pub argument: u64,
    pub bytes_consumed: usize,
}

/// Reads the next item head from `bytes` starting at `*cursor`, advancing `*cursor` past it.
///
/// The spec's head reader is not required to bounds-check the argument bytes, but this
/// implementation does so defensively on every cursor advance (spec.md §9 "Open questions" flags
/// exactly this as a security-relevant hardening point, and asks implementers to close it): an
/// advertised length here can never run the cursor past `bytes.len()`.
#[cfg_attr(feature = "trace", trace)]
pub fn read_head(bytes: &[u8], cursor: &mut usize) -> Result<Head> {
    let start = *cursor;
    let first = *bytes.get(start).ok_or(CBORError::Malformed)?;
    let major_type = first >> 5;
    let ai = first & AI_MASK;

    if AI_RESERVED.contains(&ai) {
        return Err(CBORError::ReservedAdditionalInformation);
    }

    let (argument, arg_bytes) = match ai {
        0..=PAYLOAD_AI_BITS => (ai as u64, 0usize),
        PAYLOAD_ONE_BYTE => (read_be(bytes, start + 1, 1)?, 1),
        PAYLOAD_TWO_BYTES => (read_be(bytes, start + 1, 2)?, 2),
        PAYLOAD_FOUR_BYTES => (read_be(bytes, start + 1, 4)?, 4),
        PAYLOAD_EIGHT_BYTES => (read_be(bytes, start + 1, 8)?, 8),
        PAYLOAD_INDEFINITE => (0u64, 0usize),
        _ => unreachable!("AI_MASK limits ai to 0..=31 and all other arms are covered"),
    };

    let bytes_consumed = 1 + arg_bytes;
    *cursor = start + bytes_consumed;

    Ok(Head {
        major_type,
        ai,
        argument,
        bytes_consumed,
    })
}

/// Reads `width` big-endian bytes starting at `offset`, zero-extended into a `u64`. Fails
/// `Malformed` rather than panicking when the buffer is too short.
fn read_be(bytes: &[u8], offset: usize, width: usize) -> Result<u64> {
    let slice = bytes
        .get(offset..offset + width)
        .ok_or(CBORError::Malformed)?;
    let mut value: u64 = 0;
    for &b in slice {
        value = (value << 8) | b as u64;
    }
    Ok(value)
}
