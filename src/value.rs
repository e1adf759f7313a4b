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
 * cbor_core value tree
 *
 * `DataItem` is the owned, recursive value this crate decodes into and encodes out of. One
 * variant per CBOR major type, with major type 7 split across `Float` and `Simple`.
 **************************************************************************************************/
use alloc::{boxed::Box, string::String, vec::Vec};

use half::f16;

#[cfg(feature = "trace")]
use func_trace::trace;

#[cfg(feature = "trace")]
func_trace::init_depth_var!();

/// IEEE 754 width of a decoded or to-be-encoded float. Width is part of a `Float`'s identity:
/// `Float(Half, 0.0)` and `Float(Single, 0.0)` are distinct items (see `DataItem`'s `PartialEq`).
#[derive(Debug, Clone, Copy)]
pub enum FloatWidth {
    Half(f16),
    Single(f32),
    Double(f64),
}

impl PartialEq for FloatWidth {
    /// Bit-exact comparison, not IEEE comparison: `NaN == NaN` here if the bit patterns match,
    /// and `-0.0 != +0.0` is avoided only because the bits agree, never because of numeric
    /// equality. This preserves round-trip property #1; callers wanting IEEE semantics should
    /// match the variant and compare the payload with the ordinary float `==`.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (FloatWidth::Half(a), FloatWidth::Half(b)) => a.to_bits() == b.to_bits(),
            (FloatWidth::Single(a), FloatWidth::Single(b)) => a.to_bits() == b.to_bits(),
            (FloatWidth::Double(a), FloatWidth::Double(b)) => a.to_bits() == b.to_bits(),
            _ => false,
        }
    }
}

/// The four simple values this codec models. Other major-type-7 simple values exist on the wire
/// (see RFC 8949 §3.3) but are out of scope; decoding one fails with `Unsupported`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimpleValue {
    False,
    True,
    Null,
    Undefined,
}

/// A decoded or to-be-encoded CBOR item.
///
/// Every variant exclusively owns its payload storage (`Vec`, `Box`). Dropping a `DataItem` drops
/// its children recursively; Rust's ordinary `Drop` glue gives this for free, so there is no
/// separate destructor entry point the way a non-owning implementation would need one.
#[derive(Debug, Clone, PartialEq)]
pub enum DataItem {
    /// Signed integer in the closed range `[-2^64, 2^64 - 1]`. `i128` is required because CBOR's
    /// negative-integer major type reaches one magnitude past what `i64`/`u64` can represent.
    Int(i128),
    /// Owned byte string. May be empty.
    Bytes(Vec<u8>),
    /// Owned text string, stored as raw bytes. Not validated as UTF-8 at decode time; callers
    /// that need validation call `as_str` or validate externally.
    Text(Vec<u8>),
    /// Ordered sequence of child items. Order is semantic, not a hint.
    Array(Vec<DataItem>),
    /// Ordered sequence of (key, value) pairs, in encounter order. Not an associative map:
    /// duplicate keys are preserved, not deduplicated, and lookup is `O(n)` by design.
    Map(Vec<(DataItem, DataItem)>),
    /// A tag number annotating exactly one child item.
    Tag { tag: u64, child: Box<DataItem> },
    /// An IEEE 754 float, one of three widths.
    Float(FloatWidth),
    /// One of the four modeled simple values.
    Simple(SimpleValue),
}

impl DataItem {
    /// Constructs a `Tag` wrapping `child`.
    pub fn tag(tag: u64, child: DataItem) -> DataItem {
        DataItem::Tag {
            tag,
            child: Box::new(child),
        }
    }

    /// `at(index)` on an `Array` returns the child at that position; absent otherwise (wrong
    /// variant or out-of-range index).
    #[cfg_attr(feature = "trace", trace)]
    pub fn at(&self, index: usize) -> Option<&DataItem> {
        match self {
            DataItem::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// `lookup(key)` on a `Map` returns the value of the first pair whose key equals `key` under
    /// `DataItem`'s `PartialEq`. `O(n)`: maps are ordered pair lists, not hash tables.
    #[cfg_attr(feature = "trace", trace)]
    pub fn lookup(&self, key: &DataItem) -> Option<&DataItem> {
        match self {
            DataItem::Map(pairs) => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Convenience for the common case of a `Text` key: avoids callers building a throwaway
    /// `DataItem::Text` just to call `lookup`.
    #[cfg_attr(feature = "trace", trace)]
    pub fn lookup_text(&self, key: &str) -> Option<&DataItem> {
        match self {
            DataItem::Map(pairs) => pairs
                .iter()
                .find(|(k, _)| matches!(k, DataItem::Text(bytes) if bytes.as_slice() == key.as_bytes()))
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Convenience for an integer key, the common case for COSE/CWT labels.
    #[cfg_attr(feature = "trace", trace)]
    #[inline]
    pub fn get_int(&self, key: i64) -> Option<&DataItem> {
        self.lookup(&DataItem::Int(key as i128))
    }

    /// Convenience for a text key, the common case for COSE/CWT labels.
    #[cfg_attr(feature = "trace", trace)]
    #[inline]
    pub fn get_tstr(&self, key: &str) -> Option<&DataItem> {
        self.lookup_text(key)
    }

    /// Convenience for a map item that may be keyed by either an integer or a string, a common
    /// shape in IETF standards that trade off human readability against compactness.
    #[cfg_attr(feature = "trace", trace)]
    #[inline]
    pub fn get_int_or_tstr(&self, int_key: i64, tstr_key: &str) -> Option<&DataItem> {
        self.get_int(int_key).or_else(|| self.get_tstr(tstr_key))
    }

    pub fn is_int(&self) -> bool {
        matches!(self, DataItem::Int(_))
    }
    pub fn is_bytes(&self) -> bool {
        matches!(self, DataItem::Bytes(_))
    }
    pub fn is_text(&self) -> bool {
        matches!(self, DataItem::Text(_))
    }
    pub fn is_array(&self) -> bool {
        matches!(self, DataItem::Array(_))
    }
    pub fn is_map(&self) -> bool {
        matches!(self, DataItem::Map(_))
    }
    pub fn is_tag(&self) -> bool {
        matches!(self, DataItem::Tag { .. })
    }
    pub fn is_float(&self) -> bool {
        matches!(self, DataItem::Float(_))
    }
    pub fn is_simple(&self) -> bool {
        matches!(self, DataItem::Simple(_))
    }

    /// Narrowing accessor: `Some` iff `self` is an `Int` whose value fits in `i64`. `Option`, not
    /// `Result`, because a mismatch here is not one of the four decode/encode error kinds.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            DataItem::Int(v) => i64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// Narrowing accessor: `Some` iff `self` is an `Int` whose value is non-negative and fits
    /// in `u64`.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            DataItem::Int(v) => u64::try_from(*v).ok(),
            _ => None,
        }
    }

    /// The full 65-bit-magnitude integer, with no narrowing.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            DataItem::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            DataItem::Bytes(b) => Some(b),
            _ => None,
        }
    }

    /// Raw text bytes, unvalidated.
    pub fn as_text_bytes(&self) -> Option<&[u8]> {
        match self {
            DataItem::Text(b) => Some(b),
            _ => None,
        }
    }

    /// Text interpreted as `&str`; `None` if the variant doesn't match OR the bytes are not
    /// valid UTF-8. Validation happens here, on demand, never during decode (spec §4.2).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DataItem::Text(b) => core::str::from_utf8(b).ok(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[DataItem]> {
        match self {
            DataItem::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&[(DataItem, DataItem)]> {
        match self {
            DataItem::Map(pairs) => Some(pairs),
            _ => None,
        }
    }
}

macro_rules! from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DataItem {
                fn from(v: $t) -> DataItem {
                    DataItem::Int(v as i128)
                }
            }
        )*
    };
}

macro_rules! from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for DataItem {
                fn from(v: $t) -> DataItem {
                    DataItem::Int(v as i128)
                }
            }
        )*
    };
}

from_unsigned!(u8, u16, u32, u64);
from_signed!(i8, i16, i32, i64, i128);

impl From<bool> for DataItem {
    fn from(v: bool) -> DataItem {
        DataItem::Simple(if v { SimpleValue::True } else { SimpleValue::False })
    }
}

impl From<&str> for DataItem {
    fn from(v: &str) -> DataItem {
        DataItem::Text(v.as_bytes().to_vec())
    }
}

impl From<String> for DataItem {
    fn from(v: String) -> DataItem {
        DataItem::Text(v.into_bytes())
    }
}

impl From<&[u8]> for DataItem {
    fn from(v: &[u8]) -> DataItem {
        DataItem::Bytes(v.to_vec())
    }
}

impl From<Vec<u8>> for DataItem {
    fn from(v: Vec<u8>) -> DataItem {
        DataItem::Bytes(v)
    }
}
