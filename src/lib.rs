/***************************************************************************************************
 * Copyright (c) 2020-2022, Qualcomm Innovation Center, Inc. All rights reserved.
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
 * cbor_core module definition
 *
 * A CBOR (RFC 8949) decoder and encoder built around an owned, allocator-backed value tree, for
 * embedding into protocol stacks (WebAuthn attestation, CTAP2, COSE) that need exact control over
 * the on-wire representation.
 **************************************************************************************************/
#![no_std]
/**
CBOR_CORE: decodes CBOR byte sequences into an owned `DataItem` tree and encodes a `DataItem` tree
back into its shortest-form wire representation.

Indefinite-length items (the CBOR "break" stop code and streamed major types) are not supported in
this version and surface as `Unsupported`. Semantic interpretation of tag numbers is out of scope:
tag numbers are preserved verbatim and never interpreted.
*/
extern crate alloc;

// Pull in std if we are testing or if it is enabled as a feature.
#[cfg(any(feature = "std", test))]
extern crate std;

extern crate half;

mod constants;
mod decode;
mod encode;
mod head;
mod value;

pub mod error;

pub mod types {
    pub use super::value::{DataItem, FloatWidth, SimpleValue};
}

pub mod decoder {
    pub use super::decode::{decode, decode_at};
}

pub mod encoder {
    pub use super::encode::{encode, encode_into};
}
