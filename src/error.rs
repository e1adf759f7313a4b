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
 * cbor_core error API
 *
 * A CBOR (RFC 8949) decoder and encoder built around an owned, allocator-backed value tree.
 **************************************************************************************************/
use core::result;

#[cfg(any(feature = "std", test))]
use thiserror::Error;

pub type Result<T> = result::Result<T, CBORError>;

/// `CBORError` enumerates the ways a decode or encode operation can fail.
///
/// The taxonomy is deliberately flat: every failure is one of four kinds, with no sub-hierarchy
/// and no per-call-site variant explosion. Callers that need to know what was being decoded when
/// this happened track that themselves; the error only says which of the four things went wrong.
#[cfg_attr(any(feature = "std", test), derive(Copy, Clone, Error, Debug))]
#[cfg_attr(all(not(feature = "std"), not(test)), derive(Copy, Clone, Debug))]
pub enum CBORError {
    /// The additional information field held one of the three reserved values (28, 29, 30).
    #[cfg_attr(
        any(feature = "std", test),
        error("Additional information field held a reserved value (28, 29 or 30)")
    )]
    ReservedAdditionalInformation,
    /// The input is not well-formed CBOR: a length claims more bytes than remain, or the byte
    /// stream otherwise violates RFC 8949 syntax.
    #[cfg_attr(any(feature = "std", test), error("Input is not well-formed CBOR"))]
    Malformed,
    /// The input is well-formed CBOR but uses a feature this codec does not implement, such as
    /// indefinite-length items.
    #[cfg_attr(
        any(feature = "std", test),
        error("Input uses a CBOR feature this codec does not support")
    )]
    Unsupported,
    /// An allocation needed to build the decoded value tree could not be satisfied.
    #[cfg_attr(any(feature = "std", test), error("Allocation failed"))]
    OutOfMemory,
}
