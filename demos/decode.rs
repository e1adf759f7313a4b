/***************************************************************************************************
 * Copyright (c) 2021 Jeremy O'Donoghue. All rights reserved.
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

extern crate cbor_core;

use cbor_core::decoder::decode;
use cbor_core::encoder::encode;
use cbor_core::types::DataItem;

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // 0x19 0x03 0xe8 decodes as the unsigned integer 1000.
    let item = decode(&[0x19, 0x03, 0xe8])?;
    println!("decoded: {:?}", item);
    assert_eq!(item.as_u64(), Some(1000));

    // A small WebAuthn-flavored map: {"fmt": "fido-u2f"}.
    let map = DataItem::Map(vec![(
        DataItem::from("fmt"),
        DataItem::from("fido-u2f"),
    )]);
    let wire = encode(&map)?;
    println!("encoded {} bytes", wire.len());

    let round_tripped = decode(&wire)?;
    assert_eq!(round_tripped, map);

    let fmt = round_tripped
        .lookup_text("fmt")
        .and_then(DataItem::as_str)
        .expect("fmt key present");
    println!("fmt = {}", fmt);

    Ok(())
}
