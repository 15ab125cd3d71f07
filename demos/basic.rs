//! Basic example of using strcnv as a library
//!
//! This example shows the simplest way to parse text into integers with a
//! fallback default.

use strcnv::{convert, RadixConverter};

fn main() -> anyhow::Result<()> {
    let cnv = RadixConverter::new();

    // Substituting policy: failed conversions become -1.
    for input in ["not an int", "-11", "-12"] {
        let value = convert::<i32, _, _>(input, &cnv)?.value_or(-1);
        println!("{input:>12} -> {value}");
    }

    // Raising policy: extraction fails loudly on the same bad input.
    let result = convert::<i32, _, _>("not an int", &cnv)?.value();
    println!("\nstrict extraction of 'not an int': {result:?}");

    Ok(())
}
