//! Batch conversion with a default-substitution policy
//!
//! Converts a batch of hexadecimal inputs, replacing the entries that fail
//! to convert with `i32::MAX` instead of aborting the batch. The policy is
//! chosen once, outside the loop.

use strcnv::{convert_all_or, Base, StreamConverter};

fn main() -> anyhow::Result<()> {
    let strs = [" 5", "0XF", "not an int"];

    // One shared converter instance carries the configuration across the
    // whole batch; it is held by reference, never copied.
    let cnv = StreamConverter::new().base(Base::Hex).skip_whitespace(true);

    let ints = convert_all_or::<i32, _, _, _>(strs, &cnv, i32::MAX)?;

    for (input, value) in strs.iter().zip(&ints) {
        println!("{input:>12} -> {value}");
    }

    assert_eq!(ints, [5, 15, i32::MAX]);
    println!("\n✓ Failed conversion substituted with i32::MAX");

    Ok(())
}
