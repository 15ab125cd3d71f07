//! Formatted integer-to-text conversion
//!
//! Width, fill and adjustment through the radix back-end, then prefixed
//! upper-case hexadecimal through a shared stream back-end.

use strcnv::{convert, Adjustment, Base, RadixConverter, StreamConverter};

fn main() -> anyhow::Result<()> {
    let s01 = convert::<String, _, _>(&12, &RadixConverter::new().width(4))?.value()?;
    let s02 = convert::<String, _, _>(&12, &RadixConverter::new().width(5).fill('*'))?.value()?;
    let s03 = convert::<String, _, _>(
        &12,
        &RadixConverter::new()
            .width(5)
            .fill('x')
            .adjustment(Adjustment::Left),
    )?
    .value()?;

    println!("{s01}");
    println!("{s02}");
    println!("{s03}");
    assert_eq!((s01.as_str(), s02.as_str(), s03.as_str()), ("  12", "***12", "12xxx"));

    // Upper-case, prefixed hex through one shared stream instance.
    let cnv = StreamConverter::new()
        .base(Base::Hex)
        .uppercase(true)
        .show_base(true);

    for value in [15, 16, 17, 18] {
        let rendered = convert::<String, _, _>(&value, &cnv)?.value()?;
        println!("{value} -> {rendered}");
    }

    Ok(())
}
