//! The strict cast back-end as a cautionary baseline
//!
//! `LexicalCast` raises on any malformed input and offers no configuration,
//! so a single bad entry aborts a whole batch. The configurable back-ends
//! exist so this does not have to happen.

use strcnv::{convert, convert_all, Base, LexicalCast, Maybe, StreamConverter};

fn main() -> anyhow::Result<()> {
    let strs = [" 5", "0XF", "not an int"];

    // The very first element (leading whitespace) raises: nothing converts.
    let result = convert_all::<i32, _, _, _>(strs, &LexicalCast);
    println!("lexical cast over the batch: {result:?}");
    assert!(result.is_err());

    // A non-raising back-end with a raising extraction policy converts the
    // valid prefix, then stops.
    let cnv = StreamConverter::new().base(Base::Hex).skip_whitespace(true);
    let mut ints = Vec::new();
    for s in strs {
        match convert::<i32, _, _>(s, &cnv).and_then(Maybe::value) {
            Ok(v) => ints.push(v),
            Err(e) => {
                println!("stopped at '{s}': {e}");
                break;
            }
        }
    }
    assert_eq!(ints, [5, 15]);
    println!("converted prefix: {ints:?}");

    Ok(())
}
