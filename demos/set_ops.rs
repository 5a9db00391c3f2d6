//! Bitwise algebra and buffer sharing.

use bitseq::{BitSeq, Endian};

fn main() -> Result<(), bitseq::Error> {
    let a: BitSeq = "1100 1010".parse()?;
    let b: BitSeq = "1010 0110".parse()?;

    println!("a     = {a}");
    println!("b     = {b}");
    println!("a & b = {}", a.and(&b)?);
    println!("a | b = {}", a.or(&b)?);
    println!("a ^ b = {}", a.xor(&b)?);
    println!("!a    = {}", !&a);
    println!("a << 2 = {}", &a << 2);

    // Mismatched endianness is refused, never converted implicitly.
    let little = BitSeq::parse_str("11001010", Endian::Little)?;
    match a.and(&little) {
        Err(e) => println!("a & little: {e}"),
        Ok(_) => unreachable!(),
    }

    // Two handles over one buffer: writes are visible to both, resizing
    // is refused while shared.
    let mut x = BitSeq::zeros(16, Endian::Big);
    let y = x.share();
    x.set(3, true)?;
    println!("y sees x's write: {}", y.get(3) == Some(true));
    match x.push(true) {
        Err(e) => println!("push while shared: {e}"),
        Ok(()) => unreachable!(),
    }
    Ok(())
}
