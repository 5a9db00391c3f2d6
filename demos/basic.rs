//! Basic usage of `BitSeq`.

use bitseq::{BitSeq, Endian, SliceSpec};

fn main() -> Result<(), bitseq::Error> {
    // Build a vector from text; whitespace is ignored.
    let mut v: BitSeq = "01001111 00001".parse()?;
    println!("v          = {v}");
    println!("len        = {}", v.len());
    println!("nbytes     = {}", v.nbytes());
    println!("padbits    = {}", v.padbits());
    println!("ones       = {}", v.count_ones());

    // Python-style slicing, negative step included.
    let picked = v.get_slice(SliceSpec::new(Some(13), Some(2), Some(-3)))?;
    println!("v[13:2:-3] = {picked}");

    // Insertion by slice assignment.
    let patch: BitSeq = "111".parse()?;
    v.set_slice(SliceSpec::range(4, 4), &patch)?;
    println!("patched    = {v}");

    // Search.
    let needle: BitSeq = "111".parse()?;
    let hits: Vec<usize> = v.search(&needle, 0, v.len(), false).collect();
    println!("hits       = {hits:?}");

    // Pack out, in either endianness.
    println!("bytes(big)    = {:02x?}", v.to_bytes());
    println!("bytes(little) = {:02x?}", v.to_endian(Endian::Little).to_bytes());
    Ok(())
}
