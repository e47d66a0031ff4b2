//! Self-describing stats list shared by item and monster records.
//!
//! From the stat pivot onwards, records stop storing fixed-width stat
//! blocks and instead carry a counted run of `(tag: u8, value: i32)`
//! pairs. The tags are server-side enum discriminants this subsystem
//! does not interpret; it only has to consume the run exactly.

use crate::{Result, ioutils::ReadMirExt};
use byteorder::{LittleEndian, ReadBytesExt};
use std::io::Read;

/// Consume one stats list, discarding its contents.
pub(crate) fn skip_stat_list<R: Read>(reader: &mut R) -> Result<()> {
    let count = reader.read_count()?;
    for _ in 0..count {
        let _tag = reader.read_u8()?;
        let _value = reader.read_i32::<LittleEndian>()?;
    }
    Ok(())
}
