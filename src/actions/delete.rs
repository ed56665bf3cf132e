use std::io::Write;

use anyhow::Result;

use crate::db::Store;

pub fn delete(store: &Store, out: &mut impl Write, id: i64) -> Result<()> {
    if store.delete(id)? {
        writeln!(out, "deleted.")?;
    } else {
        writeln!(out, "nothing to delete.")?;
    }
    Ok(())
}
