use std::io::Write;

use anyhow::Result;

use crate::db::Store;

pub fn add(store: &Store, out: &mut impl Write, words: &[String]) -> Result<()> {
    let description = words.join(" ");
    store.add(&description)?;
    writeln!(out, "added.")?;
    Ok(())
}
