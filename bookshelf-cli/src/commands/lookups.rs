//! Genre and author listings

use anyhow::Result;
use bookshelf_core::{Catalog, Lookup};
use serde::Serialize;

#[derive(Serialize)]
struct Entry<'a> {
    id: &'a str,
    name: &'a str,
}

fn print_lookup(lookup: &Lookup, json: bool) -> Result<()> {
    if json {
        let entries: Vec<Entry> = lookup.iter().map(|(id, name)| Entry { id, name }).collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        for (id, name) in lookup.iter() {
            println!("{:<12} {}", id, name);
        }
    }
    Ok(())
}

pub fn genres(catalog: &Catalog, json: bool) -> Result<()> {
    print_lookup(catalog.genres(), json)
}

pub fn authors(catalog: &Catalog, json: bool) -> Result<()> {
    print_lookup(catalog.authors(), json)
}
