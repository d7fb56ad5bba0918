use std::io;

use clap::Parser;
use probe_hash::Article;
use probe_hash::HashTable;
use probe_hash::persist;

#[derive(Parser, Debug)]
struct Args {
    #[arg(short = 'n', long = "records", default_value_t = 40)]
    records: usize,
}

fn main() {
    let args = Args::parse();
    let mut out = io::stdout().lock();

    let mut catalogue = HashTable::new();
    println!("Filling the catalogue with {} records...", args.records);
    for i in 0..args.records {
        let article = Article::new(
            format!("10.1000/demo.{i:04}"),
            format!("Demonstration Title {i}"),
            format!("Author {}", i % 7),
            1970 + (i % 55) as u32,
        );
        if catalogue.insert(article).is_err() {
            eprintln!("the catalogue is full, stopping early");
            break;
        }
    }
    catalogue.write_occupancy(&mut out).expect("stdout");

    let probe_key = "10.1000/demo.0000";
    println!("contains {probe_key}: {}", catalogue.contains(probe_key));
    if let Some(article) = catalogue.fetch(probe_key) {
        println!(
            "fetched: {} ({}, {})",
            article.title(),
            article.author(),
            article.year()
        );
    }

    let missing_key = "10.1000/not.in.the.catalogue";
    println!("contains {missing_key}: {}", catalogue.contains(missing_key));

    println!("\nRemoving every third record...");
    for i in (0..args.records).step_by(3) {
        catalogue.remove(&format!("10.1000/demo.{i:04}"));
    }
    catalogue.write_occupancy(&mut out).expect("stdout");

    println!("\nExpanding once (the rebuild drops the tombstones)...");
    if catalogue.expand().is_ok() {
        catalogue.write_occupancy(&mut out).expect("stdout");
    }

    let mut buffer = Vec::new();
    persist::dump(&catalogue, &mut buffer).expect("in-memory dump");
    println!("\nDump is {} bytes; reloading...", buffer.len());

    let restored: HashTable<Article> = persist::load(&mut buffer.as_slice()).expect("reload");
    println!(
        "restored {} records at capacity {} (dumped: {} at {})",
        restored.len(),
        restored.capacity(),
        catalogue.len(),
        catalogue.capacity()
    );
}
