//! An example using the `play_tennis` dataset
use entropic::loader::{read_dataset, LoaderConfig};
use entropic::TreeInductionEngine;
use std::env;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();
    let path = args.get(1).map_or("resources/play_tennis.csv", |p| p.as_str());
    let delimiter = args.get(2).and_then(|d| d.bytes().next()).unwrap_or(b',');

    let data = read_dataset(path, &LoaderConfig::with_delimiter(delimiter))?;
    println!("{}", data);

    let engine = TreeInductionEngine::default();
    let tree = engine.fit(&data)?;

    print!("{}", tree);
    println!("Training accuracy: {:.3}", tree.accuracy(&data)?);

    Ok(())
}
