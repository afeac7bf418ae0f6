use std::io::{self, BufRead, Write};

use topk_shootout::{run_shootout, Error};

/// Seed shared by every strategy run, so all four see the same population.
const SEED: u64 = 42;

fn read_population_size() -> Result<usize, Error> {
    print!("Enter desired size of containers: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| Error::InvalidSize {
        input: trimmed.to_string(),
    })
}

fn main() {
    let n = read_population_size().unwrap_or_else(|err| {
        eprintln!("{}", err);
        std::process::exit(1);
    });
    println!();

    for timing in run_shootout(n, SEED) {
        println!("{}", timing.report());
    }
}
