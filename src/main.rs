use std::fs::File;
use std::io::{stdin, BufRead, BufReader};
use std::path::PathBuf;
use std::process;

use log::{info, LevelFilter};
use simple_logger::SimpleLogger;
use structopt::StructOpt;

mod cycle;
mod error;
mod moon;
mod system;
mod vector;

use cycle::find_periods;
use error::Error;
use moon::Moon;
use system::System;
use vector::{Axis, ParseError, Vector};

fn parse_moons(input: impl BufRead) -> Result<Vec<Moon>, Error> {
    let mut moons = vec![];
    for (index, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let position: Vector = line.trim().parse().map_err(|error: ParseError| Error::Parse {
            line: index + 1,
            message: error.0,
        })?;
        moons.push(Moon::new(position));
    }
    Ok(moons)
}

fn read_moons(path: Option<&PathBuf>) -> Result<Vec<Moon>, Error> {
    match path {
        Some(path) => {
            let file = File::open(path).map_err(|source| Error::InputNotFound {
                path: path.clone(),
                source,
            })?;
            parse_moons(BufReader::new(file))
        }
        None => parse_moons(stdin().lock()),
    }
}

fn energy_after(moons: Vec<Moon>, steps: usize) -> i64 {
    let mut system = System::new(moons);
    for _ in 0..steps {
        system.advance();
    }
    system.total_energy()
}

#[derive(Debug, StructOpt)]
struct Opts {
    /// Input file, one moon per line. Reads stdin if omitted
    #[structopt(parse(from_os_str))]
    input: Option<PathBuf>,

    /// Number of steps to simulate before measuring energy
    #[structopt(short, long, default_value = "1000")]
    steps: usize,

    /// Give up looking for the period after this many steps
    #[structopt(short, long)]
    limit: Option<usize>,

    /// Increase logging, repeat for more detail
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
}

impl Opts {
    fn level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

fn run(opts: &Opts) -> Result<(), Error> {
    let moons = read_moons(opts.input.as_ref())?;
    info!("Read {} moons", moons.len());

    let energy = energy_after(moons.clone(), opts.steps);
    info!("Total energy after {} steps is {}", opts.steps, energy);
    println!("Part 1: {}.", energy);

    let mut system = System::new(moons);
    let periods = find_periods(&mut system, opts.limit)?;
    for axis in Axis::all() {
        info!("Axis {} repeats every {} steps", axis, periods.get(axis));
    }
    println!("Part 2: {}.", periods.combined());

    Ok(())
}

fn main() {
    let opts = Opts::from_args();

    if let Err(error) = SimpleLogger::new().with_level(opts.level()).init() {
        eprintln!("Failed to set up logging: {}", error);
    }

    if let Err(error) = run(&opts) {
        eprintln!("Error: {}", error);
        process::exit(1);
    }
}
