use std::env;

use liblife::{Grid, Rules};
use log::LevelFilter;
use simple_logger::SimpleLogger;

mod cli;

fn main() {
    SimpleLogger::new()
        .with_level(LevelFilter::Info)
        .init()
        .expect("Couldn't install the logger");

    let mut args = env::args().skip(1);
    let rows = parse_dimension(args.next(), 20);
    let columns = parse_dimension(args.next(), 20);
    let rules = args
        .next()
        .map(|arg| arg.parse::<Rules>().expect("Couldn't parse the rule argument"))
        .unwrap_or_default();

    let grid = Grid::with_rules(rows, columns, rules).expect("Couldn't create the starting grid");

    cli::run(grid);
}

fn parse_dimension(arg: Option<String>, default: usize) -> usize {
    arg.map(|value| value.parse().expect("Couldn't parse a grid dimension argument"))
        .unwrap_or(default)
}
