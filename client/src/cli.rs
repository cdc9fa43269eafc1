use std::io;
use std::path::PathBuf;
use std::process::exit;

use anyhow::{Context, bail};
use liblife::snapshot::{load_rules, save_rules};
use liblife::{Grid, GridSnapshot, Rules};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(mut grid: Grid) {
    println!(
        "{}x{} grid, rule {}",
        grid.rows(),
        grid.columns(),
        grid.rules()
    );

    for line_res in io::stdin().lines() {
        let line = line_res.unwrap();
        let args = line.split_whitespace();

        if let Err(e) = handle_cmd(&mut grid, args) {
            eprintln!("! {e:?}");
        }
    }
}

fn handle_cmd<'a, I>(grid: &mut Grid, mut args: I) -> anyhow::Result<()>
where
    I: Iterator<Item = &'a str>,
{
    match args.next().context("No command")? {
        "new" => {
            let rows = args.next().context("missing rows")?.parse()?;
            let columns = args.next().context("missing columns")?.parse()?;
            let rules = match args.next() {
                Some(input) => parse_rules(input)?,
                None => *grid.rules(),
            };

            *grid = Grid::with_rules(rows, columns, rules)?;
        }

        "set" => {
            let pos = parse_pos(&mut args)?;
            grid.set_alive(pos, true)?;
        }

        "unset" => {
            let pos = parse_pos(&mut args)?;
            grid.set_alive(pos, false)?;
        }

        "toggle" => {
            let pos = parse_pos(&mut args)?;
            grid.toggle(pos)?;
        }

        "step" => {
            let times = args.next().unwrap_or("1").parse::<usize>()?;

            if times == 0 {
                log::warn!("step 0 leaves the grid untouched");
            }

            for _ in 0..times {
                grid.tick();
            }
        }

        "show" => {
            println!("{grid}");
            println!(
                "generation {}, {} alive, rule {}",
                grid.generation(),
                grid.live_cell_count(),
                grid.rules(),
            );
        }

        "count" => {
            println!("{}", grid.live_cell_count());
        }

        "clear" => {
            grid.clear();
        }

        "random" => match args.next() {
            Some(seed) => grid.randomize(&mut StdRng::seed_from_u64(seed.parse()?)),
            None => grid.randomize(&mut rand::rng()),
        },

        "invert" => {
            grid.invert();
        }

        "invert-rules" => {
            grid.invert_rules();
        }

        "rule" => match args.next() {
            Some(input) => grid.set_rules(parse_rules(input)?),
            None => println!("{}", grid.rules()),
        },

        "save" => {
            let path = path_or_dated(args.next(), "states");
            GridSnapshot::capture(grid).save(&path)?;
            log::info!("saved state to {}", path.display());
        }

        "load" => {
            let path = args.next().context("missing path")?;
            *grid = GridSnapshot::load(path)?.restore()?;
            log::info!("loaded state from {path}");
        }

        "save-rules" => {
            let path = path_or_dated(args.next(), "rules");
            save_rules(grid.rules(), &path)?;
            log::info!("saved rules to {}", path.display());
        }

        "load-rules" => {
            let path = args.next().context("missing path")?;
            grid.set_rules(load_rules(path)?);
            log::info!("loaded rules from {path}");
        }

        "exit" => {
            exit(0);
        }

        _ => bail!("Unknown command"),
    }

    println!("OK");
    Ok(())
}

fn parse_pos<'a, I>(args: &mut I) -> anyhow::Result<(usize, usize)>
where
    I: Iterator<Item = &'a str>,
{
    let row = args.next().context("missing row")?.parse()?;
    let column = args.next().context("missing column")?.parse()?;
    Ok((row, column))
}

fn parse_rules(input: &str) -> anyhow::Result<Rules> {
    let rules = match input {
        "conway" => Rules::conway(),
        "highlife" => Rules::highlife(),
        "day-and-night" => Rules::day_and_night(),
        _ => input.parse()?,
    };

    Ok(rules)
}

fn path_or_dated(arg: Option<&str>, directory: &str) -> PathBuf {
    match arg {
        Some(path) => PathBuf::from(path),
        None => {
            let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
            PathBuf::from(directory).join(format!("{stamp}.json"))
        }
    }
}
