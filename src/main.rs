use std::env;
use std::process::exit;

use twophase::cubie::CubieCube;
use twophase::error::Error;
use twophase::facelet::FaceCube;
use twophase::scramble::scramble_from_str;
use twophase::solver::Solver;

const DEMO_FACELETS: &str = "RLLBUFUUUBDURRBBUBRLRRFDFDDLLLUDFLRRDDFRLFDBUBFFLBBDUF";

fn cube_from_arg(arg: &str) -> Result<CubieCube, Error> {
    // a 54 character string is a facelet description, anything else a scramble
    if arg.len() == 54 && !arg.contains(' ') {
        let fc = FaceCube::try_from(arg)?;
        return CubieCube::try_from(&fc);
    }
    let scramble = scramble_from_str(arg)?;
    Ok(CubieCube::default().apply_moves(&scramble))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let input = match args.len() {
        0 => DEMO_FACELETS.to_string(),
        _ => args.join(" "),
    };

    let cube = match cube_from_arg(&input) {
        Ok(cube) => cube,
        Err(error) => {
            eprintln!("error: {error}");
            exit(1);
        }
    };

    let mut solver = Solver::new("tables");
    if let Err(error) = solver.initialize_tables() {
        eprintln!("error: {error}");
        exit(1);
    }

    match solver.solve(&cube, 22, 10.0) {
        Ok(status) => {
            let best = solver.best_solution().expect("legal cubes always solve");
            println!("{best} {status:?}");
        }
        Err(error) => {
            eprintln!("error: {error}");
            exit(1);
        }
    }
}
