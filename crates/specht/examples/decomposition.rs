//! Queries a few decomposition numbers of the Hecke algebra at e = 3.
//!
//! Needs a GAP3 installation with the `specht` package. Point `GAP3_BIN`
//! at the executable if it is not at the default location.

use specht::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SpechtConfig::new(3);
    if let Ok(path) = std::env::var("GAP3_BIN") {
        config = config.with_executable(path);
    }

    let mut hecke = Specht::from_config(config)?;
    println!("{hecke}");

    let mu = Partition::new(&[5, 1])?;
    let nu = Partition::new(&[6])?;
    println!("[S{mu} : D{nu}] = {}", hecke.decomposition_number(&mu, &nu)?);

    let graded = hecke.graded_decomposition_number(&Partition::new(&[2, 2, 2])?, &nu)?;
    println!("[S[2, 2, 2] : D{nu}]_v = {graded}");

    println!("{}", hecke.decomposition_matrix(6)?);
    Ok(())
}
