use anyhow::Context;

use block_sums::blocks::{solve, INPUT_PATH};

pub fn main() -> anyhow::Result<()> {
    env_logger::init();

    let total = solve(INPUT_PATH)
        .with_context(|| format!("summing the largest blocks of {}", INPUT_PATH))?;

    println!("{}", total);

    Ok(())
}
