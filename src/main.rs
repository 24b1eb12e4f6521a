use anyhow::Result;

use factorial_exam::report;

fn main() -> Result<()> {
    println!("{}", report(5)?);
    Ok(())
}
