use anyhow::Result;
use beeptools::cli::beep;

fn main() -> Result<()> {
    beep::main()
}
