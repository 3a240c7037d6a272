use anyhow::{Context, Result};
use dotmatrix_core::{CoreError, GameBoy};

const DEFAULT_M_CYCLES: u64 = 1_000_000;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let rom_path = args.next().unwrap_or_else(|| {
        eprintln!("Usage: dotmatrix <rom_path> [m_cycles]");
        std::process::exit(2);
    });
    let budget: u64 = args
        .next()
        .map(|arg| arg.parse())
        .transpose()
        .context("invalid M-cycle budget; expected an integer")?
        .unwrap_or(DEFAULT_M_CYCLES);

    let rom = std::fs::read(&rom_path)
        .with_context(|| format!("failed to read ROM '{rom_path}'"))?;

    let mut gb = GameBoy::new();
    gb.load_rom(&rom)?;

    log::info!("running '{rom_path}' for {budget} M-cycles");
    match gb.run(budget) {
        Ok(()) => {}
        Err(err @ CoreError::UnimplementedOpcode { .. }) => {
            // A reserved opcode hard-locks real hardware; report the final
            // state instead of treating it as a runner failure.
            log::error!("execution stopped: {err}");
        }
        Err(err) => return Err(err.into()),
    }

    println!("{}", gb.cpu.debug_state());
    Ok(())
}
