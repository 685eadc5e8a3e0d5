use forth::lang::Error;
use forth::mach::{compile, rom, Core, Event, Int, Runtime};

pub fn boot(source: &str) -> Result<Runtime, Error> {
    boot_sized(source, 1000, 10, 10)
}

pub fn boot_sized(
    source: &str,
    core_size: usize,
    data_size: usize,
    return_size: usize,
) -> Result<Runtime, Error> {
    let mut core = Core::new(core_size);
    rom::install(&mut core)?;
    let entry = compile(&mut core, source)?;
    Ok(Runtime::new(core, entry, data_size, return_size))
}

/// Compile, run to completion under a generous step budget, and return
/// the final data stack, bottom first.
pub fn run_source(source: &str) -> Vec<Int> {
    let mut runtime = boot(source).expect("compile");
    assert_eq!(Event::Stopped, runtime.run(5000).expect("run"));
    runtime.data().contents().to_vec()
}
