use super::{compile, rom, Core, Event, Int, Runtime};

mod core_test;
mod scenario_test;

fn boot(source: &str) -> Runtime {
    let mut core = Core::new(1000);
    rom::install(&mut core).expect("rom install");
    let entry = compile(&mut core, source).expect("compile");
    Runtime::new(core, entry, 10, 10)
}

fn run(source: &str) -> Vec<Int> {
    let mut runtime = boot(source);
    assert_eq!(Event::Stopped, runtime.run(5000).expect("run"));
    runtime.data().contents().to_vec()
}
