/*!
## Terminal page renderer

Draws one page of trace per machine step: the source, the step
counter, the current word disassembled with an arrow at the program
counter, and both stacks. Everything comes from the read-only machine
snapshot; this module never touches machine state.

*/

extern crate ansi_term;

use crate::config::Config;
use ansi_term::Style;
use forth::lang::Error;
use forth::mach::{compile, rom, Core, Event, Runtime, StackView, Trace};

pub fn main(config: Config) {
    if let Err(error) = trace_loop(&config) {
        eprintln!("?{}", error);
        std::process::exit(1);
    }
}

fn trace_loop(config: &Config) -> Result<(), Error> {
    let mut core = Core::new(config.core_size);
    rom::install(&mut core)?;
    let entry = compile(&mut core, &config.prog)?;
    let mut runtime = Runtime::new(core, entry, config.data_size, config.return_size);
    loop {
        if !config.quiet {
            print!(
                "{}",
                render_page(&config.prog, &runtime.trace(), config.stack_elements)
            );
        }
        if let Event::Stopped = runtime.step()? {
            break;
        }
    }
    Ok(())
}

pub fn render_page(source: &str, trace: &Trace, stack_elements: usize) -> String {
    let bold = Style::new().bold();
    let dim = Style::new().dimmed();
    let mut page = String::new();
    page.push_str(&format!("{}\n", "-".repeat(60)));
    page.push_str(&format!("{}\n", bold.paint(format!("STEP {}", trace.step))));
    page.push_str(&format!("{}\n", dim.paint(source.trim_end())));
    if let Some(word) = &trace.word {
        page.push_str(&format!("[{}] {}..{}\n", word.name, word.first, word.last));
        for addr in word.first..=word.last {
            let arrow = if addr == trace.pctr { "->" } else { "  " };
            let line = match trace.cell(addr) {
                Some(cell) => format!("{} {:>4}  {}", arrow, addr, cell),
                None => format!("{} {:>4}", arrow, addr),
            };
            if addr == trace.pctr {
                page.push_str(&format!("{}\n", bold.paint(line)));
            } else {
                page.push_str(&format!("{}\n", line));
            }
        }
    }
    page.push_str(&stack_row("DATA", &trace.data, "sptr", stack_elements));
    page.push_str(&stack_row("RETURN", &trace.ret, "rptr", stack_elements));
    page
}

fn stack_row(label: &str, view: &StackView, ptr_label: &str, elements: usize) -> String {
    let mut row = format!("{:<7}", label);
    for cell in 0..elements {
        if cell as isize <= view.ptr && cell < view.cells.len() {
            row.push_str(&format!("|{:>5} ", view.cells[cell]));
        } else {
            row.push_str("|      ");
        }
    }
    row.push_str(&format!("|  {}={}\n", ptr_label, view.ptr));
    row
}
