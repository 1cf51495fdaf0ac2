use clap::Parser;

use zlang::{interpreter::core::Interpreter, loader, repl};

/// zlang is a tiny line-oriented scripting language. Run it without
/// arguments for an interactive shell, or pass a script to execute.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// A script file to run; the `.zl` extension is appended if absent.
    script: Option<String>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(script) => {
            let mut interpreter = Interpreter::new();

            if let Err(e) = loader::load(&mut interpreter, &script) {
                eprintln!("{e}");
                std::process::exit(1);
            }

            for line in interpreter.drain_output() {
                println!("{line}");
            }
        },
        None => repl::run_repl(),
    }
}
