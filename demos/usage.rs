use std::env;
use std::process::ExitCode;

use truthkit::*;

/// cargo run --example usage -- "p, q" "!p+q, !(p.q)" T/F
fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args().skip(1);
    let inputs = args.next().unwrap_or_else(|| String::from("p, q"));
    let outputs = args.next().unwrap_or_else(|| String::from("!p+q, !(p.q), p || q & !p"));
    let style = match args.next().map(|s| s.parse::<ValueStyle>()).transpose() {
        Ok(style) => style.unwrap_or_default(),
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match TableRequest::new(inputs, outputs).with_style(style).render() {
        Ok(table) => {
            print!("{}", table);
            ExitCode::SUCCESS
        }
        Err(TruthError::Syntax(errors)) => {
            eprintln!("Syntax error in outputs!");
            for e in errors {
                eprintln!("  {}", e);
            }
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
