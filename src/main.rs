use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match regexvm::driver::parse_args(args) {
        Ok(options) => options,
        Err(msg) => {
            eprintln!("{msg}");
            eprintln!("{}", regexvm::driver::USAGE);
            return ExitCode::from(2);
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let code = regexvm::driver::run(&options, &mut out, &mut err);
    let _ = out.flush();
    ExitCode::from(code as u8)
}
