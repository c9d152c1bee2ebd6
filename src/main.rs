use std::process::ExitCode;

use msg2phone::cli::CliApp;

fn main() -> ExitCode {
    CliApp::run()
}
