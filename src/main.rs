use std::process::ExitCode;

fn main() -> ExitCode {
    match taskr::cli::run(std::env::args_os()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            taskr::ui::print_error(&e);
            if e.shows_usage() {
                eprintln!();
                taskr::cli::print_usage();
            }
            ExitCode::from(e.exit_code())
        }
    }
}
