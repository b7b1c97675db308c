use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let launcher = fractol::PixelsDisplayLauncher::new();
    let command = fractol::RunCommand::new(launcher);

    command.execute(std::env::args_os())
}
