use std::io;

use bikeshare::core::cli::CliPaths;
use bikeshare::core::context::AppContext;
use bikeshare::logging::LogTarget;
use bikeshare::prompter::flows::session::SessionFlow;
use bikeshare::prompter::prompter::Prompter;

fn main() {
    let paths = match CliPaths::from_env() {
        Ok(paths) => paths,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let mut ctx = match AppContext::new_with_paths(paths.config_path, paths.logs_dir) {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    let prompter = Prompter::new();
    let flow = SessionFlow::new(&mut ctx, io::stdout());

    if let Err(err) = prompter.run(flow) {
        ctx.logger.error(format!("{err}"), LogTarget::ConsoleAndFile);
        std::process::exit(1);
    }
}
