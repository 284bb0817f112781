use std::io;

fn main() {
    pokerarena_cli::logging::init_logging();
    let code = pokerarena_cli::run(std::env::args(), &mut io::stdout(), &mut io::stderr());
    std::process::exit(code);
}
