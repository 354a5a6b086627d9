use puppyfetch::{run, RunContext, SourcePaths};
use std::io::{self, BufWriter};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::new().filter_or("PUPPYFETCH_LOG", "warn"))
        .init();

    let ctx = RunContext::from_env();
    let mut out = BufWriter::new(io::stdout().lock());

    if let Err(err) = run(&ctx, &SourcePaths::default(), &mut out) {
        eprintln!("{}", ctx.diagnostic(&err));
        process::exit(err.exit_code());
    }
}
