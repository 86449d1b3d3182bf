use genegraph::schema::build_schema;
use genegraph::store::RecordStore;
use genegraph::{about, server};
use std::env;
use tracing_subscriber::EnvFilter;

fn usage() {
    eprintln!(
        "Usage:\n  \
  genegraph --version\n  \
  genegraph [--addr ADDR] serve\n  \
  genegraph schema-sdl\n\n  \
  ADDR defaults to {} (override with {})",
        server::DEFAULT_BIND_ADDR,
        server::BIND_ADDR_ENV
    );
}

fn parse_global_addr_arg(args: &[String]) -> (Option<String>, usize) {
    if args.len() >= 3 && args[1] == "--addr" {
        return (Some(args[2].clone()), 3);
    }
    (None, 1)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        println!("{}", about::version_cli_text());
        return Ok(());
    }

    let (addr_arg, cmd_idx) = parse_global_addr_arg(&args);
    if args.len() <= cmd_idx {
        usage();
        anyhow::bail!("Missing command");
    }

    match args[cmd_idx].as_str() {
        "serve" => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
                )
                .init();
            let addr = server::resolve_bind_addr(addr_arg.as_deref());
            tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()?
                .block_on(server::serve(&addr))
        }
        "schema-sdl" => {
            println!("{}", build_schema(RecordStore::seeded()).sdl());
            Ok(())
        }
        other => {
            usage();
            anyhow::bail!("Unknown command '{other}'");
        }
    }
}
