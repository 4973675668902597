//! Dynabind CLI

use dynabind::harness::{self, HarnessConfig};

fn main() {
    dynabind::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    match args[1].as_str() {
        "bench" => {
            let config = match HarnessConfig::parse(&args[2..]) {
                Ok(config) => config,
                Err(message) => {
                    eprintln!("error: {message}");
                    eprintln!();
                    print_bench_usage();
                    std::process::exit(1);
                }
            };

            println!(
                "Test dynamic binding in dynabind {} with {} fresh types, member `{}`...",
                env!("CARGO_PKG_VERSION"),
                config.loops,
                config.member
            );
            let report = harness::run(&config);
            println!("{report}");

            if report.failures > 0 {
                std::process::exit(1);
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        "--version" | "-V" => println!("dynabind {}", env!("CARGO_PKG_VERSION")),
        other => {
            eprintln!("error: unknown command '{other}'");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("dynabind {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: dynabind <command> [options]");
    println!();
    println!("Commands:");
    println!("  bench      Define a fresh type per iteration and read one attribute");
    println!("  help       Show this message");
    println!();
    print_bench_usage();
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=dyb_bind=debug) for tracing output.");
}

fn print_bench_usage() {
    println!("Bench options:");
    println!("  --loops=<n>          Types to define (default: 5000)");
    println!("  --member=<name>      Attribute to read (default: test)");
    println!("  --reads=<n>          Reads per instance (default: 1)");
    println!("  --report-every=<n>   Progress interval, 0 to disable (default: 500)");
    println!("  --member-first       Prefer declared members over the resolver");
}
